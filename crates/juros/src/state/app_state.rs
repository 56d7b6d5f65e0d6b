use juros_core::{
    PeriodType, RateType, SimulationInputs, SimulationResult, SummaryData, project, summarize,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Simulation,
    Schedule,
    Insight,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Simulation, TabId::Schedule, TabId::Insight];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Simulation => "Simulation",
            TabId::Schedule => "Schedule",
            TabId::Insight => "Insight",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Simulation => 0,
            TabId::Schedule => 1,
            TabId::Insight => 2,
        }
    }
}

/// Editable fields of the parameters form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    InitialAmount,
    MonthlyContribution,
    InterestRate,
    RateType,
    Period,
    PeriodType,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::InitialAmount,
        FieldId::MonthlyContribution,
        FieldId::InterestRate,
        FieldId::RateType,
        FieldId::Period,
        FieldId::PeriodType,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::InitialAmount => "Initial Amount",
            FieldId::MonthlyContribution => "Monthly Contribution",
            FieldId::InterestRate => "Interest Rate (%)",
            FieldId::RateType => "Rate Type",
            FieldId::Period => "Period",
            FieldId::PeriodType => "Period Type",
        }
    }

    /// Enum-valued fields cycle in place instead of opening a text edit.
    pub fn is_cycling(&self) -> bool {
        matches!(self, FieldId::RateType | FieldId::PeriodType)
    }
}

#[derive(Debug, Default)]
pub struct SimulationFormState {
    pub selected_field: usize,
    /// Text buffer while a numeric field is being edited.
    pub editing: Option<String>,
}

#[derive(Debug, Default)]
pub struct ScheduleState {
    pub scroll_offset: usize,
}

/// Lifecycle of the AI tip request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InsightStatus {
    #[default]
    Idle,
    Loading,
    Ready(String),
}

pub struct AppState {
    pub inputs: SimulationInputs,
    pub results: Vec<SimulationResult>,
    pub summary: Option<SummaryData>,
    pub active_tab: TabId,
    pub form_state: SimulationFormState,
    pub schedule_state: ScheduleState,
    pub insight: InsightStatus,
    /// Set by the insight screen; drained by the app loop into a worker request.
    pub insight_requested: bool,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let inputs = SimulationInputs {
            initial_amount: 1_000.0,
            monthly_contribution: 100.0,
            interest_rate: 1.0,
            rate_type: RateType::Monthly,
            period: 5,
            period_type: PeriodType::Years,
        };
        let results = project(&inputs);
        let summary = summarize(&results);

        Self {
            inputs,
            results,
            summary,
            active_tab: TabId::Simulation,
            form_state: SimulationFormState::default(),
            schedule_state: ScheduleState::default(),
            insight: InsightStatus::default(),
            insight_requested: false,
            error_message: None,
            exit: false,
        }
    }
}

impl AppState {
    pub fn switch_tab(&mut self, tab: TabId) {
        self.active_tab = tab;
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// A numeric field edit is in progress on the simulation tab.
    pub fn is_editing(&self) -> bool {
        self.active_tab == TabId::Simulation && self.form_state.editing.is_some()
    }

    /// Re-run the projection after an input change.
    pub fn recompute(&mut self) {
        self.results = project(&self.inputs);
        self.summary = summarize(&self.results);
        self.schedule_state.scroll_offset = 0;
    }

    /// Parse and apply a committed text edit to the given field.
    ///
    /// Validates the candidate inputs at the boundary; the stored inputs are
    /// only replaced (and the schedule recomputed) when everything checks out.
    pub fn apply_field_edit(&mut self, field: FieldId, text: &str) -> Result<(), String> {
        let mut candidate = self.inputs;
        match field {
            FieldId::InitialAmount => candidate.initial_amount = parse_decimal(text)?,
            FieldId::MonthlyContribution => candidate.monthly_contribution = parse_decimal(text)?,
            FieldId::InterestRate => candidate.interest_rate = parse_decimal(text)?,
            FieldId::Period => {
                candidate.period = text
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid period: {text}"))?;
            }
            FieldId::RateType | FieldId::PeriodType => return Ok(()),
        }

        candidate.validate().map_err(|e| e.to_string())?;

        self.inputs = candidate;
        self.recompute();
        Ok(())
    }

    /// Toggle an enum-valued field and recompute.
    pub fn cycle_field(&mut self, field: FieldId) {
        match field {
            FieldId::RateType => {
                self.inputs.rate_type = match self.inputs.rate_type {
                    RateType::Monthly => RateType::Yearly,
                    RateType::Yearly => RateType::Monthly,
                };
            }
            FieldId::PeriodType => {
                self.inputs.period_type = match self.inputs.period_type {
                    PeriodType::Months => PeriodType::Years,
                    PeriodType::Years => PeriodType::Months,
                };
            }
            _ => return,
        }
        self.recompute();
    }
}

/// Parse a decimal the way users type it, accepting a comma separator.
fn parse_decimal(text: &str) -> Result<f64, String> {
    text.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| format!("Invalid number: {text}"))
}
