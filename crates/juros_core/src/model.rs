//! Simulation input and output types
//!
//! All three are plain value objects: a run owns its inputs, produces a
//! fresh schedule, and nothing is shared or mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Unit of `interest_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Monthly,
    Yearly,
}

/// Unit of `period`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Months,
    Years,
}

/// Caller-supplied parameters for one projection run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    /// Principal at month 0.
    pub initial_amount: f64,
    /// Deposit added at the end of each month; may be 0.
    pub monthly_contribution: f64,
    /// Percentage, not a fraction: `1.0` means 1%.
    pub interest_rate: f64,
    pub rate_type: RateType,
    pub period: u32,
    pub period_type: PeriodType,
}

impl SimulationInputs {
    /// Boundary validation for caller-supplied values.
    ///
    /// The projection itself is total over finite inputs and performs no
    /// checks of its own; callers that accept user input should reject bad
    /// values here before projecting.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in [
            ("initial_amount", self.initial_amount),
            ("monthly_contribution", self.monthly_contribution),
            ("interest_rate", self.interest_rate),
        ] {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }

        if self.initial_amount < 0.0 {
            return Err(InputError::NegativeInitialAmount(self.initial_amount));
        }
        if self.monthly_contribution < 0.0 {
            return Err(InputError::NegativeContribution(self.monthly_contribution));
        }
        if self.period == 0 {
            return Err(InputError::ZeroPeriod);
        }

        Ok(())
    }
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Sequence index; 0 is the starting state before any interest accrues.
    pub month: u32,
    /// Principal plus contributions to date, interest excluded.
    pub total_invested: f64,
    /// Cumulative interest earned to date.
    pub total_interest: f64,
    /// `total_invested + total_interest`, within monetary rounding.
    pub total_amount: f64,
    /// Contribution applied that month; 0 for month 0.
    pub monthly_contribution: f64,
}

/// Snapshot of the final schedule entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryData {
    pub total_amount: f64,
    pub total_invested: f64,
    pub total_interest: f64,
    /// Interest earned over capital invested, as a percentage. Non-finite
    /// when nothing was invested.
    pub yield_percentage: f64,
}
