mod app_state;

pub use app_state::{
    AppState, FieldId, InsightStatus, ScheduleState, SimulationFormState, TabId,
};
