use std::fmt;

/// Input values rejected at the application boundary before projection.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    NegativeInitialAmount(f64),
    NegativeContribution(f64),
    NonFinite { field: &'static str },
    ZeroPeriod,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NegativeInitialAmount(value) => {
                write!(f, "initial amount must not be negative (got {value})")
            }
            InputError::NegativeContribution(value) => {
                write!(f, "monthly contribution must not be negative (got {value})")
            }
            InputError::NonFinite { field } => {
                write!(f, "{field} must be a finite number")
            }
            InputError::ZeroPeriod => write!(f, "period must be at least 1"),
        }
    }
}

impl std::error::Error for InputError {}
