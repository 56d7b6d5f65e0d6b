//! Compound-interest projection library
//!
//! This crate provides the arithmetic core of the simulator: a deterministic
//! projection engine that turns a set of investment parameters into a
//! month-indexed amortization schedule, and a reducer that collapses the
//! schedule into final totals and a yield percentage.
//!
//! Both entry points are pure functions with no I/O and no hidden state, so
//! they can be called concurrently from any number of independent callers:
//!
//! ```ignore
//! use juros_core::{PeriodType, RateType, SimulationInputs, project, summarize};
//!
//! let inputs = SimulationInputs {
//!     initial_amount: 1_000.0,
//!     monthly_contribution: 100.0,
//!     interest_rate: 1.0,
//!     rate_type: RateType::Monthly,
//!     period: 5,
//!     period_type: PeriodType::Years,
//! };
//!
//! let schedule = project(&inputs);
//! let summary = summarize(&schedule);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod projection;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::InputError;
pub use model::{PeriodType, RateType, SimulationInputs, SimulationResult, SummaryData};
pub use projection::{monthly_rate, project, total_months};
pub use summary::summarize;
