//! Integration tests for the projection engine and summary reducer
//!
//! Tests are organized by topic:
//! - `projection` - schedule shape, rate conversion, rounding
//! - `summary` - reduction to final totals and yield edge cases
//! - `inputs` - boundary validation

mod projection;
mod summary;
