//! Tests for the dashboard application
//!
//! Tests are organized by topic:
//! - `format` - BRL currency and percentage formatting
//! - `prompt` - tip prompt interpolation
//! - `state` - form edits, validation plumbing, recomputation
//! - `worker` - insight worker fallback behavior

mod prompt;
