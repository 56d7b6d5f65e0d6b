//! External financial-tip collaborator
//!
//! Formats the simulation summary into a natural-language prompt and asks a
//! local Ollama server for advice. Failures never propagate past the worker:
//! callers always end up with either real text or [`FALLBACK_INSIGHT`].

mod client;
mod prompt;

pub use client::{InsightClient, InsightConfig, InsightError};
pub use prompt::{FALLBACK_INSIGHT, build_prompt};
