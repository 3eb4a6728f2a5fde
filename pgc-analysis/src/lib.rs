//! Narrative financial analysis via an external generative-text service.
//!
//! Given one period's figures and its derived indicators, this crate builds
//! a consultant-style prompt, asks the service for output constrained to a
//! fixed JSON schema (three time horizons plus a summary), and parses the
//! typed response. Pure I/O glue: no financial computation happens here.

mod client;
mod prompt;
mod schema;

pub use client::{AnalysisError, GeminiModel, TextModel, analyze_financial_health};
pub use prompt::build_prompt;
pub use schema::{AnalysisResponse, AnalysisSection, AnalysisStatus, response_schema};
