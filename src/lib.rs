//! Cost reporting and weighted scoring for LLM evaluation result files.
//!
//! The binary entrypoint renders the per-provider cost table; the
//! [`calculate_score`] function is the library surface an evaluation
//! harness calls per test case.

pub mod cli;
pub mod services;
pub mod types;

pub use services::scorer::{calculate_score, ScoreConfig, ScoreOutcome};
