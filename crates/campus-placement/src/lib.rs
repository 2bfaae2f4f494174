//! Campus recruitment engine: drive eligibility, resume heuristics, application lifecycle, and
//! recommendations, plus the configuration and telemetry plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
