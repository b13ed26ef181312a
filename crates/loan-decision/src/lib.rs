//! Loan application decisioning on top of a pre-trained credit model.
//!
//! The crate centers on a deterministic feature-engineering pipeline that
//! reproduces the transformations applied when the model was fit, so that
//! inference-time vectors line up column-for-column with training-time
//! vectors. Everything else (configuration, telemetry, the HTTP router)
//! is plumbing around that core.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
