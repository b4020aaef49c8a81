//! Observability for `sitegen` runs.
//!
//! Structured logging only; per-file warnings and build progress go through
//! `tracing`.

pub mod logging;

pub use logging::{LogFormat, LogSettings, init_logging};
