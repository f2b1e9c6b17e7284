use thiserror::Error;

use crate::{config::LoadError, filter::FilterError, telemetry::TelemetryError};

/// Top-level failure surfaced by the binary. Render failures never reach
/// this type; they are recovered line by line inside the filter loop.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Filter(#[from] FilterError),
}
