//! Unified error types surfaced by the runtime.
use thiserror::Error;

use decon_core::{DeconError, ErrorSeverity, RegistryError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Material registry could not be built; the session cannot start.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("command '{command}' has an invalid argument: {reason}")]
    InvalidArgument { command: String, reason: String },
}

impl DeconError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Registry(err) => err.severity(),
            Self::InvalidArgument { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(err) => err.error_code(),
            Self::InvalidArgument { .. } => "RUNTIME_INVALID_ARGUMENT",
        }
    }
}
