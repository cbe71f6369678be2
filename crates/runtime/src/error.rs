//! Unified error types surfaced by the runtime API.
use gesture_core::{ConfigError, ErrorSeverity, GestureError, TemplateError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid recognizer configuration")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("event buffer size must be at least 1")]
    EventBufferTooSmall,

    #[error("template '{name}' has {actual} points, session expects {expected}")]
    TemplateSizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl RuntimeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(err) => err.severity(),
            Self::Template(err) => err.severity(),
            Self::EventBufferTooSmall | Self::TemplateSizeMismatch { .. } => {
                ErrorSeverity::Validation
            }
        }
    }
}
