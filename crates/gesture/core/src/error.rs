//! Common error infrastructure for gesture-core.
//!
//! Domain-specific errors (`NormalizeError`, `ConfigError`, ...) live next to
//! the code that produces them. They all implement [`GestureError`] so callers
//! can classify failures uniformly when logging.
//!
//! Recognition failures (no match, failed gates) are *not* errors: they are
//! reported through [`crate::RecognitionReason`] on a normal result.

/// Severity level of an error, used for categorization when logging.
///
/// - **Validation**: invalid input or configuration, rejected without retry
/// - **Internal**: a caller broke a documented precondition
/// - **Fatal**: the recognizer cannot proceed at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: resample count below two, empty template name
    Validation,

    /// Contract violation by the caller.
    ///
    /// Examples: normalizing a stroke with a single point
    Internal,

    /// Required collaborator is missing.
    ///
    /// Examples: a gated template evaluated without its oracle
    Fatal,
}

/// Common trait for all gesture-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must fix the problem
pub trait GestureError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for this error variant, suitable for log fields.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
