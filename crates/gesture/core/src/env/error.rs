//! Oracle access errors.

use crate::error::{ErrorSeverity, GestureError};

/// A gate needed an oracle that the environment does not provide.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("InventoryOracle not available")]
    InventoryNotAvailable,

    #[error("TargetOracle not available")]
    TargetsNotAvailable,
}

impl GestureError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InventoryNotAvailable => "ORACLE_INVENTORY_NOT_AVAILABLE",
            Self::TargetsNotAvailable => "ORACLE_TARGETS_NOT_AVAILABLE",
        }
    }
}
