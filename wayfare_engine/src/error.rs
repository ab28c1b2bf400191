//! Error types that cross the engine boundary.
//!
//! Gameplay misses (unknown items, blocked drops, inedible food, unmatched
//! directions) never surface here; they are absorbed by the operations that
//! encounter them.

use thiserror::Error;

/// Failures the engine reports to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The dataset is internally inconsistent. Fatal at startup.
    #[error("world configuration error:\n{0}")]
    Configuration(String),
    /// A room or item lookup failed.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },
    /// An item action label outside of take/drop/eat.
    #[error("unknown item action '{0}'")]
    UnknownAction(String),
}

impl EngineError {
    pub(crate) fn room_not_found(id: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind: "room",
            id: id.into(),
        }
    }

    pub(crate) fn item_not_found(id: impl Into<String>) -> Self {
        EngineError::NotFound {
            kind: "item",
            id: id.into(),
        }
    }

    /// Returns true for lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(self, EngineError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
