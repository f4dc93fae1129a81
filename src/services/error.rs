//! Errors shared by the booking services.

use thiserror::Error;

/// Outcome of a failed catalog operation.
///
/// Every variant carries the entity name so callers can build a
/// user-facing message without inspecting the cause.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("{entity} '{name}' is already listed")]
    AlreadyExists { entity: &'static str, name: String },

    #[error("show {show_id} references missing {entity} {id}")]
    ReferenceBroken {
        show_id: i32,
        entity: &'static str,
        id: i32,
    },

    #[error("{entity} could not be saved: {message}")]
    Persistence {
        entity: &'static str,
        message: String,
    },

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl BookingError {
    #[must_use]
    pub const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn already_exists(entity: &'static str, name: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity,
            name: name.into(),
        }
    }

    /// Wraps a store failure with the entity it was acting on.
    pub fn persistence(entity: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Persistence {
            entity,
            message: format!("{err:#}"),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
