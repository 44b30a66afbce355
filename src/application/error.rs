// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Expected failure modes of the core operations. Every variant except
/// `Domain` carries the key under which the reason is reported, so the
/// boundary can render the result envelope's `field -> reason` map
/// without branching on error internals.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{field}: {reason}")]
    NotFound { field: &'static str, reason: String },

    #[error("{field}: {reason}")]
    Conflict { field: &'static str, reason: String },

    #[error("{field}: {reason}")]
    Unauthorized { field: &'static str, reason: String },

    #[error("{field}: {reason}")]
    Persistence { field: &'static str, reason: String },
}

impl ApplicationError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found(field: &'static str, reason: impl Into<String>) -> Self {
        Self::NotFound {
            field,
            reason: reason.into(),
        }
    }

    pub fn conflict(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Conflict {
            field,
            reason: reason.into(),
        }
    }

    pub fn unauthorized(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Unauthorized {
            field,
            reason: reason.into(),
        }
    }

    pub fn persistence(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Persistence {
            field,
            reason: reason.into(),
        }
    }

    /// The key under which the reason appears in the error map.
    pub fn field(&self) -> &str {
        match self {
            Self::Domain(_) => "error",
            Self::Validation { field, .. }
            | Self::NotFound { field, .. }
            | Self::Conflict { field, .. }
            | Self::Unauthorized { field, .. }
            | Self::Persistence { field, .. } => field,
        }
    }

    pub fn reason(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::Validation { reason, .. }
            | Self::NotFound { reason, .. }
            | Self::Conflict { reason, .. }
            | Self::Unauthorized { reason, .. }
            | Self::Persistence { reason, .. } => reason.clone(),
        }
    }
}
