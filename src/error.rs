//! Error types shared by the record, store and service layers.

use thiserror::Error;

use crate::policy::PolicyViolation;

/// Expected, user-facing failures of the validation pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The password broke a policy rule.
    #[error("field `{field}` is invalid: {reason}")]
    InvalidField {
        field: &'static str,
        reason: PolicyViolation,
    },
    /// A lookup found no matching entity.
    #[error("{entity} not found with id '{id}'")]
    NotFound { entity: &'static str, id: String },
}

impl ValidationError {
    pub(crate) fn invalid_password(reason: PolicyViolation) -> Self {
        Self::InvalidField {
            field: "password",
            reason,
        }
    }
}

/// Failures of an [`crate::AttemptStore`] append.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("attempt store is full ({limit} records)")]
    CapacityExceeded { limit: usize },
}
