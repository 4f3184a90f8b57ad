//! Password record - a raw password bound to its policy verdict.

use secrecy::{ExposeSecret, SecretString};

use crate::error::ValidationError;
use crate::evaluator::evaluate_password;

/// A raw password and whether it satisfied the policy when it was built.
///
/// `is_valid` always comes from [`evaluate_password`]; there is no way to set
/// it directly.
#[derive(Debug, Clone)]
pub struct PasswordRecord {
    raw: SecretString,
    is_valid: bool,
}

impl PasswordRecord {
    /// Builds a record for a password that satisfies the policy.
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidField` with the first violated rule.
    pub fn new(raw: SecretString) -> Result<Self, ValidationError> {
        evaluate_password(&raw).map_err(ValidationError::invalid_password)?;
        Ok(Self { raw, is_valid: true })
    }

    /// Builds a record whatever the verdict, for keeping rejected attempts.
    pub fn assess(raw: SecretString) -> Self {
        let is_valid = evaluate_password(&raw).is_ok();
        Self { raw, is_valid }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns `true` if the raw password equals `value` exactly.
    pub fn matches(&self, value: &str) -> bool {
        self.raw.expose_secret() == value
    }
}
