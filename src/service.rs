//! Validation service - builds a record, logs the attempt, returns the verdict.

use std::sync::Arc;

use secrecy::SecretString;
use serde::Serialize;

use crate::error::ValidationError;
use crate::record::PasswordRecord;
use crate::store::AttemptStore;

/// Verdict returned to callers. Never carries the password itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PasswordOutput {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
}

impl From<&PasswordRecord> for PasswordOutput {
    fn from(record: &PasswordRecord) -> Self {
        Self {
            is_valid: record.is_valid(),
        }
    }
}

/// Entry point of the validation pipeline.
#[derive(Clone)]
pub struct ValidationService {
    store: Arc<dyn AttemptStore>,
}

impl ValidationService {
    pub fn new(store: Arc<dyn AttemptStore>) -> Self {
        Self { store }
    }

    /// Validates a password and records the attempt.
    ///
    /// A policy violation is returned as-is and nothing is saved. Saving is
    /// best-effort: a store failure is logged and ignored, and the verdict is
    /// still returned.
    pub fn execute(&self, password: SecretString) -> Result<PasswordOutput, ValidationError> {
        #[cfg(feature = "tracing")]
        tracing::debug!("validate password started");

        let record = match PasswordRecord::new(password) {
            Ok(record) => record,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::info!(error = %err, "password rejected");
                return Err(err);
            }
        };
        let output = PasswordOutput::from(&record);

        if let Err(_err) = self.store.save(record) {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "failed to record password attempt");
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(is_valid = output.is_valid, "validate password finished");

        Ok(output)
    }

    /// Looks up a previously recorded attempt.
    pub fn find_attempt(&self, value: &str) -> Result<PasswordRecord, ValidationError> {
        self.store.find_by_value(value)
    }
}
