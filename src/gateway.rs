//! Request gateway - translates JSON payloads to service calls and back.
//!
//! The gateway knows nothing about the transport. It takes a body (or the
//! failure to read one) and produces a status code plus a JSON payload:
//!
//! | outcome                         | status |
//! |---------------------------------|--------|
//! | verdict                         | 200    |
//! | body could not be read          | 400    |
//! | lookup miss                     | 404    |
//! | policy violation                | 422    |
//! | malformed payload, anything else| 500    |

use std::fmt::Display;
use std::io::Read;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ValidationError;
use crate::service::{PasswordOutput, ValidationService};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

#[derive(Deserialize)]
struct PasswordInput {
    password: String,
}

/// Everything that can go wrong between receiving a body and sending a verdict.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to read request body: {0}")]
    UnreadableBody(String),
    #[error("failed to decode request body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl GatewayError {
    pub fn status(&self) -> u16 {
        match self {
            Self::UnreadableBody(_) => STATUS_BAD_REQUEST,
            Self::Validation(ValidationError::NotFound { .. }) => STATUS_NOT_FOUND,
            Self::Validation(ValidationError::InvalidField { .. }) => STATUS_UNPROCESSABLE_ENTITY,
            Self::Malformed(_) => STATUS_INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON payload of a gateway response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Verdict(PasswordOutput),
    Error { error: String },
}

/// Status code and payload to hand back to the transport unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl GatewayResponse {
    pub fn verdict(output: PasswordOutput) -> Self {
        Self {
            status: STATUS_OK,
            body: ResponseBody::Verdict(output),
        }
    }

    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error {
                error: message.into(),
            },
        }
    }
}

impl From<GatewayError> for GatewayResponse {
    fn from(err: GatewayError) -> Self {
        Self::error(err.status(), err.to_string())
    }
}

/// Boundary adapter in front of [`ValidationService`].
#[derive(Clone)]
pub struct RequestGateway {
    service: ValidationService,
}

impl RequestGateway {
    pub fn new(service: ValidationService) -> Self {
        Self { service }
    }

    /// Reads the whole body from `reader`, then handles it.
    pub fn handle_reader<R: Read>(&self, mut reader: R) -> GatewayResponse {
        let mut body = Vec::new();
        match reader.read_to_end(&mut body) {
            Ok(_) => self.handle_body(&body),
            Err(err) => self.unreadable(err),
        }
    }

    /// Decodes `{"password": <string>}` and runs the validation.
    pub fn handle_body(&self, body: &[u8]) -> GatewayResponse {
        match self.validate(body) {
            Ok(output) => GatewayResponse::verdict(output),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::info!(error = %err, status = err.status(), "password validation failed");
                err.into()
            }
        }
    }

    /// Response for a body the transport could not read.
    pub fn unreadable(&self, err: impl Display) -> GatewayResponse {
        #[cfg(feature = "tracing")]
        tracing::error!(error = %err, "error reading request body");
        GatewayError::UnreadableBody(err.to_string()).into()
    }

    fn validate(&self, body: &[u8]) -> Result<PasswordOutput, GatewayError> {
        let input: PasswordInput = serde_json::from_slice(body)?;
        let password = SecretString::new(input.password.into());
        Ok(self.service.execute(password)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AttemptStore, InMemoryAttemptStore};
    use std::io;
    use std::sync::Arc;

    struct ErrReader;

    impl Read for ErrReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("test error"))
        }
    }

    fn gateway() -> (RequestGateway, Arc<InMemoryAttemptStore>) {
        let store = Arc::new(InMemoryAttemptStore::new());
        let service = ValidationService::new(store.clone());
        (RequestGateway::new(service), store)
    }

    fn error_message(response: &GatewayResponse) -> &str {
        match &response.body {
            ResponseBody::Error { error } => error,
            other => panic!("expected error body, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_password() {
        let (gateway, store) = gateway();
        let response = gateway.handle_body(br#"{"password":"AbTp9!fok"}"#);

        assert_eq!(response.status, STATUS_OK);
        assert_eq!(
            serde_json::to_value(&response.body).unwrap(),
            serde_json::json!({ "isValid": true })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_too_short_password() {
        let (gateway, store) = gateway();
        let response = gateway.handle_body(br#"{"password":"12345678"}"#);

        assert_eq!(response.status, STATUS_UNPROCESSABLE_ENTITY);
        assert!(error_message(&response).contains("9 characters"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_repeated_character_password() {
        let (gateway, _) = gateway();
        let response = gateway.handle_body(br#"{"password":"AbTp9!foA"}"#);

        assert_eq!(response.status, STATUS_UNPROCESSABLE_ENTITY);
        assert!(error_message(&response).contains("repeated characters"));
    }

    #[test]
    fn test_error_body_does_not_echo_password() {
        let (gateway, _) = gateway();
        let response = gateway.handle_body(br#"{"password":"AbTp9!foA"}"#);

        let json = serde_json::to_value(&response.body).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_malformed_json() {
        let (gateway, _) = gateway();
        let response = gateway.handle_body(b"error");
        assert_eq!(response.status, STATUS_INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_or_wrong_typed_field() {
        let (gateway, _) = gateway();
        let bodies: [&[u8]; 3] = [br#"{}"#, br#"{"password":42}"#, br#"{"password":null}"#];
        for body in bodies {
            let response = gateway.handle_body(body);
            assert_eq!(response.status, STATUS_INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_unreadable_body() {
        let (gateway, store) = gateway();
        let response = gateway.handle_reader(ErrReader);

        assert_eq!(response.status, STATUS_BAD_REQUEST);
        assert!(error_message(&response).contains("test error"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_handle_reader_reads_whole_body() {
        let (gateway, _) = gateway();
        let response = gateway.handle_reader(&br#"{"password":"AbTp9!fok"}"#[..]);
        assert_eq!(response.status, STATUS_OK);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = GatewayError::from(ValidationError::NotFound {
            entity: "Password",
            id: "x".to_string(),
        });
        assert_eq!(GatewayResponse::from(err).status, STATUS_NOT_FOUND);
    }
}
