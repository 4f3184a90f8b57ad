//! Password policy validation library
//!
//! This library checks passwords against a fixed policy, records every
//! accepted attempt, and exposes a JSON request gateway with an optional
//! axum server in front of it.
//!
//! # Policy
//!
//! Whitespace is ignored. What remains must:
//! - have at least 9 characters
//! - contain no character more than once
//! - contain a digit, a lowercase letter, an uppercase letter and one of
//!   `!@#$%^&*()-+`
//!
//! Only the first broken rule is reported, in that order.
//!
//! # Features
//!
//! - `server` (default): axum HTTP server, clap configuration and the
//!   `pwd-validator` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use pwd_validator::{InMemoryAttemptStore, RequestGateway, ValidationService};
//!
//! let store = Arc::new(InMemoryAttemptStore::new());
//! let gateway = RequestGateway::new(ValidationService::new(store));
//!
//! let response = gateway.handle_body(br#"{"password":"AbTp9!fok"}"#);
//! assert_eq!(response.status, 200);
//! ```

// Internal modules
mod error;
mod evaluator;
mod gateway;
mod policy;
mod record;
mod sections;
mod service;
mod store;

#[cfg(feature = "server")]
pub mod server;

// Public API
pub use error::{StoreError, ValidationError};
pub use evaluator::evaluate_password;
pub use gateway::{GatewayError, GatewayResponse, RequestGateway, ResponseBody};
pub use policy::{MIN_LENGTH, PolicyViolation, SPECIAL_CHARACTERS, normalize};
pub use record::PasswordRecord;
pub use service::{PasswordOutput, ValidationService};
pub use store::{AttemptStore, InMemoryAttemptStore};
