//! Password policy sections
//!
//! Each section checks one rule of the policy against the normalized password.

mod length;
mod uniqueness;
mod variety;

pub use length::length_section;
pub use uniqueness::{CharacterProfile, uniqueness_section};
pub use variety::character_variety_section;

use crate::policy::PolicyViolation;

/// Result type for section evaluation functions.
/// - `Ok(())` - Section passed
/// - `Err(violation)` - Section failed with the violated rule
pub type SectionResult = Result<(), PolicyViolation>;
