//! Length section - checks the minimum number of non-whitespace characters.

use super::SectionResult;
use crate::policy::{MIN_LENGTH, PolicyViolation};

/// Checks that the normalized password has at least [`MIN_LENGTH`] characters.
///
/// Counts `char`s, so multi-byte code points count once.
pub fn length_section(normalized: &str) -> SectionResult {
    if normalized.chars().count() < MIN_LENGTH {
        return Err(PolicyViolation::TooShort);
    }
    Ok(())
}
