//! Character variety section - checks for digits, lowercase, uppercase, special chars.

use super::{CharacterProfile, SectionResult};
use crate::policy::PolicyViolation;

/// Reports the first missing class in the order digit, lowercase, uppercase, special.
pub fn character_variety_section(profile: &CharacterProfile) -> SectionResult {
    let checks = [
        (profile.digit, PolicyViolation::MissingDigit),
        (profile.lower, PolicyViolation::MissingLowercase),
        (profile.upper, PolicyViolation::MissingUppercase),
        (profile.special, PolicyViolation::MissingSpecial),
    ];

    match checks.into_iter().find(|(present, _)| !present) {
        Some((_, violation)) => Err(violation),
        None => Ok(()),
    }
}
