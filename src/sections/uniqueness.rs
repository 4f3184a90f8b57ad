//! Uniqueness section - rejects repeated characters and classifies the rest.

use std::collections::HashSet;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::policy::{PolicyViolation, is_special};

/// Character classes seen while scanning a password.
///
/// Digits, lowercase and uppercase letters are matched by Unicode general
/// category (`Nd`, `Ll`, `Lu`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharacterProfile {
    pub digit: bool,
    pub lower: bool,
    pub upper: bool,
    pub special: bool,
}

impl CharacterProfile {
    fn record(&mut self, c: char) {
        match c.general_category() {
            GeneralCategory::DecimalNumber => self.digit = true,
            GeneralCategory::LowercaseLetter => self.lower = true,
            GeneralCategory::UppercaseLetter => self.upper = true,
            _ if is_special(c) => self.special = true,
            _ => {}
        }
    }
}

/// Scans the normalized password once, left to right.
///
/// Stops at the first code point that was already seen. Otherwise returns the
/// classes found, which [`super::character_variety_section`] checks.
pub fn uniqueness_section(normalized: &str) -> Result<CharacterProfile, PolicyViolation> {
    let mut seen = HashSet::new();
    let mut profile = CharacterProfile::default();

    for c in normalized.chars() {
        if !seen.insert(c) {
            return Err(PolicyViolation::RepeatedCharacter);
        }
        profile.record(c);
    }

    Ok(profile)
}
