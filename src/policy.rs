//! Password policy constants and violation reasons.

use thiserror::Error;

/// Minimum number of characters once whitespace has been removed.
pub const MIN_LENGTH: usize = 9;

/// Characters accepted as "special" by the policy.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-+";

/// The first rule a password broke, in evaluation order.
///
/// `Display` yields the reason string reported to callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("must have at least {} characters (excluding spaces)", MIN_LENGTH)]
    TooShort,
    #[error("must not contain repeated characters (excluding spaces)")]
    RepeatedCharacter,
    #[error("must contain at least one digit (excluding spaces)")]
    MissingDigit,
    #[error("must contain at least one lowercase letter (excluding spaces)")]
    MissingLowercase,
    #[error("must contain at least one uppercase letter (excluding spaces)")]
    MissingUppercase,
    #[error(
        "must contain at least one special character ({}, excluding spaces)",
        SPECIAL_CHARACTERS
    )]
    MissingSpecial,
}

/// Removes every Unicode whitespace character.
pub fn normalize(password: &str) -> String {
    password.chars().filter(|c| !c.is_whitespace()).collect()
}

pub(crate) fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}
