//! Password policy evaluator - runs the sections in order.

use secrecy::{ExposeSecret, SecretString};

use crate::policy::{PolicyViolation, normalize};
use crate::sections::{character_variety_section, length_section, uniqueness_section};

/// Evaluates a password against the fixed policy.
///
/// Whitespace is stripped first and never counts toward any rule. Sections run
/// in order (length, uniqueness, character variety) and the first violation is
/// returned.
///
/// # Returns
/// - `Ok(())` if the password satisfies every rule
/// - `Err(violation)` with the first rule it broke
pub fn evaluate_password(password: &SecretString) -> Result<(), PolicyViolation> {
    let normalized = normalize(password.expose_secret());

    length_section(&normalized)?;
    let profile = uniqueness_section(&normalized)?;
    character_variety_section(&profile)?;

    Ok(())
}
