//! Live formatting for the phone and CPF inputs.
//!
//! Every function here is total: short, long or garbage input produces a
//! displayable string, never an error.

use crate::{CPF_MAX_DIGITS, PHONE_MAX_DIGITS};

use std::sync::LazyLock;

use regex::Regex;

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2})([0-9]{5})([0-9]{4})$").expect("valid phone pattern"));

static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{3})([0-9]{3})([0-9]{3})([0-9]{2})$").expect("valid CPF pattern")
});

/// Keep only ASCII digits, truncated to `max` of them.
pub fn digits_only(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

/// Format a phone entry as `(DD) DDDDD-DDDD`.
///
/// Anything short of 11 digits comes back as the bare digits so partial
/// input can be shown while the user is still typing.
pub fn format_phone(raw: &str) -> String {
    let cleaned = digits_only(raw, PHONE_MAX_DIGITS);
    match PHONE_PATTERN.captures(&cleaned) {
        Some(caps) => format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]),
        None => cleaned,
    }
}

/// Format a CPF entry as `DDD.DDD.DDD-DD`, or return the bare digits.
pub fn format_cpf(raw: &str) -> String {
    let cleaned = digits_only(raw, CPF_MAX_DIGITS);
    match CPF_PATTERN.captures(&cleaned) {
        Some(caps) => format!("{}.{}.{}-{}", &caps[1], &caps[2], &caps[3], &caps[4]),
        None => cleaned,
    }
}

/// An email is accepted as soon as it contains `@`.
///
/// Deliberately loose: tightening it would reject entries the form has
/// always accepted.
pub fn is_valid_email(value: &str) -> bool {
    value.contains('@')
}
