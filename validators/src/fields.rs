use crate::messages::{INVALID_EMAIL, MIN_LENGTH_3, REQUIRED_FIELD};
use crate::validation::Validation;
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_LENGTH: usize = 3;

// Local part (dot-separated atoms or a quoted string), then either a bracketed IPv4-like
// literal or a dotted domain ending in a label of at least two letters. Whitespace in the
// atom classes is the ECMAScript `\s` set, and the quoted string excludes line terminators.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"^(([^<>()\[\]\\.,;:@"\t\n\x0B\x0C\r\x20\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]+"#,
        r#"(\.[^<>()\[\]\\.,;:@"\t\n\x0B\x0C\r\x20\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]+)*)"#,
        r#"|("[^\n\r\u{2028}\u{2029}]+"))"#,
        r#"@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    ))
    .expect("email pattern is valid")
});

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

/// Required field with at least [`MIN_LENGTH`] characters.
///
/// Length is measured in UTF-16 code units, so a character outside the BMP counts twice.
/// Whitespace is not trimmed.
pub fn validate_empty_or_length3(value: Option<&str>) -> Validation {
    match value {
        _ if is_blank(value) => Validation::Invalid(REQUIRED_FIELD),
        Some(v) if v.encode_utf16().count() < MIN_LENGTH => Validation::Invalid(MIN_LENGTH_3),
        _ => Validation::Valid,
    }
}

/// Required field holding an email address.
pub fn validate_empty_and_email(value: Option<&str>) -> Validation {
    match value {
        _ if is_blank(value) => Validation::Invalid(REQUIRED_FIELD),
        Some(v) if !is_email(v) => Validation::Invalid(INVALID_EMAIL),
        _ => Validation::Valid,
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
