// ============================================================================
// Lugo Shared - Validators
// File: crates/lugo-shared/src/validators.rs
// ============================================================================
//! Validators and sanitizers for Brazilian documents and form input.
//!
//! Every function here is pure and total: malformed input yields `false` (or
//! an invalid [`PasswordStrength`]), never a panic. The `*_field` variants
//! adapt the checks to `validator` custom functions.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use validator::ValidationError;

use crate::constants::{
    LANDLINE_PHONE_LENGTH, MIN_PASSWORD_LENGTH, MOBILE_PHONE_LENGTH, POSTAL_CODE_LENGTH,
    TAX_ID_LENGTH,
};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Keeps only ASCII digits.
pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (first_weight - i as u32))
        .sum();
    let rest = (sum * 10) % 11;
    if rest == 10 {
        0
    } else {
        rest
    }
}

/// Validates a CPF (Brazilian individual taxpayer number).
pub fn validate_tax_id(input: &str) -> bool {
    let digits: Vec<u32> = only_digits(input)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != TAX_ID_LENGTH || all_same(&digits) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Validates a Brazilian phone number: 10 digits (landline) or 11 (mobile).
pub fn validate_phone(input: &str) -> bool {
    let digits = only_digits(input);
    if digits.len() != LANDLINE_PHONE_LENGTH && digits.len() != MOBILE_PHONE_LENGTH {
        return false;
    }

    let bytes = digits.as_bytes();
    !bytes.windows(2).all(|w| w[0] == w[1])
}

/// Validates a CEP (Brazilian postal code).
pub fn validate_postal_code(input: &str) -> bool {
    only_digits(input).len() == POSTAL_CODE_LENGTH
}

pub fn validate_email(input: &str) -> bool {
    EMAIL_RE.is_match(input)
}

/// Outcome of [`validate_password_strength`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordStrength {
    pub valid: bool,
    pub message: String,
}

impl PasswordStrength {
    fn weak(message: &str) -> Self {
        Self { valid: false, message: message.to_string() }
    }
}

/// Checks length, then uppercase, lowercase and digit presence. The first
/// failing rule decides the message.
pub fn validate_password_strength(input: &str) -> PasswordStrength {
    if input.chars().count() < MIN_PASSWORD_LENGTH {
        return PasswordStrength::weak("Password must be at least 8 characters long");
    }
    if !input.chars().any(|c| c.is_ascii_uppercase()) {
        return PasswordStrength::weak("Password must contain at least one uppercase letter");
    }
    if !input.chars().any(|c| c.is_ascii_lowercase()) {
        return PasswordStrength::weak("Password must contain at least one lowercase letter");
    }
    if !input.chars().any(|c| c.is_ascii_digit()) {
        return PasswordStrength::weak("Password must contain at least one number");
    }

    PasswordStrength { valid: true, message: "strong password".to_string() }
}

/// Escapes characters that would let user text break out of HTML markup.
pub fn sanitize_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn validate_file_size(size_bytes: u64, max_size_mb: u64) -> bool {
    size_bytes <= max_size_mb * 1024 * 1024
}

pub fn validate_file_type(content_type: &str, allowed_prefixes: &[String]) -> bool {
    allowed_prefixes
        .iter()
        .any(|prefix| content_type.starts_with(prefix.as_str()))
}

// ---------------------------------------------------------------------------
// `validator` adapters
// ---------------------------------------------------------------------------

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub fn validate_tax_id_field(value: &str) -> Result<(), ValidationError> {
    if validate_tax_id(value) {
        Ok(())
    } else {
        Err(field_error("cpf", "Invalid CPF"))
    }
}

pub fn validate_phone_field(value: &str) -> Result<(), ValidationError> {
    if validate_phone(value) {
        Ok(())
    } else {
        Err(field_error("phone", "Invalid phone number"))
    }
}

pub fn validate_postal_code_field(value: &str) -> Result<(), ValidationError> {
    if validate_postal_code(value) {
        Ok(())
    } else {
        Err(field_error("cep", "Invalid CEP"))
    }
}

pub fn validate_email_field(value: &str) -> Result<(), ValidationError> {
    if validate_email(value) {
        Ok(())
    } else {
        Err(field_error("email", "Invalid email"))
    }
}

pub fn validate_password_field(value: &str) -> Result<(), ValidationError> {
    let strength = validate_password_strength(value);
    if strength.valid {
        Ok(())
    } else {
        Err(ValidationError::new("password").with_message(Cow::Owned(strength.message)))
    }
}
