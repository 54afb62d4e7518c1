//! Field validators
//!
//! Each field is trimmed and checked against its rules in precedence order;
//! the first failing rule is reported. Lengths count UTF-16 code units, the
//! unit browser `maxLength` limits use.

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;
use url::Url;

use crate::field::Field;

pub const NAME_MAX: usize = 50;
pub const EMAIL_MAX: usize = 50;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 500;
pub const REPO_URL_MAX: usize = 200;

/// A failed field rule. `Display` yields the message shown under the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{} is required", .0.subject())]
    Required(Field),

    #[error("{} must be at least {min} characters", .field.subject())]
    TooShort { field: Field, min: usize },

    #[error("{} must be at most {max} characters", .field.subject())]
    TooLong { field: Field, max: usize },

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid URL")]
    InvalidUrl,
}

/// Strip surrounding whitespace, including the byte order mark.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Length of an already trimmed value in UTF-16 code units.
pub fn input_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Validate a raw input value for `field`.
pub fn validate(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = trim_input(raw);
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }

    let len = input_len(value);
    match field {
        Field::Name => check_max(field, len, NAME_MAX),
        Field::Email => {
            if !is_email(value) {
                return Err(ValidationError::InvalidEmail);
            }
            check_max(field, len, EMAIL_MAX)
        }
        Field::Description => {
            if len < DESCRIPTION_MIN {
                return Err(ValidationError::TooShort {
                    field,
                    min: DESCRIPTION_MIN,
                });
            }
            check_max(field, len, DESCRIPTION_MAX)
        }
        Field::RepoUrl => {
            if !is_absolute_url(value) {
                return Err(ValidationError::InvalidUrl);
            }
            check_max(field, len, REPO_URL_MAX)
        }
        Field::Level => Ok(()),
    }
}

/// Message for the first failing rule, if any.
pub fn message(field: Field, raw: &str) -> Option<String> {
    validate(field, raw).err().map(|e| e.to_string())
}

fn check_max(field: Field, len: usize, max: usize) -> Result<(), ValidationError> {
    if len > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"(?i-u)^[A-Za-z0-9_+-]+(?:\.[A-Za-z0-9_+-]+)*@[0-9a-z]+(?:[.-][0-9a-z]+)*\.[a-z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_match(value)
}

pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}
