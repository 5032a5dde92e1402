//! Field rules for the signup form
//!
//! Each predicate takes the raw field value exactly as typed: no trimming,
//! no case folding. Lengths are counted in UTF-16 code units, the way a
//! browser reports `input.value.length`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_ROOT_DOMAIN_LEN: usize = 2;
pub const MIN_AGE: f64 = 10.0;
pub const MAX_AGE: f64 = 120.0;

/// Symbols that satisfy the password's symbol requirement
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*-_()";

fn get_username_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9-]+$").expect("username pattern is a valid literal")
    })
}

fn field_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Characters that end a line for the purpose of `.` in a browser regex
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// At least 4 characters, all ASCII letters, digits or hyphens
pub fn validate_username(username: &str) -> bool {
    if field_len(username) < MIN_USERNAME_LEN {
        return false;
    }
    get_username_regex().is_match(username)
}

/// At least 8 characters with a letter, a digit and a symbol from `PASSWORD_SYMBOLS`
///
/// Any other characters are allowed, except line breaks.
pub fn validate_password(password: &str) -> bool {
    if field_len(password) < MIN_PASSWORD_LEN {
        return false;
    }
    if password.chars().any(is_line_terminator) {
        return false;
    }

    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
    has_letter && has_digit && has_symbol
}

/// Permissive email check
///
/// Rejects `#`, `..`, anything other than exactly one `@`, an empty local
/// part, a local part starting or ending with `.` or `-`, a domain without
/// a dot, and a last domain label shorter than two characters. Nothing else
/// is checked.
pub fn validate_email(email: &str) -> bool {
    if email.contains('#') || email.contains("..") {
        return false;
    }

    let (user_part, domain_part) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if domain_part.contains('@') {
        return false;
    }

    if user_part.is_empty() {
        return false;
    }
    if user_part.starts_with(['.', '-']) || user_part.ends_with(['.', '-']) {
        return false;
    }

    let mut segments = domain_part.rsplit('.');
    let root_domain = segments.next().unwrap_or_default();
    if segments.next().is_none() {
        return false;
    }
    field_len(root_domain) >= MIN_ROOT_DOMAIN_LEN
}

/// Raw age field: the text typed into the form, or an already-parsed number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgeInput<'a> {
    Text(&'a str),
    Number(f64),
}

impl AgeInput<'_> {
    /// Numeric value of the field, if it has one
    ///
    /// Text is trimmed. Empty, unparseable and non-finite input has no value.
    pub fn to_number(&self) -> Option<f64> {
        let n = match self {
            AgeInput::Number(n) => *n,
            AgeInput::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
        };
        n.is_finite().then_some(n)
    }
}

impl<'a> From<&'a str> for AgeInput<'a> {
    fn from(s: &'a str) -> Self {
        AgeInput::Text(s)
    }
}

impl<'a> From<&'a String> for AgeInput<'a> {
    fn from(s: &'a String) -> Self {
        AgeInput::Text(s.as_str())
    }
}

impl From<f64> for AgeInput<'_> {
    fn from(n: f64) -> Self {
        AgeInput::Number(n)
    }
}

impl From<i32> for AgeInput<'_> {
    fn from(n: i32) -> Self {
        AgeInput::Number(f64::from(n))
    }
}

impl From<u32> for AgeInput<'_> {
    fn from(n: u32) -> Self {
        AgeInput::Number(f64::from(n))
    }
}

/// Age between 10 and 120 inclusive; input without a numeric value fails
pub fn validate_age<'a>(age: impl Into<AgeInput<'a>>) -> bool {
    match age.into().to_number() {
        Some(n) => (MIN_AGE..=MAX_AGE).contains(&n),
        None => false,
    }
}

/// Per-field outcome of validating the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormVerdict {
    pub username: bool,
    pub password: bool,
    pub email: bool,
    pub age: bool,
}

impl FormVerdict {
    /// True when every field passed
    pub fn is_valid(&self) -> bool {
        self.username && self.password && self.email && self.age
    }

    /// Names of the fields that failed, in form order
    pub fn failed_fields(&self) -> Vec<&'static str> {
        [
            ("username", self.username),
            ("password", self.password),
            ("email", self.email),
            ("age", self.age),
        ]
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(name, _)| name)
        .collect()
    }
}

/// Run every field rule and report each verdict
pub fn check_form<'a>(
    username: &str,
    password: &str,
    email: &str,
    age: impl Into<AgeInput<'a>>,
) -> FormVerdict {
    FormVerdict {
        username: validate_username(username),
        password: validate_password(password),
        email: validate_email(email),
        age: validate_age(age),
    }
}

/// True iff all four fields pass
pub fn validate_form<'a>(
    username: &str,
    password: &str,
    email: &str,
    age: impl Into<AgeInput<'a>>,
) -> bool {
    check_form(username, password, email, age).is_valid()
}
