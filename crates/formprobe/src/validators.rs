//! Input validators mirroring what the sample forms check on blur.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use url::Url;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"));

/// Outcome of validating one input value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status", content = "message")]
pub enum Validation {
    /// Nothing entered; no message is shown
    Empty,
    /// Value accepted
    Valid(String),
    /// Value rejected
    Invalid(String),
}

impl Validation {
    /// Whether the value was accepted
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Message to show next to the field, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Valid(m) | Self::Invalid(m) => Some(m.as_str()),
        }
    }
}

fn judge(value: &str, ok: impl FnOnce(&str) -> bool, valid: &str, invalid: &str) -> Validation {
    let value = value.trim();
    if value.is_empty() {
        Validation::Empty
    } else if ok(value) {
        Validation::Valid(valid.to_string())
    } else {
        Validation::Invalid(invalid.to_string())
    }
}

/// Validate an email address
#[must_use]
pub fn validate_email(value: &str) -> Validation {
    judge(
        value,
        |v| EMAIL.is_match(v),
        "Valid email format",
        "Please enter a valid email address",
    )
}

/// Validate a phone number; spaces, dashes and parentheses are ignored
#[must_use]
pub fn validate_phone(value: &str) -> Validation {
    judge(
        value,
        |v| {
            let digits: String = v
                .chars()
                .filter(|&c| !(c.is_whitespace() || matches!(c, '-' | '(' | ')')))
                .collect();
            PHONE.is_match(&digits)
        },
        "Valid phone format",
        "Please enter a valid phone number",
    )
}

/// Validate an absolute URL
#[must_use]
pub fn validate_url(value: &str) -> Validation {
    judge(
        value,
        |v| Url::parse(v).is_ok(),
        "Valid URL format",
        "Please enter a valid URL",
    )
}

/// Password strength score, 0..=100.
///
/// Length is counted in UTF-16 code units, the way browsers measure an
/// input's value.
#[must_use]
pub fn password_strength(password: &str) -> f64 {
    let length = password.encode_utf16().count();
    let checks = [
        (length >= 8, 25.0),
        (length >= 12, 25.0),
        (password.chars().any(|c| c.is_ascii_lowercase()), 12.5),
        (password.chars().any(|c| c.is_ascii_uppercase()), 12.5),
        (password.chars().any(|c| c.is_ascii_digit()), 12.5),
        (password.chars().any(|c| !c.is_ascii_alphanumeric()), 12.5),
    ];
    let score: f64 = checks
        .into_iter()
        .filter(|&(passed, _)| passed)
        .map(|(_, points)| points)
        .sum();
    score.min(100.0)
}

/// Qualitative password strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    /// Below 30
    Weak,
    /// 30 up to 60
    Fair,
    /// 60 up to 80
    Good,
    /// 80 and above
    Strong,
}

impl PasswordStrength {
    /// Band a strength score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::Weak
        } else if score < 60.0 {
            Self::Fair
        } else if score < 80.0 {
            Self::Good
        } else {
            Self::Strong
        }
    }

    /// Band a password directly
    #[must_use]
    pub fn of(password: &str) -> Self {
        Self::from_score(password_strength(password))
    }

    /// Message shown under the password field
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Weak => "Weak password",
            Self::Fair => "Fair password",
            Self::Good => "Good password",
            Self::Strong => "Strong password",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
