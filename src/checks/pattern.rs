//! Pattern checks.
//!
//! Pattern checks apply to the value's string form only: any non-string
//! value fails them.  The built-in category patterns (`email`, `url`,
//! `ip`, `hexcolor`, `alpha`, `num`) are fixed and compiled once.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::check::Check;
use crate::error::ValidationError;
use crate::value::string_form;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z0-9_\.-]+)@([\da-z\.-]+)\.([a-z\.]{2,6})$").unwrap()
});

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").unwrap());

static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([\da-z\.-]+)\.([a-z\.]{2,6})([/\w \.-]*)*/?$").unwrap()
});

static IP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
    )
    .unwrap()
});

static NUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\d*(\.\d+)?$").unwrap());

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]*$").unwrap());

// ============================================================================
// MATCHES
// ============================================================================

/// Passes when the value's string form matches a regular expression.
///
/// Non-string values always fail.
#[derive(Debug, Clone)]
pub struct Matches {
    /// The compiled pattern.
    pub pattern: Regex,
    name: &'static str,
}

impl Matches {
    /// Compiles a caller-supplied pattern.
    ///
    /// Returns the regex error for invalid patterns; the registry
    /// constructor maps that into a deferred [`Fail`](super::Fail)
    /// check instead.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            name: "matches",
        })
    }

    fn builtin(name: &'static str, pattern: &Regex) -> Self {
        Self {
            pattern: pattern.clone(),
            name,
        }
    }
}

impl Check for Matches {
    fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        match string_form(value) {
            Some(s) if self.pattern.is_match(s) => Ok(()),
            _ => Err(ValidationError::field_failed(field)),
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Creates a check matching the value's string form against `pattern`.
pub fn matches(pattern: &str) -> Result<Matches, regex::Error> {
    Matches::new(pattern)
}

/// Passes for strings in email address form.
#[must_use]
pub fn email() -> Matches {
    Matches::builtin("email", &EMAIL)
}

/// Passes for strings in URL form (scheme optional).
#[must_use]
pub fn url() -> Matches {
    Matches::builtin("url", &URL)
}

/// Passes for strings in dotted-quad IPv4 form.
#[must_use]
pub fn ip() -> Matches {
    Matches::builtin("ip", &IP)
}

/// Passes for strings in `#rgb` or `#rrggbb` hex color form.
#[must_use]
pub fn hex_color() -> Matches {
    Matches::builtin("hexcolor", &HEX_COLOR)
}

/// Passes for strings containing only ASCII letters (including `""`).
#[must_use]
pub fn alpha() -> Matches {
    Matches::builtin("alpha", &ALPHA)
}

/// Passes for strings in positive decimal number form.
#[must_use]
pub fn num() -> Matches {
    Matches::builtin("num", &NUM)
}

// ============================================================================
// ALPHANUM
// ============================================================================

crate::check! {
    /// Passes when the value's string form contains at least one ASCII
    /// letter and at least one ASCII digit.
    pub AlphaNum;
    rule(value) {
        string_form(value).is_some_and(|s| {
            s.chars().any(|c| c.is_ascii_alphabetic())
                && s.chars().any(|c| c.is_ascii_digit())
        })
    }
    fn alpha_num();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn matches_custom_pattern() {
        let check = matches("^[a-z0-9_-]{3,16}$").unwrap();
        assert!(check.check("f", &json!("my-us3r_n4m3")).is_ok());
        assert!(check.check("f", &json!("th1s1s-wayt00_l0ngt0beausername")).is_err());
    }

    #[test]
    fn matches_rejects_non_strings() {
        let check = matches("^[0-9]+$").unwrap();
        assert!(check.check("f", &json!(123)).is_err());
    }

    #[test]
    fn matches_invalid_pattern_is_an_error() {
        assert!(matches("(unclosed").is_err());
    }

    #[test]
    fn email_forms() {
        let check = email();
        assert!(check.check("f", &json!("test@example.com")).is_ok());
        assert!(
            check
                .check("f", &json!("test+extension@reallyreallylongdomain.org"))
                .is_err(),
            "plus addressing is outside the built-in pattern"
        );
        assert!(check.check("f", &json!("test#example.com")).is_err());
        assert!(check.check("f", &json!("@example.org")).is_err());
        assert!(check.check("f", &json!("user@example")).is_err());
    }

    #[test]
    fn url_forms() {
        let check = url();
        assert!(check.check("f", &json!("http://www.google.com")).is_ok());
        assert!(check.check("f", &json!("www.google.com")).is_ok());
        assert!(check.check("f", &json!("http://google")).is_err());
        assert!(check.check("f", &json!("https//news.ycombinator.com")).is_err());
    }

    #[test]
    fn ip_forms() {
        let check = ip();
        assert!(check.check("f", &json!("192.168.0.1")).is_ok());
        assert!(check.check("f", &json!("255.255.255.255")).is_ok());
        assert!(check.check("f", &json!("256.1.1.1")).is_err());
        assert!(check.check("f", &json!("1.2.3")).is_err());
    }

    #[test]
    fn hex_color_forms() {
        let check = hex_color();
        assert!(check.check("f", &json!("#ffffff")).is_ok());
        assert!(check.check("f", &json!("#FFF")).is_ok());
        assert!(check.check("f", &json!("#fhffff")).is_err());
        assert!(check.check("f", &json!("ffffff")).is_err());
    }

    #[test]
    fn alpha_forms() {
        let check = alpha();
        assert!(check.check("f", &json!("Rex")).is_ok());
        assert!(check.check("f", &json!("")).is_ok());
        assert!(check.check("f", &json!("Rex1")).is_err());
    }

    #[test]
    fn num_forms() {
        let check = num();
        assert!(check.check("f", &json!("5551234567")).is_ok());
        assert!(check.check("f", &json!("1.25")).is_ok());
        assert!(check.check("f", &json!("0123")).is_err());
        assert!(check.check("f", &json!("-1")).is_err());
    }

    #[test]
    fn alpha_num_requires_both() {
        let check = alpha_num();
        assert!(check.check("f", &json!("hello1")).is_ok());
        assert!(check.check("f", &json!("hello")).is_err());
        assert!(check.check("f", &json!("12345")).is_err());
        assert!(check.check("f", &json!(12345)).is_err());
    }

    #[test]
    fn builtin_names() {
        assert_eq!(email().name(), "email");
        assert_eq!(alpha_num().name(), "alpha_num");
        assert_eq!(matches(".*").unwrap().name(), "matches");
    }
}
