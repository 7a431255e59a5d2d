//! Equality and membership checks.
//!
//! Two comparison modes exist:
//!
//! - **Typed** ([`Eq`], [`OneOf`]): strict deep equality with numeric
//!   normalization (`1` equals `1.0`, but `"1"` never equals `1`).
//!   Used for programmatic rule assembly.
//! - **Raw-text** ([`TextEq`], [`TextOneOf`]): the comparand is the raw
//!   argument substring from a rule string.  The value matches when the
//!   text parses as JSON and deep-equals it, or when the value is a
//!   string equal to the text.  This lets `eq(1)` accept both the
//!   number `1` and the string `"1"`, which is what rule authors write.

use serde_json::Value;

use crate::check::Check;
use crate::error::ValidationError;
use crate::value::values_equal;

/// Raw-text comparison rule shared by [`TextEq`] and [`TextOneOf`].
fn raw_matches(value: &Value, raw: &str) -> bool {
    if let Ok(parsed) = serde_json::from_str::<Value>(raw) {
        if values_equal(value, &parsed) {
            return true;
        }
    }
    matches!(value, Value::String(s) if s == raw)
}

// ============================================================================
// TYPED EQUALITY
// ============================================================================

crate::check! {
    /// Passes when the value deep-equals the expected value.
    ///
    /// Numbers compare numerically; every other kind requires an exact
    /// type match, so `eq(json!("1"))` does not pass against `1`.
    pub Eq { expected: Value };
    rule(self, value) { values_equal(value, &self.expected) }
    new(expected: impl Into<Value>) { Self { expected: expected.into() } }
    fn eq(expected: impl Into<Value>);
}

/// Passes when the value deep-equals at least one allowed value
/// ([`one_of`]), or none of them ([`none_of`]).
#[derive(Debug, Clone)]
pub struct OneOf {
    /// The comparison set.
    pub allowed: Vec<Value>,
    negate: bool,
}

impl Check for OneOf {
    fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        let hit = self.allowed.iter().any(|e| values_equal(value, e));
        if hit != self.negate {
            Ok(())
        } else {
            Err(ValidationError::field_failed(field))
        }
    }

    fn name(&self) -> &'static str {
        if self.negate { "notin" } else { "in" }
    }
}

/// Creates a membership check over typed values.
#[must_use]
pub fn one_of(allowed: Vec<Value>) -> OneOf {
    OneOf {
        allowed,
        negate: false,
    }
}

/// Creates an exclusion check over typed values.
#[must_use]
pub fn none_of(disallowed: Vec<Value>) -> OneOf {
    OneOf {
        allowed: disallowed,
        negate: true,
    }
}

// ============================================================================
// RAW-TEXT EQUALITY
// ============================================================================

crate::check! {
    /// Passes when the value matches the raw argument text.
    ///
    /// This is the registry form of `eq`: `eq(1)` accepts both the
    /// number `1` and the string `"1"`.
    pub TextEq { raw: String };
    rule(self, value) { raw_matches(value, &self.raw) }
    new(raw: impl Into<String>) { Self { raw: raw.into() } }
    fn text_eq(raw: impl Into<String>);
}

/// Membership over a comma-separated raw list, with the same per-element
/// matching rule as [`TextEq`].
///
/// List elements are not trimmed: `in(a, b)` contains the element
/// `" b"`.
#[derive(Debug, Clone)]
pub struct TextOneOf {
    /// The raw list elements.
    pub items: Vec<String>,
    negate: bool,
}

impl TextOneOf {
    fn split(raw: &str) -> Vec<String> {
        raw.split(',').map(str::to_owned).collect()
    }
}

impl Check for TextOneOf {
    fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        let hit = self.items.iter().any(|item| raw_matches(value, item));
        if hit != self.negate {
            Ok(())
        } else {
            Err(ValidationError::field_failed(field))
        }
    }

    fn name(&self) -> &'static str {
        if self.negate { "notin" } else { "in" }
    }
}

/// Creates the registry form of `in(list)`.
#[must_use]
pub fn text_one_of(raw: &str) -> TextOneOf {
    TextOneOf {
        items: TextOneOf::split(raw),
        negate: false,
    }
}

/// Creates the registry form of `notin(list)`.
#[must_use]
pub fn text_none_of(raw: &str) -> TextOneOf {
    TextOneOf {
        items: TextOneOf::split(raw),
        negate: true,
    }
}
