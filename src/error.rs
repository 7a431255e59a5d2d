//! Error types for validation failures.
//!
//! Every failure in this crate surfaces through a single
//! [`ValidationError`] returned by [`Suite::validate`](crate::suite::Suite::validate).
//! Construction of suites and checks never fails: malformed inputs are
//! captured eagerly as values and only reported at evaluation time.

/// The outcome of a failed validation.
///
/// Field-level failures carry only the field name.  Parse failures on
/// registry arguments additionally carry the parse error text, since
/// those indicate a broken rule string rather than a bad value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A check's pass condition was false for the named field.
    #[error("{field} did not pass validation")]
    FieldFailed {
        /// Name of the failing field.
        field: String,
    },

    /// A registry constructor received an argument it could not parse,
    /// e.g. non-numeric text where a number is required.
    #[error("rule for {field} received parsing error - {detail}")]
    MalformedArgument {
        /// Name of the field the malformed rule was bound to.
        field: String,
        /// Text of the underlying parse error.
        detail: String,
    },

    /// The value submitted for record-driven validation does not
    /// serialize to a map-like record.
    #[error("source must serialize to a map-like record")]
    InvalidSource,

    /// The encoded key-value rule string could not be decoded.
    #[error("could not decode rule query - {detail}")]
    MalformedRuleSource {
        /// What was wrong with the encoding.
        detail: String,
    },
}

impl ValidationError {
    /// Creates the generic per-field failure.
    pub fn field_failed(field: impl Into<String>) -> Self {
        Self::FieldFailed {
            field: field.into(),
        }
    }

    /// Creates a deferred constructor-argument parse failure.
    pub fn malformed_argument(field: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedArgument {
            field: field.into(),
            detail: detail.into(),
        }
    }

    /// Creates a deferred rule-source decoding failure.
    pub fn malformed_rule_source(detail: impl Into<String>) -> Self {
        Self::MalformedRuleSource {
            detail: detail.into(),
        }
    }

    /// Returns the field name this error is attached to, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::FieldFailed { field } | Self::MalformedArgument { field, .. } => Some(field),
            Self::InvalidSource | Self::MalformedRuleSource { .. } => None,
        }
    }
}
