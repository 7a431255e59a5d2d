//! The core check contract.
//!
//! A [`Check`] is a named pass/fail predicate over a field's name and
//! value.  Checks are stateless once constructed; configuration such as
//! a comparison threshold or a compiled pattern is captured at
//! construction time.  Primitive checks live in [`crate::checks`]; the
//! rule-expression parser in [`crate::expr`] builds them through the
//! [`Registry`](crate::registry::Registry).

use serde_json::Value;

use crate::error::ValidationError;

/// A single named pass/fail predicate over a field's value.
///
/// # Examples
///
/// ```
/// use rulegate::check::Check;
/// use rulegate::error::ValidationError;
/// use serde_json::{Value, json};
///
/// struct Positive;
///
/// impl Check for Positive {
///     fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
///         match value.as_f64() {
///             Some(n) if n > 0.0 => Ok(()),
///             _ => Err(ValidationError::field_failed(field)),
///         }
///     }
///
///     fn name(&self) -> &'static str {
///         "positive"
///     }
/// }
///
/// assert!(Positive.check("count", &json!(3)).is_ok());
/// assert!(Positive.check("count", &json!(-3)).is_err());
/// ```
pub trait Check {
    /// Evaluates the check against a field's value.
    ///
    /// Returns `Ok(())` on pass, or a [`ValidationError`] naming the
    /// field on failure.
    fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError>;

    /// The token name of this check, used for logging and debugging.
    fn name(&self) -> &'static str;
}

/// A check behind a uniform boxed interface.
///
/// Registry constructors and the expression parser deal in boxed checks,
/// since the concrete check type is only known from the rule text.
pub type BoxedCheck = Box<dyn Check + Send + Sync>;

impl std::fmt::Debug for dyn Check + Send + Sync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Check").field(&self.name()).finish()
    }
}
