//! Per-element combinator.

use serde_json::Value;

use crate::check::{BoxedCheck, Check};
use crate::error::ValidationError;

/// Applies a set of checks to every element of a sequence.
///
/// The value must be an array; anything else fails outright.  Elements
/// are visited in order and every check runs against each element under
/// the parent field's name, stopping at the first failure.
///
/// The registry form `each(subexpr)` re-invokes the full rule-expression
/// parser on its argument, so nested expressions like
/// `each(gt(0) | lt(10))` compose recursively.
#[derive(Debug)]
pub struct Each {
    checks: Vec<BoxedCheck>,
}

impl Each {
    /// Creates a per-element combinator from already-built checks.
    #[must_use]
    pub fn new(checks: Vec<BoxedCheck>) -> Self {
        Self { checks }
    }

    /// The inner checks, in application order.
    #[must_use]
    pub fn checks(&self) -> &[BoxedCheck] {
        &self.checks
    }
}

impl Check for Each {
    fn check(&self, field: &str, value: &Value) -> Result<(), ValidationError> {
        let Value::Array(elements) = value else {
            return Err(ValidationError::field_failed(field));
        };
        for element in elements {
            for check in &self.checks {
                check.check(field, element)?;
            }
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "each"
    }
}

/// Creates a per-element combinator.
#[must_use]
pub fn each(checks: Vec<BoxedCheck>) -> Each {
    Each::new(checks)
}
