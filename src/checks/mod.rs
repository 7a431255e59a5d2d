//! Built-in primitive checks.
//!
//! Every check here has a typed factory function for programmatic rule
//! assembly and a raw-string registry constructor installed by
//! [`Registry::new`](crate::registry::Registry::new).  Checks whose
//! registry argument fails to parse are replaced by [`Fail`], which
//! defers the parse error to evaluation time so construction never
//! fails.

pub mod each;
pub mod equality;
pub mod length;
pub mod numeric;
pub mod pattern;
pub mod presence;

pub use each::{Each, each};
pub use equality::{
    Eq, OneOf, TextEq, TextOneOf, eq, none_of, one_of, text_eq, text_none_of, text_one_of,
};
pub use length::{Len, MaxLen, MinLen, len, max_len, min_len};
pub use numeric::{Gt, Gte, Lat, Lon, Lt, Lte, gt, gte, lat, lon, lt, lte};
pub use pattern::{
    AlphaNum, Matches, alpha, alpha_num, email, hex_color, ip, matches, num, url,
};
pub use presence::{Nonzero, nonzero};

use serde_json::Value;

use crate::check::Check;
use crate::error::ValidationError;

// ============================================================================
// DEFERRED CONSTRUCTION FAILURE
// ============================================================================

/// A check that always fails with a constructor parse error.
///
/// Registry constructors return this when their raw argument cannot be
/// parsed, so a broken rule string still yields a definite outcome at
/// evaluation time instead of a panic at construction time.
#[derive(Debug, Clone)]
pub struct Fail {
    /// Text of the parse error being deferred.
    pub detail: String,
}

impl Fail {
    /// Creates a deferred failure carrying the parse error text.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl Check for Fail {
    fn check(&self, field: &str, _value: &Value) -> Result<(), ValidationError> {
        Err(ValidationError::malformed_argument(field, &self.detail))
    }

    fn name(&self) -> &'static str {
        "fail"
    }
}

/// Creates a check that always fails with the given parse error text.
#[must_use]
pub fn fail_with(detail: impl Into<String>) -> Fail {
    Fail::new(detail)
}
