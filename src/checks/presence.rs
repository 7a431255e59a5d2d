//! Presence check.

use crate::value::is_zero;

crate::check! {
    /// Passes when the value is not the zero/empty value for its kind.
    ///
    /// Null, `false`, `0`, `""`, `[]` and `{}` all count as zero.
    pub Nonzero;
    rule(value) { !is_zero(value) }
    fn nonzero();
}
