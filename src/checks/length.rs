//! Length checks.
//!
//! Length is defined for strings (Unicode scalar values), arrays, and
//! objects; values without a defined length fail every length check.
//! Limits are signed so that a nonsense registry argument like
//! `maxlen(-1)` stays expressible and simply never passes.

use crate::value::length_of;

crate::check! {
    /// Passes when the value's length equals the limit.
    pub Len { limit: i64 };
    rule(self, value) { matches!(length_of(value), Some(l) if l as i64 == self.limit) }
    fn len(limit: i64);
}

crate::check! {
    /// Passes when the value's length is at least the limit.
    pub MinLen { limit: i64 };
    rule(self, value) { matches!(length_of(value), Some(l) if l as i64 >= self.limit) }
    fn min_len(limit: i64);
}

crate::check! {
    /// Passes when the value's length is at most the limit.
    pub MaxLen { limit: i64 };
    rule(self, value) { matches!(length_of(value), Some(l) if l as i64 <= self.limit) }
    fn max_len(limit: i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use serde_json::json;

    #[test]
    fn len_exact() {
        assert!(len(6).check("f", &json!("123456")).is_ok());
        assert!(len(6).check("f", &json!("12345")).is_err());
        assert!(len(3).check("f", &json!([1, 2, 3])).is_ok());
        assert!(len(2).check("f", &json!([1, 2, 3])).is_err());
    }

    #[test]
    fn min_len_boundaries() {
        assert!(min_len(5).check("f", &json!("123456")).is_ok());
        assert!(min_len(6).check("f", &json!("123456")).is_ok());
        assert!(min_len(7).check("f", &json!("123456")).is_err());
        assert!(min_len(3).check("f", &json!([1, 2, 3])).is_ok());
        assert!(min_len(4).check("f", &json!([1, 2, 3])).is_err());
    }

    #[test]
    fn max_len_boundaries() {
        assert!(max_len(7).check("f", &json!("123456")).is_ok());
        assert!(max_len(6).check("f", &json!("123456")).is_ok());
        assert!(max_len(5).check("f", &json!("123456")).is_err());
        assert!(max_len(3).check("f", &json!([1, 2, 3])).is_ok());
    }

    #[test]
    fn negative_max_len_never_passes() {
        assert!(max_len(-1).check("f", &json!([])).is_err());
        assert!(max_len(-1).check("f", &json!("")).is_err());
    }

    #[test]
    fn values_without_length_always_fail() {
        let checks: Vec<crate::check::BoxedCheck> =
            vec![Box::new(len(0)), Box::new(min_len(0)), Box::new(max_len(100))];
        for check in &checks {
            assert!(check.check("f", &json!(42)).is_err());
            assert!(check.check("f", &json!(true)).is_err());
            assert!(check.check("f", &json!(null)).is_err());
        }
    }

    #[test]
    fn string_length_counts_chars_not_bytes() {
        assert!(len(5).check("f", &json!("h\u{e9}llo")).is_ok());
    }
}
