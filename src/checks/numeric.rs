//! Numeric comparison checks.
//!
//! These apply to the value's numeric form: any non-number value fails
//! them, including numeric-looking strings.

use crate::value::numeric_form;

crate::check! {
    /// Passes when the value compares strictly greater than the threshold.
    pub Gt { threshold: f64 };
    rule(self, value) { matches!(numeric_form(value), Some(n) if n > self.threshold) }
    fn gt(threshold: f64);
}

crate::check! {
    /// Passes when the value compares greater than or equal to the threshold.
    pub Gte { threshold: f64 };
    rule(self, value) { matches!(numeric_form(value), Some(n) if n >= self.threshold) }
    fn gte(threshold: f64);
}

crate::check! {
    /// Passes when the value compares strictly less than the threshold.
    pub Lt { threshold: f64 };
    rule(self, value) { matches!(numeric_form(value), Some(n) if n < self.threshold) }
    fn lt(threshold: f64);
}

crate::check! {
    /// Passes when the value compares less than or equal to the threshold.
    pub Lte { threshold: f64 };
    rule(self, value) { matches!(numeric_form(value), Some(n) if n <= self.threshold) }
    fn lte(threshold: f64);
}

crate::check! {
    /// Passes for numeric values in `[-90, 90]` inclusive.
    pub Lat;
    rule(value) { matches!(numeric_form(value), Some(n) if (-90.0..=90.0).contains(&n)) }
    fn lat();
}

crate::check! {
    /// Passes for numeric values in `[-180, 180]` inclusive.
    pub Lon;
    rule(value) { matches!(numeric_form(value), Some(n) if (-180.0..=180.0).contains(&n)) }
    fn lon();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use serde_json::json;

    #[test]
    fn gt_boundaries() {
        let check = gt(18.0);
        assert!(check.check("f", &json!(19)).is_ok());
        assert!(check.check("f", &json!(18)).is_err());
        assert!(check.check("f", &json!(18.0001)).is_ok());
        assert!(check.check("f", &json!(14)).is_err());
    }

    #[test]
    fn gte_boundary_is_inclusive() {
        let check = gte(100.0);
        assert!(check.check("f", &json!(100)).is_ok());
        assert!(check.check("f", &json!(100.0)).is_ok());
        assert!(check.check("f", &json!(99.999)).is_err());
    }

    #[test]
    fn lt_and_lte() {
        assert!(lt(19.9).check("f", &json!(-10.0)).is_ok());
        assert!(lt(19.9).check("f", &json!(19.90000001)).is_err());
        assert!(lte(18.0).check("f", &json!(18)).is_ok());
        assert!(lte(18.0).check("f", &json!(19)).is_err());
    }

    #[test]
    fn comparisons_reject_non_numbers() {
        assert!(gt(0.0).check("f", &json!("5")).is_err());
        assert!(lte(10.0).check("f", &json!(null)).is_err());
        assert!(gte(0.0).check("f", &json!([1])).is_err());
    }

    #[test]
    fn lat_inclusive_bounds() {
        let check = lat();
        assert!(check.check("f", &json!(0.0)).is_ok());
        assert!(check.check("f", &json!(90.0)).is_ok());
        assert!(check.check("f", &json!(-90.0)).is_ok());
        assert!(check.check("f", &json!(90.0000001)).is_err());
        assert!(check.check("f", &json!(-90.0000001)).is_err());
    }

    #[test]
    fn lon_inclusive_bounds() {
        let check = lon();
        assert!(check.check("f", &json!(180.0)).is_ok());
        assert!(check.check("f", &json!(-180.0)).is_ok());
        assert!(check.check("f", &json!(180.1)).is_err());
        assert!(check.check("f", &json!(-180.1)).is_err());
    }
}
