//! Building suites from annotated records and rule queries.
//!
//! Two entry points turn a serializable value into a ready-to-run
//! [`Suite`]:
//!
//! - [`Suite::for_record`] reads rule expressions from the type's own
//!   annotations (see [`Annotated`] and the [`annotations!`] macro).
//! - [`Suite::for_query`] reads rule expressions from an
//!   `application/x-www-form-urlencoded` query string, so the caller of
//!   an endpoint can decide which rules apply.
//!
//! Both never fail at construction time. Problems found while building
//! (a non-record source, a malformed query) become deferred entries
//! that surface as errors when the suite is evaluated.
//!
//! [`annotations!`]: crate::annotations

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::expr;
use crate::registry::{Registry, with_default_registry};
use crate::suite::{Binding, Suite};

// ============================================================================
// Annotated
// ============================================================================

/// A record type that carries per-field rule expressions.
///
/// Usually implemented with the [`annotations!`] macro rather than by
/// hand. The slice order fixes the order fields are validated in.
///
/// [`annotations!`]: crate::annotations
pub trait Annotated {
    /// `(field name, rule expression)` pairs, in validation order.
    fn annotations() -> &'static [(&'static str, &'static str)];
}

// ============================================================================
// Suite construction
// ============================================================================

impl Suite {
    /// Builds a suite for `record` from its own annotations, resolving
    /// rule tokens against the process-wide default registry.
    pub fn for_record<T>(record: &T) -> Suite
    where
        T: Serialize + Annotated,
    {
        with_default_registry(|registry| Suite::for_record_with(registry, record))
    }

    /// Builds a suite for `record` from its own annotations, resolving
    /// rule tokens against an explicit `registry`.
    pub fn for_record_with<T>(registry: &Registry, record: &T) -> Suite
    where
        T: Serialize + Annotated,
    {
        let fields = match record_fields(record) {
            Ok(fields) => fields,
            Err(error) => return Suite::new().add(error),
        };

        let mut suite = Suite::new();
        for (field, rule) in T::annotations() {
            let value = fields.get(*field).cloned().unwrap_or(Value::Null);
            bind_rule(&mut suite, registry, field, rule, &value);
        }
        suite
    }

    /// Builds a suite for `record` from a form-encoded rule query,
    /// resolving rule tokens against the process-wide default registry.
    ///
    /// The query maps field names to rule expressions, e.g.
    /// `Username=alphanum|minlen(5)&Age=gte(18)`. Fields of the record
    /// that the query does not mention are left unchecked; query keys
    /// that name no record field are ignored.
    pub fn for_query<T>(record: &T, query: &str) -> Suite
    where
        T: Serialize,
    {
        with_default_registry(|registry| Suite::for_query_with(registry, record, query))
    }

    /// Builds a suite for `record` from a form-encoded rule query,
    /// resolving rule tokens against an explicit `registry`.
    pub fn for_query_with<T>(registry: &Registry, record: &T, query: &str) -> Suite
    where
        T: Serialize,
    {
        let fields = match record_fields(record) {
            Ok(fields) => fields,
            Err(error) => return Suite::new().add(error),
        };

        let rules = match query_rules(query) {
            Ok(rules) => rules,
            Err(error) => return Suite::new().add(error),
        };

        let mut suite = Suite::new();
        for (field, value) in &fields {
            for (key, rule) in &rules {
                if key == field {
                    bind_rule(&mut suite, registry, field, rule, value);
                }
            }
        }
        suite
    }
}

/// Parses `rule` against `registry` and appends one binding per check.
fn bind_rule(suite: &mut Suite, registry: &Registry, field: &str, rule: &str, value: &Value) {
    for check in expr::parse(registry, rule) {
        suite.push(Binding::new(field, value.clone(), check));
    }
}

/// Serializes `record` and requires the result to be map-like.
fn record_fields<T: Serialize>(record: &T) -> Result<Map<String, Value>, ValidationError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(_) | Err(_) => Err(ValidationError::InvalidSource),
    }
}

/// Decodes a form-encoded query into `(key, rule)` pairs, keeping the
/// order pairs appear in. Repeated keys contribute one pair each.
fn query_rules(query: &str) -> Result<Vec<(String, String)>, ValidationError> {
    check_escapes(query)?;
    Ok(url::form_urlencoded::parse(query.as_bytes())
        .map(|(key, rule)| (key.into_owned(), rule.into_owned()))
        .collect())
}

/// Rejects `%` sequences that are not followed by two hex digits.
/// The lenient form decoder would pass them through silently, which
/// hides typos in hand-written rule queries.
fn check_escapes(query: &str) -> Result<(), ValidationError> {
    let bytes = query.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(ValidationError::malformed_rule_source(format!(
                    "invalid URL escape {:?}",
                    String::from_utf8_lossy(&bytes[i..end])
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotations;
    use crate::registry::Registry;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Account {
        username: String,
        age: u32,
    }

    annotations! {
        Account {
            username: "alphanum|minlen(5)",
            age: "gte(18)",
        }
    }

    fn registry() -> Registry {
        Registry::new()
    }

    #[test]
    fn annotated_record_passes() {
        let account = Account {
            username: "user123".into(),
            age: 30,
        };
        let suite = Suite::for_record_with(&registry(), &account);
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn annotated_record_reports_failing_field() {
        let account = Account {
            username: "user123".into(),
            age: 15,
        };
        let err = Suite::for_record_with(&registry(), &account)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::field_failed("age"));
    }

    #[test]
    fn annotation_order_decides_first_failure() {
        let account = Account {
            username: "ab".into(),
            age: 15,
        };
        let err = Suite::for_record_with(&registry(), &account)
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::field_failed("username"));
    }

    #[test]
    fn query_rules_apply_per_field() {
        let account = Account {
            username: "user123".into(),
            age: 15,
        };
        let suite = Suite::for_query_with(&registry(), &account, "age=gte(18)");
        assert_eq!(
            suite.validate().unwrap_err(),
            ValidationError::field_failed("age")
        );
    }

    #[test]
    fn query_keys_without_a_field_are_ignored() {
        let account = Account {
            username: "user123".into(),
            age: 15,
        };
        let suite = Suite::for_query_with(&registry(), &account, "nosuch=gte(18)");
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn empty_query_checks_nothing() {
        let account = Account {
            username: "".into(),
            age: 0,
        };
        let suite = Suite::for_query_with(&registry(), &account, "");
        assert!(suite.is_empty());
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn repeated_query_keys_all_apply() {
        let account = Account {
            username: "user123".into(),
            age: 40,
        };
        let suite = Suite::for_query_with(&registry(), &account, "age=gte(18)&age=lt(35)");
        assert_eq!(
            suite.validate().unwrap_err(),
            ValidationError::field_failed("age")
        );
    }

    #[test]
    fn percent_escapes_decode_in_rules() {
        let account = Account {
            username: "user123".into(),
            age: 30,
        };
        // "gte%2818%29" decodes to "gte(18)".
        let suite = Suite::for_query_with(&registry(), &account, "age=gte%2818%29");
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn malformed_escape_defers_an_error() {
        let account = Account {
            username: "user123".into(),
            age: 30,
        };
        let err = Suite::for_query_with(&registry(), &account, "age=gte(18)&bad=%zz")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::MalformedRuleSource { .. }));
    }

    #[test]
    fn non_record_source_defers_invalid_source() {
        let err = Suite::for_query_with(&registry(), &json!([1, 2, 3]), "a=nonzero")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::InvalidSource);
    }

    #[test]
    fn record_without_annotations_passes_vacuously() {
        #[derive(Serialize)]
        struct Bare {
            anything: String,
        }

        annotations! { Bare {} }

        let suite = Suite::for_record_with(&registry(), &Bare { anything: "".into() });
        assert!(suite.is_empty());
        assert!(suite.validate().is_ok());
    }

    #[test]
    fn missing_annotated_field_validates_as_null() {
        #[derive(Serialize)]
        struct Sparse {
            present: u32,
        }

        annotations! {
            Sparse {
                present: "nonzero",
                absent: "nonzero",
            }
        }

        let err = Suite::for_record_with(&registry(), &Sparse { present: 1 })
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::field_failed("absent"));
    }
}
