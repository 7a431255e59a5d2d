//! Token registry: the mapping from rule tokens to check constructors.
//!
//! A [`Registry`] is an explicit value, not a hidden singleton: the
//! parser and every entry point take one by reference, so tests can use
//! isolated instances.  A process-wide default registry exists for
//! convenience ([`register_token`], [`with_default_registry`]) and is
//! guarded by a read-write lock so registration at program start is safe
//! alongside later concurrent validation.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::check::BoxedCheck;
use crate::checks;
use crate::expr;

/// A check constructor: builds a check from the raw argument substring
/// of a rule clause.
///
/// Constructors receive the registry itself so combinators like `each`
/// can re-invoke the parser on their argument.
pub type Constructor = Arc<dyn Fn(&Registry, &str) -> BoxedCheck + Send + Sync>;

/// Mutable mapping from token name to check constructor.
///
/// Tokens are unique; registering a token that already exists overwrites
/// the prior entry (last registration wins).  Checks already built from
/// the old constructor are unaffected.
#[derive(Clone)]
pub struct Registry {
    entries: HashMap<String, Constructor>,
}

impl Registry {
    /// Creates a registry pre-populated with every built-in token.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        install_builtins(&mut registry);
        registry
    }

    /// Creates a registry with no tokens at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Stores or overwrites the constructor for `token`.
    pub fn register<F>(&mut self, token: impl Into<String>, constructor: F)
    where
        F: Fn(&Registry, &str) -> BoxedCheck + Send + Sync + 'static,
    {
        self.entries.insert(token.into(), Arc::new(constructor));
    }

    /// Looks up `token` and invokes its constructor with the raw
    /// argument substring.
    ///
    /// Unknown tokens yield `None`: the caller skips the clause, which
    /// keeps rule strings written for a newer registry usable.
    #[must_use]
    pub fn resolve(&self, token: &str, raw_argument: &str) -> Option<BoxedCheck> {
        self.entries
            .get(token)
            .map(|constructor| constructor(self, raw_argument))
    }

    /// Returns true if `token` has a registered constructor.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tokens.sort_unstable();
        f.debug_struct("Registry").field("tokens", &tokens).finish()
    }
}

// ============================================================================
// BUILT-IN TOKENS
// ============================================================================

/// Builds a numeric-threshold check, deferring a parse failure when the
/// argument is not a number.
fn numeric_arg(raw: &str, build: impl Fn(f64) -> BoxedCheck) -> BoxedCheck {
    match raw.trim().parse::<f64>() {
        Ok(n) => build(n),
        Err(err) => Box::new(checks::fail_with(err.to_string())),
    }
}

/// Builds an integer-limit check, deferring a parse failure when the
/// argument is not an integer.
fn integer_arg(raw: &str, build: impl Fn(i64) -> BoxedCheck) -> BoxedCheck {
    match raw.trim().parse::<i64>() {
        Ok(n) => build(n),
        Err(err) => Box::new(checks::fail_with(err.to_string())),
    }
}

fn install_builtins(registry: &mut Registry) {
    registry.register("nonzero", |_, _| Box::new(checks::nonzero()));
    registry.register("email", |_, _| Box::new(checks::email()));
    registry.register("url", |_, _| Box::new(checks::url()));
    registry.register("ip", |_, _| Box::new(checks::ip()));
    registry.register("hexcolor", |_, _| Box::new(checks::hex_color()));
    registry.register("alpha", |_, _| Box::new(checks::alpha()));
    registry.register("num", |_, _| Box::new(checks::num()));
    registry.register("alphanum", |_, _| Box::new(checks::alpha_num()));

    registry.register("matches", |_, arg| match checks::matches(arg) {
        Ok(check) => Box::new(check),
        Err(err) => Box::new(checks::fail_with(err.to_string())),
    });

    registry.register("gt", |_, arg| {
        numeric_arg(arg, |n| Box::new(checks::gt(n)))
    });
    registry.register("gte", |_, arg| {
        numeric_arg(arg, |n| Box::new(checks::gte(n)))
    });
    registry.register("lt", |_, arg| {
        numeric_arg(arg, |n| Box::new(checks::lt(n)))
    });
    registry.register("lte", |_, arg| {
        numeric_arg(arg, |n| Box::new(checks::lte(n)))
    });
    registry.register("lat", |_, _| Box::new(checks::lat()));
    registry.register("lon", |_, _| Box::new(checks::lon()));

    registry.register("eq", |_, arg| Box::new(checks::text_eq(arg)));
    registry.register("in", |_, arg| Box::new(checks::text_one_of(arg)));
    registry.register("notin", |_, arg| Box::new(checks::text_none_of(arg)));

    registry.register("len", |_, arg| {
        integer_arg(arg, |n| Box::new(checks::len(n)))
    });
    registry.register("minlen", |_, arg| {
        integer_arg(arg, |n| Box::new(checks::min_len(n)))
    });
    registry.register("maxlen", |_, arg| {
        integer_arg(arg, |n| Box::new(checks::max_len(n)))
    });

    // The one token whose constructor recurses into the parser.
    registry.register("each", |registry, arg| {
        Box::new(checks::each(expr::parse(registry, arg)))
    });
}

// ============================================================================
// PROCESS-WIDE DEFAULT REGISTRY
// ============================================================================

static DEFAULT_REGISTRY: LazyLock<RwLock<Registry>> =
    LazyLock::new(|| RwLock::new(Registry::new()));

/// Registers `token` in the process-wide default registry.
///
/// The registration is visible to every subsequent validation that uses
/// the default registry.  Intended for program initialization; for
/// isolated vocabularies, build an explicit [`Registry`] instead.
pub fn register_token<F>(token: impl Into<String>, constructor: F)
where
    F: Fn(&Registry, &str) -> BoxedCheck + Send + Sync + 'static,
{
    DEFAULT_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(token, constructor);
}

/// Runs `f` with a read guard on the process-wide default registry.
pub fn with_default_registry<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let guard = DEFAULT_REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use crate::error::ValidationError;
    use serde_json::json;

    #[test]
    fn builtins_are_installed() {
        let registry = Registry::new();
        for token in [
            "nonzero", "email", "url", "ip", "hexcolor", "alpha", "num", "alphanum", "matches",
            "gt", "gte", "lt", "lte", "lat", "lon", "eq", "in", "notin", "len", "minlen",
            "maxlen", "each",
        ] {
            assert!(registry.contains(token), "missing builtin {token}");
        }
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = Registry::empty();
        assert!(registry.resolve("nonzero", "").is_none());
    }

    #[test]
    fn resolve_builds_a_working_check() {
        let registry = Registry::new();
        let check = registry.resolve("gt", "18").unwrap();
        assert!(check.check("age", &json!(19)).is_ok());
        assert!(check.check("age", &json!(18)).is_err());
    }

    #[test]
    fn unknown_token_is_none() {
        let registry = Registry::new();
        assert!(registry.resolve("pword", "").is_none());
    }

    #[test]
    fn malformed_numeric_argument_defers_the_parse_error() {
        let registry = Registry::new();
        let check = registry.resolve("minlen", "sss").unwrap();
        let err = check.check("url", &json!("anything")).unwrap_err();
        assert!(matches!(err, ValidationError::MalformedArgument { .. }));
    }

    #[test]
    fn malformed_pattern_defers_the_regex_error() {
        let registry = Registry::new();
        let check = registry.resolve("matches", "(unclosed").unwrap();
        assert!(matches!(
            check.check("f", &json!("x")).unwrap_err(),
            ValidationError::MalformedArgument { .. }
        ));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = Registry::new();
        registry.register("nonzero", |_, _| Box::new(checks::fail_with("replaced")));
        let check = registry.resolve("nonzero", "").unwrap();
        assert!(check.check("f", &json!("populated")).is_err());
    }

    #[test]
    fn replacement_does_not_affect_existing_checks() {
        let mut registry = Registry::new();
        let before = registry.resolve("gt", "10").unwrap();
        registry.register("gt", |_, _| Box::new(checks::fail_with("replaced")));
        assert!(before.check("f", &json!(11)).is_ok());
        assert!(registry.resolve("gt", "10").unwrap().check("f", &json!(11)).is_err());
    }

    #[test]
    fn debug_lists_tokens() {
        let mut registry = Registry::empty();
        registry.register("custom", |_, _| Box::new(checks::nonzero()));
        assert!(format!("{registry:?}").contains("custom"));
    }
}
