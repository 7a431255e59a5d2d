//! Macros for declaring checks and rule annotations with minimal
//! boilerplate.
//!
//! - [`check!`] — declares a complete primitive check (struct + [`Check`]
//!   impl + factory fn).
//! - [`annotations!`] — implements [`Annotated`] for a record type from a
//!   `field: "rule"` list.
//!
//! [`Check`]: crate::check::Check
//! [`Annotated`]: crate::record::Annotated
//!
//! # Examples
//!
//! ```
//! use rulegate::check;
//! use rulegate::check::Check;
//! use rulegate::value::numeric_form;
//! use serde_json::json;
//!
//! check! {
//!     /// Passes when the numeric form is strictly positive.
//!     pub Positive;
//!     rule(value) { matches!(numeric_form(value), Some(n) if n > 0.0) }
//!     fn positive();
//! }
//!
//! assert!(positive().check("count", &json!(1)).is_ok());
//! assert!(positive().check("count", &json!(0)).is_err());
//! ```

// ============================================================================
// CHECK MACRO
// ============================================================================

/// Declares a complete primitive check: struct definition, [`Check`]
/// impl, constructor, and factory function.
///
/// The `rule` block returns `bool`; a false result produces the generic
/// per-field failure. The check's [`name`](crate::check::Check::name) is
/// the factory function's name.
///
/// `#[derive(Debug, Clone)]` is always applied.
///
/// # Variants
///
/// **Unit check** (zero-sized):
/// ```rust,ignore
/// check! {
///     pub Nonzero;
///     rule(value) { !is_zero(value) }
///     fn nonzero();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// check! {
///     pub Gt { threshold: f64 };
///     rule(self, value) { matches!(numeric_form(value), Some(n) if n > self.threshold) }
///     fn gt(threshold: f64);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// check! {
///     pub TextEq { raw: String };
///     rule(self, value) { raw_matches(value, &self.raw) }
///     new(raw: impl Into<String>) { Self { raw: raw.into() } }
///     fn text_eq(raw: impl Into<String>);
/// }
/// ```
///
/// [`Check`]: crate::check::Check
#[macro_export]
macro_rules! check {
    // ── Unit check (no fields) + factory fn ──────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($value:ident) $rule:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::check::Check for $name {
            fn check(
                &self,
                field: &str,
                $value: &::serde_json::Value,
            ) -> ::std::result::Result<(), $crate::error::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::error::ValidationError::field_failed(field))
                }
            }

            fn name(&self) -> &'static str {
                stringify!($factory)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $value:ident) $rule:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::check! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $value) $rule
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $value:ident) $rule:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::check::Check for $name {
            fn check(
                &$self_,
                field: &str,
                $value: &::serde_json::Value,
            ) -> ::std::result::Result<(), $crate::error::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    Err($crate::error::ValidationError::field_failed(field))
                }
            }

            fn name(&self) -> &'static str {
                stringify!($factory)
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// ANNOTATIONS MACRO
// ============================================================================

/// Implements [`Annotated`](crate::record::Annotated) for a record type.
///
/// Fields are listed in the order they should be evaluated; the rule
/// text uses the same mini-language as every other entry point.
///
/// # Examples
///
/// ```
/// use rulegate::{Suite, annotations};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User {
///     email: String,
///     age: u32,
/// }
///
/// annotations! {
///     User {
///         email: "email",
///         age: "gte(18)",
///     }
/// }
///
/// let user = User { email: "a@example.com".into(), age: 30 };
/// assert!(Suite::for_record(&user).validate().is_ok());
/// ```
#[macro_export]
macro_rules! annotations {
    ($ty:ty { $($field:ident: $rule:expr),* $(,)? }) => {
        impl $crate::record::Annotated for $ty {
            fn annotations() -> &'static [(&'static str, &'static str)] {
                &[$((stringify!($field), $rule)),*]
            }
        }
    };
}
