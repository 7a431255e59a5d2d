//! # rulegate
//!
//! A declarative field-validation library built around a small rule
//! mini-language.
//!
//! ## Quick Start
//!
//! ```rust
//! use rulegate::{Suite, annotations};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct SignUp {
//!     email: String,
//!     username: String,
//!     age: u32,
//! }
//!
//! annotations! {
//!     SignUp {
//!         email: "email",
//!         username: "alphanum|minlen(5)|maxlen(20)",
//!         age: "gte(18)",
//!     }
//! }
//!
//! let form = SignUp {
//!     email: "ada@example.com".into(),
//!     username: "ada1815".into(),
//!     age: 30,
//! };
//! assert!(Suite::for_record(&form).validate().is_ok());
//! ```
//!
//! ## Rule expressions
//!
//! A rule is a `|`-separated conjunction of clauses. Each clause is a
//! registered token, optionally with a parenthesised argument:
//! `nonzero`, `gte(18)`, `in(red,green,blue)`, or a nested expression
//! such as `each( gt(0) | lt(100) )`. Unknown tokens are skipped;
//! malformed arguments produce a check that always fails with a
//! descriptive error, so building a suite never fails up front.
//!
//! ## Building blocks
//!
//! - [`check::Check`] — the trait every primitive implements; declare
//!   your own with the [`check!`] macro.
//! - [`registry::Registry`] — maps rule tokens to check constructors;
//!   extend it with [`registry::register_token`].
//! - [`suite::Suite`] — an ordered set of bindings, built by hand or
//!   through [`Suite::for_record`] / [`Suite::for_query`].

pub mod check;
pub mod checks;
pub mod error;
pub mod expr;
mod macros;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod suite;
pub mod value;

pub use check::{BoxedCheck, Check};
pub use error::ValidationError;
pub use record::Annotated;
pub use registry::Registry;
pub use suite::{Binding, Entry, Suite};
