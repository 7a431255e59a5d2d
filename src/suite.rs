//! Validation suites.
//!
//! A [`Suite`] is an ordered collection of [`Entry`] items. Each entry is
//! either a [`Binding`] (a field name, a captured value, and the check to run
//! against it), a nested group (another `Suite`), or a deferred error that
//! fires when the suite is evaluated.
//!
//! Evaluation walks entries in insertion order and stops at the first
//! failure. An empty suite passes.
//!
//! # Examples
//!
//! ```rust
//! use rulegate::checks::numeric::gte;
//! use rulegate::suite::{Binding, Suite};
//! use serde_json::json;
//!
//! let suite = Suite::new()
//!     .add(Binding::new("age", json!(21), Box::new(gte(18.0))));
//!
//! assert!(suite.validate().is_ok());
//! ```

use core::fmt;

use serde_json::Value;

use crate::check::BoxedCheck;
use crate::error::ValidationError;

// ============================================================================
// Binding
// ============================================================================

/// A single field/value pair bound to the check that must hold for it.
pub struct Binding {
    field: String,
    value: Value,
    check: BoxedCheck,
}

impl Binding {
    /// Binds `check` to `field` and a captured `value`.
    pub fn new(field: impl Into<String>, value: Value, check: BoxedCheck) -> Self {
        Self {
            field: field.into(),
            value,
            check,
        }
    }

    /// The field name reported on failure.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The captured value the check runs against.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Runs the bound check against the captured value.
    pub fn evaluate(&self) -> Result<(), ValidationError> {
        self.check.check(&self.field, &self.value)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("field", &self.field)
            .field("value", &self.value)
            .field("check", &self.check.name())
            .finish()
    }
}

// ============================================================================
// Entry
// ============================================================================

/// One unit of work inside a [`Suite`].
#[derive(Debug)]
pub enum Entry {
    /// A field/value pair with its check.
    Binding(Binding),
    /// A nested suite, evaluated as a unit.
    Group(Suite),
    /// An error discovered while building the suite, reported at
    /// evaluation time so construction itself never fails.
    Fail(ValidationError),
}

impl Entry {
    fn evaluate(&self) -> Result<(), ValidationError> {
        match self {
            Entry::Binding(binding) => binding.evaluate(),
            Entry::Group(suite) => suite.validate(),
            Entry::Fail(error) => Err(error.clone()),
        }
    }
}

impl From<Binding> for Entry {
    fn from(binding: Binding) -> Self {
        Entry::Binding(binding)
    }
}

impl From<Suite> for Entry {
    fn from(suite: Suite) -> Self {
        Entry::Group(suite)
    }
}

impl From<ValidationError> for Entry {
    fn from(error: ValidationError) -> Self {
        Entry::Fail(error)
    }
}

// ============================================================================
// Suite
// ============================================================================

/// An ordered set of validation entries evaluated front to back.
#[derive(Debug, Default)]
pub struct Suite {
    entries: Vec<Entry>,
}

impl Suite {
    /// Creates an empty suite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry, consuming and returning the suite for chaining.
    #[must_use]
    pub fn add(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    /// Appends an entry in place.
    pub fn push(&mut self, entry: impl Into<Entry>) {
        self.entries.push(entry.into());
    }

    /// Number of entries in this suite (nested groups count as one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the suite holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates every entry in insertion order, returning the first
    /// failure. An empty suite passes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for entry in &self.entries {
            entry.evaluate()?;
        }
        Ok(())
    }
}
