//! Prelude module for convenient imports.
//!
//! Provides a single `use rulegate::prelude::*;` import that brings in
//! the core types, the built-in check factories, and the registry entry
//! points.
//!
//! # Examples
//!
//! ```rust
//! use rulegate::prelude::*;
//! use serde_json::json;
//!
//! let suite = Suite::new()
//!     .add(Binding::new("age", json!(30), Box::new(gte(18.0))))
//!     .add(Binding::new("name", json!("ada"), Box::new(alpha())));
//!
//! assert!(suite.validate().is_ok());
//! ```

// ============================================================================
// CORE: traits, errors, suites
// ============================================================================

pub use crate::check::{BoxedCheck, Check};
pub use crate::error::ValidationError;
pub use crate::record::Annotated;
pub use crate::suite::{Binding, Entry, Suite};

// ============================================================================
// CHECKS: built-in factories
// ============================================================================

pub use crate::checks::each::each;
pub use crate::checks::equality::{eq, none_of, one_of, text_eq, text_none_of, text_one_of};
pub use crate::checks::length::{len, max_len, min_len};
pub use crate::checks::numeric::{gt, gte, lat, lon, lt, lte};
pub use crate::checks::pattern::{alpha, alpha_num, email, hex_color, ip, matches, num, url};
pub use crate::checks::presence::nonzero;

// ============================================================================
// REGISTRY
// ============================================================================

pub use crate::registry::{Registry, register_token, with_default_registry};
