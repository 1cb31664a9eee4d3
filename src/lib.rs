//! nsmatch - hierarchical namespace matching with per-side wildcard expansion.
//!
//! This library provides:
//! - The namespace model: building, splitting and extending `:`-delimited names
//! - Component wildcard classification (`?` for one character, `*` for any run)
//! - Component and namespace matching where each side independently decides
//!   whether its wildcards are pattern syntax or literal characters
//! - Include/exclude namespace filters loaded from a `.nsmatch.toml` cascade
//!
//! # Example
//!
//! ```
//! use nsmatch::namespace::{MatchOptions, from_components, matches, namespaces_match};
//!
//! let pattern = from_components(["svc", "auth", "*"]);
//! let topic = from_components(["svc", "auth", "login"]);
//!
//! assert!(matches(pattern.as_str(), topic.as_str()));
//! assert!(!namespaces_match(pattern.as_str(), topic.as_str(), MatchOptions::literal()));
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod namespace;

pub use error::{NsMatchError, Result};
pub use namespace::{MatchOptions, Namespace};
