//! The namespace model and matching engine.
//!
//! This module handles:
//! - Building, splitting and extending separator-delimited namespaces
//! - Classifying wildcard content of a single component
//! - Component and namespace matching with per-side wildcard expansion
//! - Precompiled patterns for matching one pattern against many subjects

pub mod matcher;
pub mod model;
pub mod pattern;
pub mod wildcard;

pub use matcher::{MatchOptions, components_match, matches, namespaces_match};
pub use model::{
	Namespace, extend, from_components, is_namespace, is_namespace_component, to_components,
};
pub use pattern::NamespacePattern;
pub use wildcard::{
	component_has_multi_character_wildcard, component_has_single_character_wildcard,
	component_has_wildcard, glob_match,
};

/// Separates the components of a namespace.
pub const SEPARATOR: char = ':';

/// Matches exactly one character when its side is expanded.
pub const SINGLE_WILDCARD: char = '?';

/// Matches zero or more characters when its side is expanded.
pub const MULTI_WILDCARD: char = '*';
