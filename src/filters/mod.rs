//! Namespace filters for nsmatch.
//!
//! This module handles:
//! - Compiling configured filters into reusable namespace patterns
//! - First-match-wins include/exclude decisions for a namespace

pub mod matcher;

pub use matcher::{
	CompiledFilter, Decision, FilterAction, FilterSet, compile_filters, find_matching_filter,
};
