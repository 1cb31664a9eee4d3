use crate::namespace::model::to_components;
use crate::namespace::wildcard::glob_match;

/// Per-side wildcard expansion flags.
///
/// A side whose flag is off is compared literally; `*` and `?` in it are
/// ordinary characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
	pub expand_left_wildcards: bool,
	pub expand_right_wildcards: bool,
}

impl Default for MatchOptions {
	/// Left operand is the pattern, right operand is the literal subject.
	fn default() -> Self {
		MatchOptions {
			expand_left_wildcards: true,
			expand_right_wildcards: false,
		}
	}
}

impl MatchOptions {
	pub fn new(expand_left_wildcards: bool, expand_right_wildcards: bool) -> Self {
		MatchOptions {
			expand_left_wildcards,
			expand_right_wildcards,
		}
	}

	/// Neither side expands.
	pub fn literal() -> Self {
		Self::new(false, false)
	}

	/// Right operand is the pattern, left operand is the literal subject.
	pub fn reversed() -> Self {
		Self::new(false, true)
	}

	/// Both sides expand. Note this collapses to literal equality.
	pub fn symmetric() -> Self {
		Self::new(true, true)
	}
}

/// Compare two component slots.
///
/// `None` marks a position past the end of the shorter namespace. Two
/// absent slots match; an absent slot never matches a present one. The
/// empty string is a present component.
pub fn components_match(lhs: Option<&str>, rhs: Option<&str>, options: MatchOptions) -> bool {
	match (lhs, rhs) {
		(None, None) => true,
		(Some(_), None) | (None, Some(_)) => false,
		(Some(lhs), Some(rhs)) => {
			match (options.expand_left_wildcards, options.expand_right_wildcards) {
				(true, false) => glob_match(lhs, rhs),
				(false, true) => glob_match(rhs, lhs),
				// Expanding both sides does not attempt pattern unification.
				_ => lhs == rhs,
			}
		}
	}
}

/// Match two namespaces component by component.
///
/// The shorter component sequence is padded with absent slots, so
/// namespaces with different component counts never match. Wildcards never
/// cross a separator.
pub fn namespaces_match(lhs: &str, rhs: &str, options: MatchOptions) -> bool {
	let lhs = to_components(lhs);
	let rhs = to_components(rhs);
	let width = lhs.len().max(rhs.len());

	(0..width).all(|i| components_match(lhs.get(i).copied(), rhs.get(i).copied(), options))
}

/// Match with the default policy: `lhs` is the pattern, `rhs` the subject.
pub fn matches(lhs: &str, rhs: &str) -> bool {
	namespaces_match(lhs, rhs, MatchOptions::default())
}
