use nsmatch::namespace::{
	MatchOptions, Namespace, NamespacePattern, components_match, from_components, matches,
	namespaces_match, to_components,
};
use proptest::prelude::*;

/// Non-empty components free of separators and wildcards.
fn arb_literal_component() -> impl Strategy<Value = String> {
	"[a-zA-Z0-9_.-]{1,8}"
}

/// Components that may carry wildcards.
fn arb_pattern_component() -> impl Strategy<Value = String> {
	"[ab?*]{0,6}"
}

fn arb_options() -> impl Strategy<Value = MatchOptions> {
	(any::<bool>(), any::<bool>()).prop_map(|(left, right)| MatchOptions::new(left, right))
}

proptest! {
	#[test]
	fn round_trip(components in prop::collection::vec(arb_literal_component(), 0..6)) {
		let namespace = from_components(&components);
		prop_assert_eq!(to_components(namespace.as_str()), components);
	}

	#[test]
	fn separator_only_namespaces_are_empty(n in 1usize..10) {
		prop_assert!(to_components(&":".repeat(n)).is_empty());
	}

	#[test]
	fn literal_namespaces_match_themselves(
		components in prop::collection::vec(arb_literal_component(), 0..6),
		options in arb_options(),
	) {
		let namespace = from_components(&components);
		prop_assert!(matches(namespace.as_str(), namespace.as_str()));
		prop_assert!(namespaces_match(namespace.as_str(), namespace.as_str(), options));
	}

	#[test]
	fn literal_components_compare_by_equality(
		lhs in arb_literal_component(),
		rhs in arb_literal_component(),
		options in arb_options(),
	) {
		prop_assert_eq!(components_match(Some(lhs.as_str()), Some(rhs.as_str()), options), lhs == rhs);
	}

	#[test]
	fn absent_never_matches_present(component in arb_pattern_component(), options in arb_options()) {
		prop_assert!(!components_match(Some(component.as_str()), None, options));
		prop_assert!(!components_match(None, Some(component.as_str()), options));
		prop_assert!(components_match(None, None, options));
	}

	#[test]
	fn extra_components_never_match(
		components in prop::collection::vec(arb_pattern_component(), 1..5),
		extra in arb_literal_component(),
		options in arb_options(),
	) {
		let short = from_components(&components);
		let long = short.extend([extra]);
		prop_assert!(!namespaces_match(short.as_str(), long.as_str(), options));
		prop_assert!(!namespaces_match(long.as_str(), short.as_str(), options));
	}

	#[test]
	fn star_matches_any_single_component(subject in arb_literal_component()) {
		prop_assert!(matches("*", &subject));
	}

	#[test]
	fn single_wildcard_requires_exact_length(middle in "[a-z]", tail in "[a-z]{0,3}") {
		let subject = format!("ab{}d{}", middle, tail);
		prop_assert_eq!(matches("ab?d", &subject), tail.is_empty());
	}

	#[test]
	fn compiled_pattern_agrees_with_direct_match(
		pattern in prop::collection::vec(arb_pattern_component(), 0..4),
		subject in prop::collection::vec("[ab]{0,6}", 0..4),
		options in arb_options(),
	) {
		let pattern = Namespace::from_components(&pattern);
		let subject = from_components(&subject);
		let compiled = NamespacePattern::compile(&pattern, options).unwrap();
		prop_assert_eq!(
			compiled.is_match(subject.as_str()),
			namespaces_match(pattern.as_str(), subject.as_str(), options)
		);
	}
}
