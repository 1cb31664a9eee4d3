use crate::error::{NsMatchError, Result};
use crate::namespace::matcher::{MatchOptions, namespaces_match};
use crate::namespace::model::{Namespace, to_components};
use crate::namespace::wildcard::{component_has_wildcard, glob_match};
use crate::namespace::{MULTI_WILDCARD, SINGLE_WILDCARD};
use regex::Regex;
use tracing::debug;

/// How one pattern component is checked against a subject component.
#[derive(Debug, Clone)]
enum ComponentMatcher {
	Literal(String),
	Regex(Regex),
	/// Too large for the regex size limit; matched with `glob_match`.
	Glob(String),
}

impl ComponentMatcher {
	fn is_match(&self, component: &str) -> bool {
		match self {
			ComponentMatcher::Literal(literal) => literal == component,
			ComponentMatcher::Regex(regex) => regex.is_match(component),
			ComponentMatcher::Glob(pattern) => glob_match(pattern, component),
		}
	}
}

/// A namespace pattern prepared for matching against many subjects.
///
/// When only the pattern side expands, each wildcard component is compiled
/// to an anchored regex once. Any other option set cannot be precompiled
/// (the subject may be the pattern) and falls back to [`namespaces_match`].
#[derive(Debug, Clone)]
pub struct NamespacePattern {
	source: Namespace,
	options: MatchOptions,
	compiled: Option<Vec<ComponentMatcher>>,
}

impl NamespacePattern {
	/// Compile `pattern`, which plays the left-hand role under `options`.
	pub fn compile(pattern: &Namespace, options: MatchOptions) -> Result<Self> {
		let precompile = options.expand_left_wildcards && !options.expand_right_wildcards;

		let compiled = if precompile {
			let matchers = pattern
				.components()
				.into_iter()
				.map(compile_component)
				.collect::<Result<Vec<_>>>()?;
			Some(matchers)
		} else {
			None
		};

		Ok(NamespacePattern {
			source: pattern.clone(),
			options,
			compiled,
		})
	}

	pub fn source(&self) -> &Namespace {
		&self.source
	}

	pub fn options(&self) -> MatchOptions {
		self.options
	}

	/// True if `subject` matches this pattern.
	pub fn is_match(&self, subject: &str) -> bool {
		let Some(matchers) = &self.compiled else {
			return namespaces_match(self.source.as_str(), subject, self.options);
		};

		let components = to_components(subject);
		components.len() == matchers.len()
			&& matchers
				.iter()
				.zip(components)
				.all(|(matcher, component)| matcher.is_match(component))
	}
}

fn compile_component(component: &str) -> Result<ComponentMatcher> {
	if !component_has_wildcard(component) {
		return Ok(ComponentMatcher::Literal(component.to_string()));
	}

	let mut expr = String::from("(?s)^");
	let mut literal = String::new();
	for c in component.chars() {
		if c == SINGLE_WILDCARD || c == MULTI_WILDCARD {
			expr.push_str(&regex::escape(&literal));
			literal.clear();
			expr.push_str(if c == SINGLE_WILDCARD { "." } else { ".*" });
		} else {
			literal.push(c);
		}
	}
	expr.push_str(&regex::escape(&literal));
	expr.push('$');

	match Regex::new(&expr) {
		Ok(regex) => Ok(ComponentMatcher::Regex(regex)),
		Err(regex::Error::CompiledTooBig(limit)) => {
			debug!(
				length = component.len(),
				limit, "component exceeds regex size limit, using glob matcher"
			);
			Ok(ComponentMatcher::Glob(component.to_string()))
		}
		Err(source) => Err(NsMatchError::InvalidPattern {
			pattern: component.to_string(),
			source,
		}),
	}
}
