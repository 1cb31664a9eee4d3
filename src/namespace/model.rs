use crate::namespace::SEPARATOR;
use crate::namespace::matcher::{MatchOptions, namespaces_match};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A hierarchical name made of `SEPARATOR`-delimited components.
///
/// Namespaces are plain string values. Nothing about them is validated on
/// construction: any string is a namespace, and its components are whatever
/// splitting on the separator produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
	/// Wrap a string as a namespace.
	pub fn new(value: impl Into<String>) -> Self {
		Namespace(value.into())
	}

	/// Build a namespace by joining components with the separator.
	pub fn from_components<I, S>(components: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		from_components(components)
	}

	/// The underlying string.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Decompose into components. See [`to_components`].
	pub fn components(&self) -> Vec<&str> {
		to_components(&self.0)
	}

	/// Number of components.
	pub fn len(&self) -> usize {
		self.components().len()
	}

	/// True for the zero-component namespace (empty, or separators only).
	pub fn is_empty(&self) -> bool {
		self.components().is_empty()
	}

	/// Return a new namespace with `components` appended.
	pub fn extend<I, S>(&self, components: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		extend(&self.0, components)
	}

	/// Match with `self` as the pattern and `subject` as the literal.
	pub fn matches(&self, subject: &Namespace) -> bool {
		self.matches_with(subject, MatchOptions::default())
	}

	pub fn matches_with(&self, other: &Namespace, options: MatchOptions) -> bool {
		namespaces_match(&self.0, &other.0, options)
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Namespace {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Namespace::new(s))
	}
}

impl AsRef<str> for Namespace {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Namespace {
	fn from(value: &str) -> Self {
		Namespace::new(value)
	}
}

impl From<String> for Namespace {
	fn from(value: String) -> Self {
		Namespace(value)
	}
}

fn as_string(value: &dyn Any) -> Option<&str> {
	if let Some(s) = value.downcast_ref::<String>() {
		Some(s)
	} else {
		value.downcast_ref::<&'static str>().copied()
	}
}

/// Returns true if `value` has a namespace's representation (a string).
///
/// No well-formedness check is made beyond the type.
pub fn is_namespace(value: &dyn Any) -> bool {
	as_string(value).is_some() || value.is::<Namespace>()
}

/// Returns true if `value` is a string that does not contain the separator.
pub fn is_namespace_component(value: &dyn Any) -> bool {
	as_string(value).is_some_and(|s| !s.contains(SEPARATOR))
}

/// Join components with the separator.
///
/// No escaping is performed: a component that itself contains the separator
/// will decompose into several components later.
pub fn from_components<I, S>(components: I) -> Namespace
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut joined = String::new();
	for (i, component) in components.into_iter().enumerate() {
		if i > 0 {
			joined.push(SEPARATOR);
		}
		joined.push_str(component.as_ref());
	}
	Namespace(joined)
}

/// Split a namespace into its components.
///
/// The empty string, and any string consisting only of separators, is the
/// zero-component namespace and yields an empty vector.
pub fn to_components(namespace: &str) -> Vec<&str> {
	if namespace.chars().all(|c| c == SEPARATOR) {
		return Vec::new();
	}
	namespace.split(SEPARATOR).collect()
}

/// Append components to `namespace`.
///
/// Extending a blank namespace is the same as `from_components` with only
/// the new components; no leading separator is introduced.
pub fn extend<I, S>(namespace: &str, components: I) -> Namespace
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let existing = to_components(namespace);
	let appended: Vec<S> = components.into_iter().collect();

	if existing.is_empty() {
		return from_components(appended);
	}
	if appended.is_empty() {
		return Namespace::new(namespace);
	}

	let mut extended = String::from(namespace);
	for component in &appended {
		extended.push(SEPARATOR);
		extended.push_str(component.as_ref());
	}
	Namespace(extended)
}
