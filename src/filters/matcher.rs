use crate::config::types::{FilterRule, FilterWithSource, MergedConfig};
use crate::error::Result;
use crate::namespace::{Namespace, NamespacePattern};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, trace};

/// What a matching filter does to a namespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterAction {
	#[default]
	Include,
	Exclude,
}

impl fmt::Display for FilterAction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			FilterAction::Include => f.write_str("include"),
			FilterAction::Exclude => f.write_str("exclude"),
		}
	}
}

/// A compiled filter ready for matching.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
	/// The original filter.
	pub filter: FilterRule,

	/// Compiled namespace pattern with resolved options.
	pub pattern: NamespacePattern,

	/// Source config path (for debugging).
	pub source: PathBuf,
}

impl CompiledFilter {
	/// Compile a filter from a FilterWithSource.
	pub fn from_filter_with_source(fws: &FilterWithSource) -> Result<Self> {
		let pattern = NamespacePattern::compile(&fws.filter.pattern, fws.options)?;

		Ok(CompiledFilter {
			filter: fws.filter.clone(),
			pattern,
			source: fws.source.clone(),
		})
	}

	/// Check if this filter matches the given namespace.
	pub fn matches(&self, namespace: &Namespace) -> bool {
		self.pattern.is_match(namespace.as_str())
	}

	pub fn action(&self) -> FilterAction {
		self.filter.action
	}
}

/// Compile all filters in a merged config.
pub fn compile_filters(config: &MergedConfig) -> Result<Vec<CompiledFilter>> {
	config
		.filters
		.iter()
		.map(CompiledFilter::from_filter_with_source)
		.collect()
}

/// Find the first filter matching `namespace`, in declaration order.
pub fn find_matching_filter<'a>(
	filters: &'a [CompiledFilter],
	namespace: &Namespace,
) -> Option<&'a CompiledFilter> {
	matching_position(filters, namespace).map(|index| &filters[index])
}

fn matching_position(filters: &[CompiledFilter], namespace: &Namespace) -> Option<usize> {
	filters.iter().position(|filter| {
		let matched = filter.matches(namespace);
		trace!(
			pattern = %filter.filter.pattern,
			namespace = %namespace,
			matched,
			"evaluated filter"
		);
		matched
	})
}

/// Outcome of running a namespace through a [`FilterSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
	pub action: FilterAction,

	/// Index of the deciding filter, or `None` when the default applied.
	pub filter_index: Option<usize>,
}

/// An ordered list of compiled filters plus a fallback action.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
	pub filters: Vec<CompiledFilter>,
	pub default_action: FilterAction,
}

impl FilterSet {
	pub fn new(filters: Vec<CompiledFilter>, default_action: FilterAction) -> Self {
		FilterSet {
			filters,
			default_action,
		}
	}

	/// Compile every filter in a merged config.
	pub fn from_config(config: &MergedConfig) -> Result<Self> {
		Ok(FilterSet::new(compile_filters(config)?, config.default_action))
	}

	/// Decide what to do with `namespace`. The first matching filter wins.
	pub fn decide(&self, namespace: &Namespace) -> Decision {
		let decision = match matching_position(&self.filters, namespace) {
			Some(index) => Decision {
				action: self.filters[index].action(),
				filter_index: Some(index),
			},
			None => Decision {
				action: self.default_action,
				filter_index: None,
			},
		};
		debug!(
			namespace = %namespace,
			action = %decision.action,
			filter = ?decision.filter_index,
			"filter decision"
		);
		decision
	}

	/// True if records under `namespace` should be kept.
	pub fn is_enabled(&self, namespace: &Namespace) -> bool {
		self.decide(namespace).action == FilterAction::Include
	}

	pub fn get(&self, index: usize) -> Option<&CompiledFilter> {
		self.filters.get(index)
	}
}
