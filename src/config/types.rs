use crate::error::NsMatchError;
use crate::filters::FilterAction;
use crate::namespace::{MatchOptions, Namespace};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration from a `.nsmatch.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop walking up the directory tree after this file.
	#[serde(default)]
	pub root: bool,

	/// Environment variable name that, if truthy, skips ~/.nsmatch.toml lookup.
	#[serde(default)]
	pub root_config_lookup_disable_env_var: Option<String>,

	/// Verdict for namespaces no filter matches.
	#[serde(default)]
	pub default: Option<FilterAction>,

	/// File-wide default for treating filter patterns as wildcard patterns.
	#[serde(default)]
	pub expand_left_wildcards: Option<bool>,

	/// File-wide default for treating checked namespaces as wildcard patterns.
	#[serde(default)]
	pub expand_right_wildcards: Option<bool>,

	/// Namespace filters. First matching filter wins.
	#[serde(default)]
	pub filters: Vec<FilterRule>,
}

/// A single namespace filter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FilterRule {
	/// Namespace pattern, e.g. "svc:auth:*".
	pub pattern: Namespace,

	/// What to do with namespaces this filter matches.
	#[serde(default)]
	pub action: FilterAction,

	/// Overrides the file-wide left expansion default.
	pub expand_left_wildcards: Option<bool>,

	/// Overrides the file-wide right expansion default.
	pub expand_right_wildcards: Option<bool>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// All filters from all configs, in cascade order (first match wins).
	pub filters: Vec<FilterWithSource>,

	/// Verdict for unmatched namespaces.
	pub default_action: FilterAction,
}

/// A filter with its resolved options and source config path.
#[derive(Debug, Clone)]
pub struct FilterWithSource {
	/// The filter itself.
	pub filter: FilterRule,

	/// Expansion options after applying file-wide defaults.
	pub options: MatchOptions,

	/// The config file this filter came from.
	pub source: PathBuf,
}

impl FilterRule {
	/// Resolve per-filter overrides against `defaults`.
	pub fn options(&self, defaults: MatchOptions) -> MatchOptions {
		MatchOptions {
			expand_left_wildcards: self
				.expand_left_wildcards
				.unwrap_or(defaults.expand_left_wildcards),
			expand_right_wildcards: self
				.expand_right_wildcards
				.unwrap_or(defaults.expand_right_wildcards),
		}
	}

	/// A pattern with no components would only ever match the empty namespace.
	pub fn validate(&self, path: &Path, index: usize) -> Result<(), NsMatchError> {
		if self.pattern.is_empty() {
			return Err(NsMatchError::InvalidFilter {
				path: path.to_path_buf(),
				index,
				reason: format!("pattern {:?} has no components", self.pattern.as_str()),
			});
		}
		Ok(())
	}
}

impl Config {
	/// Validate all filters in this config.
	pub fn validate(&self, path: &Path) -> Result<(), NsMatchError> {
		for (index, filter) in self.filters.iter().enumerate() {
			filter.validate(path, index)?;
		}
		Ok(())
	}

	/// File-wide expansion defaults, falling back to `MatchOptions::default()`.
	pub fn match_options(&self) -> MatchOptions {
		let defaults = MatchOptions::default();
		MatchOptions {
			expand_left_wildcards: self
				.expand_left_wildcards
				.unwrap_or(defaults.expand_left_wildcards),
			expand_right_wildcards: self
				.expand_right_wildcards
				.unwrap_or(defaults.expand_right_wildcards),
		}
	}
}
