use crate::config::parser::parse_config_file;
use crate::config::types::{FilterWithSource, LoadedConfig, MergedConfig};
use crate::error::{NsMatchError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in every directory of the cascade.
pub const CONFIG_FILE_NAME: &str = ".nsmatch.toml";

/// Discover and load all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.nsmatch.toml`
/// 2. If found and `root = true`, stop walking up
/// 3. Otherwise, continue up the directory tree
/// 4. Finally, check ~/.nsmatch.toml (unless disabled)
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = start_dir.to_path_buf();

	// Walk up the directory tree
	loop {
		let config_path = current_dir.join(CONFIG_FILE_NAME);

		if config_path.exists() {
			let config = parse_config_file(&config_path)?;
			debug!(
				path = %config_path.display(),
				filters = config.filters.len(),
				root = config.root,
				"loaded config"
			);

			// A root config ends the walk
			let is_root = config.root;
			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		// Move to parent directory
		match current_dir.parent() {
			Some(parent) => current_dir = parent.to_path_buf(),
			None => break,
		}
	}

	// Check user config unless disabled by env var
	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.nsmatch.toml if it exists and isn't disabled.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	// Check if any config disables user config lookup via env var
	for loaded in existing_configs {
		if let Some(ref env_var) = loaded.config.root_config_lookup_disable_env_var
			&& is_env_truthy(env_var)
		{
			debug!(env_var = %env_var, "user config lookup disabled");
			return Ok(None);
		}
	}

	let user_config_path = user_config_path()?;

	// The walk up from a directory under $HOME may already have loaded it.
	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.exists() {
		let config = parse_config_file(&user_config_path)?;
		debug!(path = %user_config_path.display(), "loaded user config");
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge multiple configs into a single effective config.
///
/// Filters are collected in cascade order (first match wins), each with
/// expansion options resolved against its own file's defaults. The default
/// action comes from the most specific config that sets one.
pub fn merge_configs(configs: &[LoadedConfig]) -> MergedConfig {
	let mut merged = MergedConfig::default();
	let mut default_action = None;

	for loaded in configs {
		let file_options = loaded.config.match_options();

		// Collect filters with their source and resolved options
		for filter in &loaded.config.filters {
			merged.filters.push(FilterWithSource {
				filter: filter.clone(),
				options: filter.options(file_options),
				source: loaded.path.clone(),
			});
		}

		if default_action.is_none() {
			default_action = loaded.config.default;
		}
	}

	merged.default_action = default_action.unwrap_or_default();
	merged
}

/// Convenience function to discover, load, and merge configs from a directory.
pub fn load_merged_config(start_dir: &Path) -> Result<MergedConfig> {
	let configs = discover_configs(start_dir)?;
	Ok(merge_configs(&configs))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(NsMatchError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
