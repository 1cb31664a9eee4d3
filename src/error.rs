use std::path::PathBuf;

/// Library-level structured errors for nsmatch.
///
/// Matching itself is total and never fails; these come from loading
/// configuration and compiling patterns. The CLI binary wraps them with
/// `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum NsMatchError {
	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid filter #{index} in {path}: {reason}")]
	InvalidFilter {
		path: PathBuf,
		index: usize,
		reason: String,
	},

	#[error("Failed to compile pattern component: {pattern}")]
	InvalidPattern {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using NsMatchError.
pub type Result<T> = std::result::Result<T, NsMatchError>;
