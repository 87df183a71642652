use crate::config::types::Config;
use crate::error::{AutocorrectError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content =
		std::fs::read_to_string(path).map_err(|source| AutocorrectError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
///
/// Rule declarations are only checked for shape here. A rule that fails to
/// normalize is reported when it is registered, without rejecting the file.
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| AutocorrectError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	tracing::debug!(
		path = %path.display(),
		rules = config.rules.len(),
		"parsed config"
	);

	Ok(config)
}
