use std::path::PathBuf;

/// Library-level structured errors for autocorrect.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum AutocorrectError {
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

	#[error("Invalid regex pattern in rule: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Regex pattern has no capture group to replace: {pattern}")]
	MissingCaptureGroup { pattern: String },

	#[error("Malformed replacement rule: {reason}")]
	MalformedDeclaration { reason: &'static str },

	#[error("Mutually exclusive options: {option1} and {option2}")]
	MutuallyExclusive { option1: String, option2: String },

	#[error("Unknown rule set: {name}")]
	UnknownRuleSet { name: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using AutocorrectError.
pub type Result<T> = std::result::Result<T, AutocorrectError>;
