use crate::exec::DEFAULT_USAGE_TAG;
use crate::rules::RuleDeclaration;
use crate::rulesets::ExtraRuleSet;
use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.autocorrect.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop directory cascade and jump directly to ~/.autocorrect.toml.
	#[serde(default)]
	pub root: bool,

	/// If true, use this file alone.
	#[serde(default)]
	pub no_external_lookup: bool,

	/// Environment variable name that, if truthy, skips ~/.autocorrect.toml lookup.
	#[serde(default)]
	pub root_config_lookup_disable_env_var: Option<String>,

	/// Content language code, e.g. `pl`. Selects the quotation mark rules.
	pub language: Option<String>,

	/// Wiki database name, e.g. `plwiki`. Selects project-specific shortcuts.
	pub wiki: Option<String>,

	/// Change tag applied to edits that used autocorrection.
	pub usage_tag: Option<String>,

	/// Extra rule sets registered once the extension point is ready.
	#[serde(default)]
	pub extras: Vec<ExtraRuleSet>,

	/// Custom replacement rules, registered after the built-in ones.
	#[serde(default)]
	pub rules: Vec<RuleDeclaration>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// First language found in the cascade.
	pub language: Option<String>,

	/// First wiki found in the cascade.
	pub wiki: Option<String>,

	/// First usage tag found in the cascade.
	pub usage_tag: Option<String>,

	/// Union of all extras, in first-seen order.
	pub extras: Vec<ExtraRuleSet>,

	/// All custom rules, in cascade order (earlier rules take precedence).
	pub rules: Vec<RuleWithSource>,

	/// Whether external lookup is disabled (from any config in cascade).
	pub no_external_lookup: bool,

	/// Files that contributed, most specific first.
	pub sources: Vec<PathBuf>,
}

/// A rule with its source config path for debugging/display.
#[derive(Debug, Clone)]
pub struct RuleWithSource {
	pub rule: RuleDeclaration,

	/// The config file this rule came from.
	pub source: PathBuf,
}

impl MergedConfig {
	/// Usage tag to apply, falling back to the default.
	pub fn usage_tag(&self) -> &str {
		self.usage_tag.as_deref().unwrap_or(DEFAULT_USAGE_TAG)
	}

	/// Describe every custom rule that would be rejected at registration.
	///
	/// Malformed rules never abort loading; this is for `config validate`.
	pub fn validate_rules(&self) -> Vec<String> {
		self.rules
			.iter()
			.enumerate()
			.filter_map(|(index, with_source)| {
				with_source.rule.clone().normalize().err().map(|err| {
					format!(
						"{}: rule #{}: {}",
						with_source.source.display(),
						index + 1,
						err
					)
				})
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rules::PatternSpec;

	fn with_source(rule: RuleDeclaration) -> RuleWithSource {
		RuleWithSource {
			rule,
			source: PathBuf::from("/tmp/.autocorrect.toml"),
		}
	}

	#[test]
	fn test_usage_tag_default() {
		let merged = MergedConfig::default();
		assert_eq!(merged.usage_tag(), "ve-autocorrect");

		let merged = MergedConfig {
			usage_tag: Some("custom-tag".to_string()),
			..Default::default()
		};
		assert_eq!(merged.usage_tag(), "custom-tag");
	}

	#[test]
	fn test_validate_rules_reports_each_problem() {
		let merged = MergedConfig {
			rules: vec![
				with_source(RuleDeclaration::from_to("(tm)", "™")),
				with_source(RuleDeclaration {
					from: Some(PatternSpec::literal("x")),
					start: Some("y".to_string()),
					to: Some("z".into()),
				}),
				with_source(RuleDeclaration::regex("no group$", "!")),
			],
			..Default::default()
		};

		let problems = merged.validate_rules();
		assert_eq!(problems.len(), 2);
		assert!(problems[0].contains("rule #2"));
		assert!(problems[1].contains("rule #3"));
		assert!(problems[1].contains("no group$"));
	}
}
