//! Rule sets shipped with the crate and their installation order.

pub mod builtin;
pub mod pl;

use crate::config::MergedConfig;
use crate::error::AutocorrectError;
use crate::extension::MatcherContext;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Optional rule set enabled through `extras` or `--extras`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraRuleSet {
	/// Polish Wikipedia section shortcuts.
	Pl,
}

impl ExtraRuleSet {
	pub fn install(self, ctx: &mut MatcherContext) {
		match self {
			ExtraRuleSet::Pl => pl::install(ctx),
		}
	}
}

impl FromStr for ExtraRuleSet {
	type Err = AutocorrectError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pl" => Ok(ExtraRuleSet::Pl),
			_ => Err(AutocorrectError::UnknownRuleSet {
				name: s.to_string(),
			}),
		}
	}
}

impl fmt::Display for ExtraRuleSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExtraRuleSet::Pl => f.write_str("pl"),
		}
	}
}

/// Queue every rule the configuration asks for.
///
/// Built-in rules come first, then custom rules in cascade order. Extra rule
/// sets wait for the ready signal, so they land after everything queued here.
pub fn install(ctx: &mut MatcherContext, config: &MergedConfig, today: NaiveDate) {
	let builtins =
		builtin::declarations(config.language.as_deref(), config.wiki.as_deref(), today);
	for declaration in builtins {
		ctx.add_replacement(declaration);
	}

	for with_source in &config.rules {
		tracing::debug!(source = %with_source.source.display(), "queueing custom rule");
		ctx.add_replacement(with_source.rule.clone());
	}

	for extra in &config.extras {
		extra.install(ctx);
	}
}
