use crate::content::{ContentFragment, Helpers};
use crate::error::{AutocorrectError, Result};
use crate::rules::pattern::{Pattern, PatternSpec};
use serde::Deserialize;

/// A replacement rule as declared by a rule set or a config file.
///
/// Exactly one of `from` and `start` has to be given, plus `to`.
/// `start = "=p"` is shorthand for "a paragraph beginning with `=p`".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDeclaration {
	#[serde(default)]
	pub from: Option<PatternSpec>,

	#[serde(default)]
	pub start: Option<String>,

	#[serde(default)]
	pub to: Option<ContentFragment>,
}

/// A declaration reduced to a compiled pattern and its replacement.
#[derive(Debug, Clone)]
pub struct NormalizedRule {
	pub pattern: Pattern,
	pub replacement: ContentFragment,
}

impl RuleDeclaration {
	/// `from` → `to` with any pattern form.
	pub fn from_to(from: impl Into<PatternSpec>, to: impl Into<ContentFragment>) -> Self {
		RuleDeclaration {
			from: Some(from.into()),
			start: None,
			to: Some(to.into()),
		}
	}

	/// Regex `from` whose first capture group is replaced by `to`.
	pub fn regex(pattern: &str, to: impl Into<ContentFragment>) -> Self {
		RuleDeclaration::from_to(PatternSpec::regex(pattern), to)
	}

	/// Paragraph starting with `start` → `to`.
	pub fn start(start: impl Into<String>, to: impl Into<ContentFragment>) -> Self {
		RuleDeclaration {
			from: None,
			start: Some(start.into()),
			to: Some(to.into()),
		}
	}

	/// Validate the declaration and compile its pattern.
	pub fn normalize(self) -> Result<NormalizedRule> {
		let replacement = self.to.ok_or(AutocorrectError::MalformedDeclaration {
			reason: "missing `to`",
		})?;

		let spec = match (self.from, self.start) {
			(Some(_), Some(_)) => {
				return Err(AutocorrectError::MutuallyExclusive {
					option1: "from".to_string(),
					option2: "start".to_string(),
				});
			}
			(None, None) => {
				return Err(AutocorrectError::MalformedDeclaration {
					reason: "neither `from` nor `start` given",
				});
			}
			(Some(from), None) => from,
			(None, Some(start)) => PatternSpec::Content(Helpers.paragraph_open(&start)),
		};

		Ok(NormalizedRule {
			pattern: Pattern::compile(spec)?,
			replacement,
		})
	}
}
