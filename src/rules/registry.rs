use crate::content::{ContentFragment, ContentToken};
use crate::exec::ReplaceCommand;
use crate::rules::declaration::NormalizedRule;
use crate::rules::pattern::{Pattern, Sequence};
use crate::surface::plaintext_before;
use std::ops::Range;

/// Prefix of the generated rule names.
const RULE_NAME_PREFIX: &str = "autocorrect";

/// A registered rule: a sequence and the command it triggers, sharing one name.
#[derive(Debug, Clone)]
pub struct Rule {
	name: String,
	sequence: Pattern,
	command: ReplaceCommand,
}

impl Rule {
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn pattern(&self) -> &Pattern {
		&self.sequence
	}

	pub fn command(&self) -> &ReplaceCommand {
		&self.command
	}

	pub fn replacement(&self) -> &ContentFragment {
		self.command.content()
	}
}

/// Append-only table of rules, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
	rules: Vec<Rule>,
	next_id: usize,
}

impl Registry {
	pub fn new() -> Self {
		Registry::default()
	}

	/// Register a rule under a fresh unique name.
	pub fn register(&mut self, rule: NormalizedRule) -> &Rule {
		let name = format!("{RULE_NAME_PREFIX}-{}", self.next_id);
		self.next_id += 1;

		tracing::debug!(rule = %name, pattern = %rule.pattern, "registered replacement");
		self.rules.push(Rule {
			command: ReplaceCommand::new(name.clone(), rule.replacement),
			sequence: rule.pattern,
			name,
		});
		&self.rules[self.rules.len() - 1]
	}

	pub fn rules(&self) -> &[Rule] {
		&self.rules
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}

	/// Find the first rule whose sequence ends at `offset`, with the span it covers.
	pub fn find_matching_rule(
		&self,
		data: &[ContentToken],
		offset: usize,
	) -> Option<(&Rule, Range<usize>)> {
		let plaintext = plaintext_before(data, offset);
		self.rules.iter().find_map(|rule| {
			rule.sequence
				.matches(data, offset, &plaintext)
				.map(|span| (rule, span))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::Helpers;
	use crate::rules::declaration::RuleDeclaration;
	use std::collections::HashSet;

	fn registry_with(decls: Vec<RuleDeclaration>) -> Registry {
		let mut registry = Registry::new();
		for decl in decls {
			registry.register(decl.normalize().unwrap());
		}
		registry
	}

	#[test]
	fn test_names_are_unique() {
		let registry = registry_with(vec![
			RuleDeclaration::from_to("--", "–"),
			RuleDeclaration::from_to("--", "—"),
			RuleDeclaration::from_to("...", "…"),
		]);

		let names: HashSet<_> = registry.rules().iter().map(Rule::name).collect();
		assert_eq!(names.len(), 3);
		assert_eq!(registry.rules()[0].name(), "autocorrect-0");
	}

	#[test]
	fn test_find_matching_rule_first_wins() {
		let registry = registry_with(vec![
			RuleDeclaration::from_to("--", "–"),
			RuleDeclaration::from_to("-", "x"),
		]);
		let data = Helpers.paragraph_open("a--").into_tokens();

		let (rule, span) = registry.find_matching_rule(&data, data.len()).unwrap();
		assert_eq!(rule.name(), "autocorrect-0");
		assert_eq!(span, 2..4);
	}

	#[test]
	fn test_find_matching_rule_later_rule_when_earlier_misses() {
		let registry = registry_with(vec![
			RuleDeclaration::from_to("...", "…"),
			RuleDeclaration::regex(r"(?:^|[^\d])(1/4 )$", "¼ "),
		]);
		let data = Helpers.paragraph_open("x1/4 ").into_tokens();

		let (rule, span) = registry.find_matching_rule(&data, data.len()).unwrap();
		assert_eq!(rule.replacement(), &ContentFragment::from("¼ "));
		assert_eq!(span, 2..6);
	}

	#[test]
	fn test_find_matching_rule_none() {
		let registry = registry_with(vec![RuleDeclaration::from_to("--", "–")]);
		let data = Helpers.paragraph_open("a-b").into_tokens();
		assert!(registry.find_matching_rule(&data, data.len()).is_none());
	}
}
