use crate::content::{Helpers, TemplateDescriptor};
use crate::rules::RuleDeclaration;
use chrono::NaiveDate;

/// Typographic replacements for every language and wiki.
pub fn common() -> Vec<RuleDeclaration> {
	vec![
		RuleDeclaration::from_to("--", "–"),
		RuleDeclaration::from_to("–-", "—"),
		RuleDeclaration::from_to("...", "…"),
		RuleDeclaration::from_to("<<", "«"),
		RuleDeclaration::from_to(">>", "»"),
		RuleDeclaration::from_to("->", "→"),
		RuleDeclaration::regex(r"(?:^|[^\d])(1/2 )$", "½ "),
		RuleDeclaration::regex(r"(?:^|[^\d])(1/4 )$", "¼ "),
		RuleDeclaration::regex(r"(?:^|[^\d])(3/4 )$", "¾ "),
		RuleDeclaration::from_to("+-", "±"),
	]
}

/// Quotation marks for the content language.
///
/// An opening mark follows the start of the text, `(`, a space or a newline;
/// a closing mark follows anything else except digits. Languages without
/// rules (English among them) get none.
pub fn quotes(language: &str) -> Vec<RuleDeclaration> {
	let (open, close) = match language {
		"de" => ("„", "“"),
		"pl" => ("„", "”"),
		_ => return Vec::new(),
	};
	vec![
		RuleDeclaration::regex(r#"(?:^|[( \n])(")$"#, open),
		RuleDeclaration::regex(r#"[^\d( \n](")$"#, close),
	]
}

/// Project-specific shortcuts, keyed by wiki database name.
pub fn wiki_specific(wiki: &str, today: NaiveDate) -> Vec<RuleDeclaration> {
	match wiki {
		// heading, then the cursor in the paragraph below it
		"dewiki" => vec![RuleDeclaration::from_to(
			Helpers.paragraph_open("=w"),
			Helpers.h2("Weblinks", true).chain(Helpers.paragraph_open("")),
		)],
		"plwiki" => {
			let fact = TemplateDescriptor::new("Szablon:Fakt", "fakt")
				.with_param("data", today.format("%Y-%m").to_string());
			vec![RuleDeclaration::from_to("{fd", Helpers.tpl(fact, false))]
		}
		_ => Vec::new(),
	}
}

/// All built-in declarations for a language/wiki pair, in registration order.
pub fn declarations(
	language: Option<&str>,
	wiki: Option<&str>,
	today: NaiveDate,
) -> Vec<RuleDeclaration> {
	let mut rules = common();
	if let Some(language) = language {
		rules.extend(quotes(language));
	}
	if let Some(wiki) = wiki {
		rules.extend(wiki_specific(wiki, today));
	}
	rules
}
