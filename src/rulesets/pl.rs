//! Section shortcuts for Polish Wikipedia.
//!
//! Typed at the start of an empty paragraph, `=p`, `=u` and friends turn into
//! the standard closing sections of an article.

use crate::content::{ContentFragment, Helpers, TemplateDescriptor};
use crate::extension::MatcherContext;
use crate::rules::RuleDeclaration;

/// Register the Polish rules once the extension point is ready.
pub fn install(ctx: &mut MatcherContext) {
	ctx.on_ready(add_rules);
}

fn add_rules(nac: &mut MatcherContext, helpers: &Helpers) {
	nac.add(RuleDeclaration::from_to("(c)", "©"));

	let refs_list = helpers.refs_list("");
	let notes_list = helpers.tpl(TemplateDescriptor::new("Szablon:Uwagi", "Uwagi"), true);
	let blank_list = helpers.blank_list();
	let section = |title: &str, body: &ContentFragment| helpers.h2(title, true).chain(body);

	nac.add(RuleDeclaration::start("=zob", section("Zobacz też", &blank_list)));
	nac.add(RuleDeclaration::start("=zt", section("Zobacz też", &blank_list)));
	nac.add(RuleDeclaration::start("=u", section("Uwagi", &notes_list)));
	nac.add(RuleDeclaration::start("=p", section("Przypisy", &refs_list)));
	nac.add(RuleDeclaration::start("=b", section("Bibliografia", &blank_list)));
	nac.add(RuleDeclaration::start("=lz", section("Linki zewnętrzne", &blank_list)));
	nac.add(RuleDeclaration::start("=lnk", section("Linki zewnętrzne", &blank_list)));

	nac.add(RuleDeclaration::from_to("{p", refs_list.clone()));

	nac.add(RuleDeclaration::start(
		"=z+",
		ContentFragment::concat([
			section("Zobacz też", &blank_list),
			section("Uwagi", &notes_list),
			section("Przypisy", &refs_list),
			section("Bibliografia", &blank_list),
			section("Linki zewnętrzne", &blank_list),
		]),
	));
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rulesets::builtin;
	use crate::surface::Document;
	use chrono::NaiveDate;
	use pretty_assertions::assert_eq;

	fn polish_context() -> MatcherContext {
		let mut ctx = MatcherContext::default();
		let today = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap();
		for decl in builtin::declarations(Some("pl"), Some("plwiki"), today) {
			ctx.add_replacement(decl);
		}
		install(&mut ctx);
		ctx.activate();
		assert_eq!(ctx.rejected_len(), 0);
		ctx
	}

	fn typed(ctx: &mut MatcherContext, text: &str) -> String {
		let mut doc = Document::new();
		ctx.type_text(&mut doc, text);
		doc.render()
	}

	#[test]
	fn test_rules_wait_for_activation() {
		let mut ctx = MatcherContext::default();
		install(&mut ctx);
		assert!(ctx.registry().is_empty());

		ctx.activate();
		assert_eq!(ctx.registry().len(), 10);
	}

	#[test]
	fn test_przypisy_section() {
		let mut ctx = polish_context();
		assert_eq!(typed(&mut ctx, "=p"), "== Przypisy ==\n<references />\n");
	}

	#[test]
	fn test_uwagi_section() {
		let mut ctx = polish_context();
		assert_eq!(typed(&mut ctx, "=u"), "== Uwagi ==\n{{Uwagi}}\n");
	}

	#[test]
	fn test_zobacz_tez_with_blank_list() {
		let mut ctx = polish_context();
		assert_eq!(typed(&mut ctx, "=zt"), "== Zobacz też ==\n*\n");
	}

	#[test]
	fn test_linki_zewnetrzne_aliases() {
		let mut ctx = polish_context();
		let expected = "== Linki zewnętrzne ==\n*\n";
		assert_eq!(typed(&mut ctx, "=lz"), expected);
		assert_eq!(typed(&mut ctx, "=lnk"), expected);
	}

	#[test]
	fn test_all_sections_combo() {
		let mut ctx = polish_context();
		assert_eq!(
			typed(&mut ctx, "=z+"),
			[
				"== Zobacz też ==",
				"*",
				"== Uwagi ==",
				"{{Uwagi}}",
				"== Przypisy ==",
				"<references />",
				"== Bibliografia ==",
				"*",
				"== Linki zewnętrzne ==",
				"*",
				"",
			]
			.join("\n")
		);
	}

	#[test]
	fn test_copyright_and_inline_refs() {
		let mut ctx = polish_context();
		assert_eq!(typed(&mut ctx, "(c) 2024"), "© 2024");
		assert_eq!(typed(&mut ctx, "Tekst{p"), "Tekst\n<references />\n");
	}

	#[test]
	fn test_shortcut_only_at_paragraph_start() {
		let mut ctx = polish_context();
		assert_eq!(typed(&mut ctx, "a=p"), "a=p");
	}
}
