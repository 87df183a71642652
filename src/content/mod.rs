//! Structured rich-text content.
//!
//! Editor content is a linear stream of [`ContentToken`]s: single characters
//! interleaved with opening and closing element markers. A [`ContentFragment`]
//! is an immutable run of such tokens, used both as the replacement inserted
//! by a rule and as the token tail a structured pattern has to match.

pub mod builders;

pub use builders::{Helpers, ListItemContent};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// Bullet or numbered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
	#[default]
	Bullet,
	Number,
}

impl ListStyle {
	/// Wikitext line prefix for items of this list.
	pub fn marker(self) -> char {
		match self {
			ListStyle::Bullet => '*',
			ListStyle::Number => '#',
		}
	}
}

/// Page a transclusion points at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TemplateTarget {
	/// Full page name, e.g. `Szablon:Fakt`.
	pub href: String,

	/// Name as written in wikitext, e.g. `fakt`.
	pub wt: String,
}

/// One template call: target plus named parameters (wikitext values).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct TemplateDescriptor {
	pub target: TemplateTarget,

	#[serde(default)]
	pub params: BTreeMap<String, String>,
}

impl TemplateDescriptor {
	pub fn new(href: impl Into<String>, wt: impl Into<String>) -> Self {
		TemplateDescriptor {
			target: TemplateTarget {
				href: href.into(),
				wt: wt.into(),
			},
			params: BTreeMap::new(),
		}
	}

	pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(name.into(), value.into());
		self
	}

	/// Wikitext form of the call, `{{name|param=value}}`.
	pub fn to_wikitext(&self) -> String {
		let mut out = format!("{{{{{}", self.target.wt);
		for (name, value) in &self.params {
			out.push('|');
			out.push_str(name);
			out.push('=');
			out.push_str(value);
		}
		out.push_str("}}");
		out
	}
}

/// An element opened by a [`ContentToken::Open`] marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
	Paragraph,
	Heading { level: u8 },
	List { style: ListStyle },
	ListItem,
	/// Citation list placeholder, rendered by the host as `<references />`.
	ReferencesList { group: String },
	Transclusion {
		block: bool,
		template: TemplateDescriptor,
	},
}

impl Element {
	pub fn kind(&self) -> ElementKind {
		match self {
			Element::Paragraph => ElementKind::Paragraph,
			Element::Heading { .. } => ElementKind::Heading,
			Element::List { .. } => ElementKind::List,
			Element::ListItem => ElementKind::ListItem,
			Element::ReferencesList { .. } => ElementKind::ReferencesList,
			Element::Transclusion { block: false, .. } => ElementKind::InlineTransclusion,
			Element::Transclusion { block: true, .. } => ElementKind::BlockTransclusion,
		}
	}
}

/// Element type without attributes; carried by closing markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
	Paragraph,
	Heading,
	List,
	ListItem,
	ReferencesList,
	InlineTransclusion,
	BlockTransclusion,
}

impl ElementKind {
	/// Editor data-model type name.
	pub fn type_name(self) -> &'static str {
		match self {
			ElementKind::Paragraph => "paragraph",
			ElementKind::Heading => "heading",
			ElementKind::List => "list",
			ElementKind::ListItem => "listItem",
			ElementKind::ReferencesList => "mwReferencesList",
			ElementKind::InlineTransclusion => "mwTransclusionInline",
			ElementKind::BlockTransclusion => "mwTransclusionBlock",
		}
	}
}

/// Atomic unit of editor content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentToken {
	Char(char),
	Open(Element),
	Close(ElementKind),
}

impl ContentToken {
	pub fn as_char(&self) -> Option<char> {
		match self {
			ContentToken::Char(c) => Some(*c),
			_ => None,
		}
	}
}

impl fmt::Display for ContentToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ContentToken::Char(c) => write!(f, "{c}"),
			ContentToken::Open(Element::Heading { level }) => write!(f, "<heading{level}>"),
			ContentToken::Open(element @ Element::Transclusion { template, .. }) => write!(
				f,
				"<{} {}>",
				element.kind().type_name(),
				template.to_wikitext()
			),
			ContentToken::Open(element) => write!(f, "<{}>", element.kind().type_name()),
			ContentToken::Close(kind) => write!(f, "</{}>", kind.type_name()),
		}
	}
}

/// Immutable sequence of content tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawContent")]
pub struct ContentFragment(Vec<ContentToken>);

impl ContentFragment {
	pub fn new() -> Self {
		ContentFragment(Vec::new())
	}

	/// One `Char` token per character of `text`.
	pub fn text(text: &str) -> Self {
		text.chars().map(ContentToken::Char).collect()
	}

	pub fn tokens(&self) -> &[ContentToken] {
		&self.0
	}

	pub fn into_tokens(self) -> Vec<ContentToken> {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// This fragment followed by `other`.
	pub fn chain(self, other: impl Into<ContentFragment>) -> Self {
		let mut tokens = self.0;
		tokens.extend(other.into().0);
		ContentFragment(tokens)
	}

	/// Flatten a list of fragments into one.
	pub fn concat<I>(parts: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<ContentFragment>,
	{
		parts
			.into_iter()
			.flat_map(|part| part.into().0)
			.collect()
	}
}

impl From<&str> for ContentFragment {
	fn from(text: &str) -> Self {
		ContentFragment::text(text)
	}
}

impl From<String> for ContentFragment {
	fn from(text: String) -> Self {
		ContentFragment::text(&text)
	}
}

impl From<&ContentFragment> for ContentFragment {
	fn from(fragment: &ContentFragment) -> Self {
		fragment.clone()
	}
}

impl From<Vec<ContentToken>> for ContentFragment {
	fn from(tokens: Vec<ContentToken>) -> Self {
		ContentFragment(tokens)
	}
}

impl FromIterator<ContentToken> for ContentFragment {
	fn from_iter<T: IntoIterator<Item = ContentToken>>(iter: T) -> Self {
		ContentFragment(iter.into_iter().collect())
	}
}

impl fmt::Display for ContentFragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for token in &self.0 {
			write!(f, "{token}")?;
		}
		Ok(())
	}
}

/// Serialized content: a plain string, or an array mixing strings and
/// `{ type = "..." }` markers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawContent {
	Text(String),
	Tokens(Vec<RawToken>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawToken {
	Text(String),
	Marker(Marker),
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Marker {
	#[serde(rename = "paragraph")]
	Paragraph,
	#[serde(rename = "/paragraph")]
	ParagraphEnd,
	#[serde(rename = "heading")]
	Heading {
		#[serde(default = "default_heading_level")]
		level: u8,
	},
	#[serde(rename = "/heading")]
	HeadingEnd,
	#[serde(rename = "list")]
	List {
		#[serde(default)]
		style: ListStyle,
	},
	#[serde(rename = "/list")]
	ListEnd,
	#[serde(rename = "listItem")]
	ListItem,
	#[serde(rename = "/listItem")]
	ListItemEnd,
	#[serde(rename = "mwReferencesList")]
	ReferencesList {
		#[serde(default)]
		group: String,
	},
	#[serde(rename = "/mwReferencesList")]
	ReferencesListEnd,
	#[serde(rename = "mwTransclusionInline")]
	InlineTransclusion { template: TemplateDescriptor },
	#[serde(rename = "/mwTransclusionInline")]
	InlineTransclusionEnd,
	#[serde(rename = "mwTransclusionBlock")]
	BlockTransclusion { template: TemplateDescriptor },
	#[serde(rename = "/mwTransclusionBlock")]
	BlockTransclusionEnd,
}

fn default_heading_level() -> u8 {
	2
}

impl From<Marker> for ContentToken {
	fn from(marker: Marker) -> Self {
		match marker {
			Marker::Paragraph => ContentToken::Open(Element::Paragraph),
			Marker::ParagraphEnd => ContentToken::Close(ElementKind::Paragraph),
			Marker::Heading { level } => ContentToken::Open(Element::Heading { level }),
			Marker::HeadingEnd => ContentToken::Close(ElementKind::Heading),
			Marker::List { style } => ContentToken::Open(Element::List { style }),
			Marker::ListEnd => ContentToken::Close(ElementKind::List),
			Marker::ListItem => ContentToken::Open(Element::ListItem),
			Marker::ListItemEnd => ContentToken::Close(ElementKind::ListItem),
			Marker::ReferencesList { group } => ContentToken::Open(Element::ReferencesList { group }),
			Marker::ReferencesListEnd => ContentToken::Close(ElementKind::ReferencesList),
			Marker::InlineTransclusion { template } => ContentToken::Open(Element::Transclusion {
				block: false,
				template,
			}),
			Marker::InlineTransclusionEnd => ContentToken::Close(ElementKind::InlineTransclusion),
			Marker::BlockTransclusion { template } => ContentToken::Open(Element::Transclusion {
				block: true,
				template,
			}),
			Marker::BlockTransclusionEnd => ContentToken::Close(ElementKind::BlockTransclusion),
		}
	}
}

impl From<RawContent> for ContentFragment {
	fn from(raw: RawContent) -> Self {
		match raw {
			RawContent::Text(text) => ContentFragment::text(&text),
			RawContent::Tokens(tokens) => tokens
				.into_iter()
				.flat_map(|token| match token {
					RawToken::Text(text) => text.chars().map(ContentToken::Char).collect::<Vec<_>>(),
					RawToken::Marker(marker) => vec![marker.into()],
				})
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[derive(Deserialize)]
	struct Wrapper {
		to: ContentFragment,
	}

	#[test]
	fn test_text_fragment_is_one_token_per_char() {
		let fragment = ContentFragment::from("½ ");
		assert_eq!(
			fragment.tokens(),
			&[ContentToken::Char('½'), ContentToken::Char(' ')]
		);
	}

	#[test]
	fn test_chain_and_concat() {
		let a = ContentFragment::from("a");
		let joined = a.clone().chain("b");
		assert_eq!(joined, ContentFragment::from("ab"));

		let flat = ContentFragment::concat([a, ContentFragment::from("bc")]);
		assert_eq!(flat.len(), 3);
	}

	#[test]
	fn test_deserialize_plain_string() {
		let parsed: Wrapper = toml::from_str(r#"to = "…""#).unwrap();
		assert_eq!(parsed.to, ContentFragment::from("…"));
	}

	#[test]
	fn test_deserialize_token_array() {
		let parsed: Wrapper = toml::from_str(
			r#"
to = [
    { type = "heading", level = 2 },
    "Weblinks",
    { type = "/heading" },
    { type = "paragraph" },
]
"#,
		)
		.unwrap();

		let tokens = parsed.to.tokens();
		assert_eq!(tokens.len(), 11);
		assert_eq!(tokens[0], ContentToken::Open(Element::Heading { level: 2 }));
		assert_eq!(tokens[1], ContentToken::Char('W'));
		assert_eq!(tokens[9], ContentToken::Close(ElementKind::Heading));
		assert_eq!(tokens[10], ContentToken::Open(Element::Paragraph));
	}

	#[test]
	fn test_deserialize_transclusion_marker() {
		let parsed: Wrapper = toml::from_str(
			r#"
to = [
    { type = "mwTransclusionInline", template = { target = { href = "Szablon:Fakt", wt = "fakt" }, params = { data = "2024-05" } } },
    { type = "/mwTransclusionInline" },
]
"#,
		)
		.unwrap();

		match &parsed.to.tokens()[0] {
			ContentToken::Open(Element::Transclusion { block, template }) => {
				assert!(!block);
				assert_eq!(template.to_wikitext(), "{{fakt|data=2024-05}}");
			}
			other => panic!("Expected transclusion, got {other:?}"),
		}
	}

	#[test]
	fn test_display_fragment() {
		let fragment = ContentFragment::from(vec![
			ContentToken::Open(Element::Paragraph),
			ContentToken::Char('='),
			ContentToken::Char('p'),
		]);
		assert_eq!(fragment.to_string(), "<paragraph>=p");
	}
}
