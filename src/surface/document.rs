use super::Surface;
use crate::content::{ContentFragment, ContentToken, Element, ElementKind};
use std::ops::Range;

/// In-memory editing surface: linear token data, a selection and the change
/// tags collected for the pending edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	data: Vec<ContentToken>,
	selection: Range<usize>,
	change_tags: Vec<String>,
}

impl Default for Document {
	fn default() -> Self {
		Document::new()
	}
}

impl Document {
	/// One empty paragraph with the cursor inside it.
	pub fn new() -> Self {
		Document {
			data: vec![
				ContentToken::Open(Element::Paragraph),
				ContentToken::Close(ElementKind::Paragraph),
			],
			selection: 1..1,
			change_tags: Vec::new(),
		}
	}

	/// Cursor position (end of the selection).
	pub fn cursor(&self) -> usize {
		self.selection.end
	}

	pub fn change_tags(&self) -> &[String] {
		&self.change_tags
	}

	/// Type one character at the cursor, replacing any selection.
	pub fn insert_char(&mut self, c: char) {
		let start = self.selection.start.min(self.data.len());
		let end = self.selection.end.clamp(start, self.data.len());
		self.data.splice(start..end, [ContentToken::Char(c)]);
		self.selection = start + 1..start + 1;
	}

	/// Split the innermost element at the cursor into two.
	pub fn press_enter(&mut self) {
		let cursor = self.cursor().min(self.data.len());
		let Some(element) = innermost_open(&self.data[..cursor]) else {
			return;
		};
		let kind = element.kind();
		self.data.splice(
			cursor..cursor,
			[ContentToken::Close(kind), ContentToken::Open(element)],
		);
		self.selection = cursor + 2..cursor + 2;
	}

	/// Text of the whole document, one block per line, in wikitext notation.
	pub fn render(&self) -> String {
		render_wikitext(&self.data)
	}
}

impl Surface for Document {
	fn data(&self) -> &[ContentToken] {
		&self.data
	}

	fn selection(&self) -> Range<usize> {
		self.selection.clone()
	}

	fn select(&mut self, range: Range<usize>) {
		let end = range.end.min(self.data.len());
		let start = range.start.min(end);
		self.selection = start..end;
	}

	fn insert_content(&mut self, content: &ContentFragment) -> Range<usize> {
		let Range { start, end } = self.selection.clone();
		let removed: Vec<ContentToken> = self.data.drain(start..end).collect();
		let (unopened_closes, unclosed_opens) = unbalanced(&removed);
		let (supplied_closes, supplied_opens) = unbalanced(content.tokens());

		// Markers whose partner lies outside the selection survive the
		// replacement, unless the content brings its own of the same kind.
		let inserted: Vec<ContentToken> = unsupplied(unopened_closes, &supplied_closes)
			.into_iter()
			.chain(content.tokens().iter().cloned())
			.chain(unsupplied(unclosed_opens, &supplied_opens))
			.collect();
		let len = inserted.len();
		self.data.splice(start..start, inserted);

		self.selection = start..start + len;
		self.selection.clone()
	}

	fn add_change_tag(&mut self, tag: &str) {
		if !self.change_tags.iter().any(|t| t == tag) {
			self.change_tags.push(tag.to_string());
		}
	}
}

/// Nearest element opened before the end of `data` and not yet closed.
fn innermost_open(data: &[ContentToken]) -> Option<Element> {
	let mut depth = 0usize;
	for token in data.iter().rev() {
		match token {
			ContentToken::Close(_) => depth += 1,
			ContentToken::Open(element) if depth == 0 => return Some(element.clone()),
			ContentToken::Open(_) => depth -= 1,
			ContentToken::Char(_) => {}
		}
	}
	None
}

/// Split markers in `tokens` into closes without an open and opens without a close.
fn unbalanced(tokens: &[ContentToken]) -> (Vec<ContentToken>, Vec<ContentToken>) {
	let mut closes = Vec::new();
	let mut opens: Vec<ContentToken> = Vec::new();
	for token in tokens {
		match token {
			ContentToken::Open(_) => opens.push(token.clone()),
			ContentToken::Close(kind) => match opens.last() {
				Some(ContentToken::Open(element)) if element.kind() == *kind => {
					opens.pop();
				}
				_ => closes.push(token.clone()),
			},
			ContentToken::Char(_) => {}
		}
	}
	(closes, opens)
}

/// Drop each marker in `removed` that `supplied` replaces, pairing by element kind.
fn unsupplied(removed: Vec<ContentToken>, supplied: &[ContentToken]) -> Vec<ContentToken> {
	let mut supplied: Vec<ElementKind> = supplied.iter().filter_map(marker_kind).collect();
	removed
		.into_iter()
		.filter(|token| {
			let Some(kind) = marker_kind(token) else {
				return true;
			};
			match supplied.iter().position(|k| *k == kind) {
				Some(i) => {
					supplied.remove(i);
					false
				}
				None => true,
			}
		})
		.collect()
}

fn marker_kind(token: &ContentToken) -> Option<ElementKind> {
	match token {
		ContentToken::Open(element) => Some(element.kind()),
		ContentToken::Close(kind) => Some(*kind),
		ContentToken::Char(_) => None,
	}
}

fn render_wikitext(data: &[ContentToken]) -> String {
	let mut lines: Vec<String> = Vec::new();
	let mut line = String::new();
	let mut stack: Vec<Element> = Vec::new();

	for token in data {
		let in_item = stack.iter().any(|e| *e == Element::ListItem);
		match token {
			ContentToken::Char(c) => line.push(*c),
			ContentToken::Open(element) => {
				match element {
					Element::Paragraph | Element::List { .. } => {}
					Element::Heading { level } => {
						line.push_str(&"=".repeat(usize::from(*level)));
						line.push(' ');
					}
					Element::ListItem => {
						let style = stack.iter().rev().find_map(|e| match e {
							Element::List { style } => Some(*style),
							_ => None,
						});
						line.push(style.unwrap_or_default().marker());
						line.push(' ');
					}
					Element::ReferencesList { group } if group.is_empty() => {
						push_block(&mut lines, &mut line, "<references />".to_string());
					}
					Element::ReferencesList { group } => {
						push_block(
							&mut lines,
							&mut line,
							format!("<references group=\"{group}\" />"),
						);
					}
					Element::Transclusion {
						block: false,
						template,
					} => line.push_str(&template.to_wikitext()),
					Element::Transclusion {
						block: true,
						template,
					} => push_block(&mut lines, &mut line, template.to_wikitext()),
				}
				stack.push(element.clone());
			}
			ContentToken::Close(kind) => {
				let element = stack.pop();
				match (kind, element) {
					(ElementKind::Heading, Some(Element::Heading { level })) => {
						line.push(' ');
						line.push_str(&"=".repeat(usize::from(level)));
						lines.push(std::mem::take(&mut line));
					}
					(ElementKind::Paragraph, _) if !in_item => {
						lines.push(std::mem::take(&mut line));
					}
					(ElementKind::ListItem, _) => {
						lines.push(line.trim_end().to_string());
						line.clear();
					}
					_ => {}
				}
			}
		}
	}

	if !line.is_empty() {
		lines.push(line);
	}
	lines.join("\n")
}

/// Block-level content gets its own line, after any text typed before it.
fn push_block(lines: &mut Vec<String>, line: &mut String, block: String) {
	if !line.is_empty() {
		lines.push(std::mem::take(line));
	}
	lines.push(block);
}
