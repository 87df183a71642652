use crate::content::{ContentFragment, ContentToken};
use crate::error::{AutocorrectError, Result};
use regex::Regex;
use serde::Deserialize;
use std::fmt;
use std::ops::Range;

/// Something that can be matched against the content right before the cursor.
pub trait Sequence {
	/// Return the token range to replace if this sequence ends at `offset`.
	///
	/// `plaintext` is the run of characters immediately before `offset`
	/// (see [`crate::surface::plaintext_before`]).
	fn matches(
		&self,
		data: &[ContentToken],
		offset: usize,
		plaintext: &str,
	) -> Option<Range<usize>>;
}

/// A pattern as declared, before compilation.
///
/// In config files: a string (literal), an array of content tokens, or
/// `{ regex = "..." }`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
	Literal(String),
	// before `Regex`, which would also accept a one-element array
	Content(ContentFragment),
	Regex { regex: String },
}

impl PatternSpec {
	pub fn literal(text: impl Into<String>) -> Self {
		PatternSpec::Literal(text.into())
	}

	pub fn regex(pattern: impl Into<String>) -> Self {
		PatternSpec::Regex {
			regex: pattern.into(),
		}
	}

	pub fn content(content: impl Into<ContentFragment>) -> Self {
		PatternSpec::Content(content.into())
	}
}

impl From<&str> for PatternSpec {
	fn from(text: &str) -> Self {
		PatternSpec::literal(text)
	}
}

impl From<ContentFragment> for PatternSpec {
	fn from(content: ContentFragment) -> Self {
		PatternSpec::Content(content)
	}
}

/// A compiled trigger pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
	/// Exact characters ending at the cursor.
	Literal(String),

	/// Regex run over the plaintext before the cursor. The match has to end
	/// at the cursor; only the first capture group is replaced.
	Capture(Regex),

	/// Exact token tail ending at the cursor.
	Content(ContentFragment),
}

impl Pattern {
	/// Compile a declared pattern. Empty patterns and regexes without a
	/// capture group are rejected.
	pub fn compile(spec: PatternSpec) -> Result<Self> {
		match spec {
			PatternSpec::Literal(text) if text.is_empty() => {
				Err(AutocorrectError::MalformedDeclaration {
					reason: "empty `from` pattern",
				})
			}
			PatternSpec::Literal(text) => Ok(Pattern::Literal(text)),
			PatternSpec::Regex { regex } => compile_capture(&regex),
			PatternSpec::Content(content) if content.is_empty() => {
				Err(AutocorrectError::MalformedDeclaration {
					reason: "empty `from` pattern",
				})
			}
			PatternSpec::Content(content) => Ok(Pattern::Content(content)),
		}
	}
}

fn compile_capture(pattern: &str) -> Result<Pattern> {
	let regex = Regex::new(pattern).map_err(|source| AutocorrectError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})?;

	// group 0 is the whole match
	if regex.captures_len() < 2 {
		return Err(AutocorrectError::MissingCaptureGroup {
			pattern: pattern.to_string(),
		});
	}

	Ok(Pattern::Capture(regex))
}

impl Sequence for Pattern {
	fn matches(
		&self,
		data: &[ContentToken],
		offset: usize,
		plaintext: &str,
	) -> Option<Range<usize>> {
		match self {
			Pattern::Literal(text) => {
				let expected: Vec<char> = text.chars().collect();
				match_tail(data, offset, expected.len(), |i, token| {
					token.as_char() == Some(expected[i])
				})
			}
			Pattern::Content(content) => {
				let expected = content.tokens();
				match_tail(data, offset, expected.len(), |i, token| *token == expected[i])
			}
			Pattern::Capture(regex) => match_capture(regex, offset, plaintext),
		}
	}
}

/// Compare the `len` tokens ending at `offset` one by one.
fn match_tail<F>(data: &[ContentToken], offset: usize, len: usize, eq: F) -> Option<Range<usize>>
where
	F: Fn(usize, &ContentToken) -> bool,
{
	if offset > data.len() {
		return None;
	}
	let start = offset.checked_sub(len)?;
	data[start..offset]
		.iter()
		.enumerate()
		.all(|(i, token)| eq(i, token))
		.then_some(start..offset)
}

fn match_capture(regex: &Regex, offset: usize, plaintext: &str) -> Option<Range<usize>> {
	// only the leftmost match counts, and it has to reach the cursor
	let captures = regex.captures(plaintext)?;
	if captures.get(0)?.end() != plaintext.len() {
		return None;
	}
	let group = captures.get(1)?;
	if group.is_empty() {
		return None;
	}

	// byte offsets in the run -> token offsets in the document
	let run_start = offset.checked_sub(plaintext.chars().count())?;
	let start = run_start + plaintext[..group.start()].chars().count();
	let end = start + group.as_str().chars().count();
	Some(start..end)
}

impl fmt::Display for Pattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Pattern::Literal(text) => write!(f, "{text:?}"),
			Pattern::Capture(regex) => write!(f, "/{}/", regex.as_str()),
			Pattern::Content(content) => write!(f, "[{content}]"),
		}
	}
}
