//! The editing surface autocorrect operates on.
//!
//! This module handles:
//! - The [`Surface`] interface a host editor exposes
//! - Plaintext extraction for regex patterns
//! - An in-memory [`Document`] surface

pub mod document;

pub use document::Document;

use crate::content::{ContentFragment, ContentToken};
use std::ops::Range;

/// Host editor primitives used by the matcher and replacement commands.
///
/// Offsets index the linear token data.
pub trait Surface {
	/// Linear document content.
	fn data(&self) -> &[ContentToken];

	/// Current selection; collapsed when start == end.
	fn selection(&self) -> Range<usize>;

	fn select(&mut self, range: Range<usize>);

	/// Replace the selection with `content` and select what was inserted.
	fn insert_content(&mut self, content: &ContentFragment) -> Range<usize>;

	/// Attach a change tag to the pending edit.
	fn add_change_tag(&mut self, tag: &str);
}

/// Characters immediately before `offset`, back to the nearest structural token.
pub fn plaintext_before(data: &[ContentToken], offset: usize) -> String {
	let end = offset.min(data.len());
	let mut chars: Vec<char> = data[..end]
		.iter()
		.rev()
		.map_while(ContentToken::as_char)
		.collect();
	chars.reverse();
	chars.into_iter().collect()
}
