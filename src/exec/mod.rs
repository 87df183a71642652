//! Replacement execution for autocorrect.
//!
//! This module handles:
//! - Replacing a matched span with a rule's content
//! - Placing the cursor after the inserted content
//! - Tagging the edit the first time autocorrect changes it

use crate::content::ContentFragment;
use crate::surface::Surface;

/// An action run against the surface once its sequence matched.
pub trait Command {
	/// Returns whether the command did anything.
	fn execute(&self, surface: &mut dyn Surface) -> bool;
}

/// Replace the current selection with fixed content and collapse the
/// cursor to the end of it.
#[derive(Debug, Clone)]
pub struct ReplaceCommand {
	name: String,
	content: ContentFragment,
}

impl ReplaceCommand {
	pub fn new(name: impl Into<String>, content: ContentFragment) -> Self {
		ReplaceCommand {
			name: name.into(),
			content,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn content(&self) -> &ContentFragment {
		&self.content
	}
}

impl Command for ReplaceCommand {
	fn execute(&self, surface: &mut dyn Surface) -> bool {
		let inserted = surface.insert_content(&self.content);
		surface.select(inserted.end..inserted.end);
		true
	}
}

/// Default change tag put on edits autocorrect touched.
pub const DEFAULT_USAGE_TAG: &str = "ve-autocorrect";

/// Tags the pending edit once per editing session.
#[derive(Debug, Clone)]
pub struct UsageMarker {
	tag: String,
	marked: bool,
}

impl UsageMarker {
	pub fn new(tag: impl Into<String>) -> Self {
		UsageMarker {
			tag: tag.into(),
			marked: false,
		}
	}

	pub fn tag(&self) -> &str {
		&self.tag
	}

	pub fn is_marked(&self) -> bool {
		self.marked
	}

	/// Tag the edit unless already done this session. Returns true when the
	/// tag was added by this call.
	pub fn mark(&mut self, surface: &mut dyn Surface) -> bool {
		if self.marked {
			return false;
		}
		surface.add_change_tag(&self.tag);
		self.marked = true;
		true
	}

	/// Forget the mark for a new editing session.
	pub fn reset(&mut self) {
		self.marked = false;
	}
}

impl Default for UsageMarker {
	fn default() -> Self {
		UsageMarker::new(DEFAULT_USAGE_TAG)
	}
}
