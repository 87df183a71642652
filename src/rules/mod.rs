//! Replacement rules for autocorrect.
//!
//! This module handles:
//! - Declared rules and their normalization
//! - Pattern compilation and matching at the cursor
//! - The ordered rule registry (first match wins)

pub mod declaration;
pub mod pattern;
pub mod registry;

pub use declaration::{NormalizedRule, RuleDeclaration};
pub use pattern::{Pattern, PatternSpec, Sequence};
pub use registry::{Registry, Rule};
