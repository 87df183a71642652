//! ve-autocorrect - typing-time autocorrection rules for rich-text wiki editors.
//!
//! This library provides:
//! - Content fragments and builders for wiki block structure
//! - Rule declarations, pattern compilation and a first-match registry
//! - An extension point that queues rules until the editor is ready
//! - Replacement commands and a once-per-session usage tag
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```
//! use ve_autocorrect::extension::MatcherContext;
//! use ve_autocorrect::rules::RuleDeclaration;
//! use ve_autocorrect::surface::Document;
//!
//! let mut ctx = MatcherContext::default();
//! ctx.add_replacement(RuleDeclaration::from_to("--", "–"));
//! ctx.activate();
//!
//! let mut doc = Document::new();
//! ctx.type_text(&mut doc, "a--b");
//! assert_eq!(doc.render(), "a–b");
//! assert_eq!(doc.change_tags(), &["ve-autocorrect".to_string()]);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod exec;
pub mod extension;
pub mod hooks;
pub mod rules;
pub mod rulesets;
pub mod surface;

pub use error::{AutocorrectError, Result};
