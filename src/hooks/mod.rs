//! One-shot lifecycle hooks for autocorrect.
//!
//! This module handles:
//! - Collecting observers before a lifecycle event
//! - Firing them once, in subscription order
//! - Running late subscribers immediately

pub mod signal;

pub use signal::{Hook, Observer, Subscription};
