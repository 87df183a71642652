//! The matcher context and its extension point.
//!
//! A [`MatcherContext`] owns everything one editing surface needs: the rule
//! registry, declarations queued before activation, the lifecycle hooks and
//! the usage marker. Rule sets call [`MatcherContext::add_replacement`] at
//! any time; before [`MatcherContext::activate`] declarations are queued,
//! afterwards they are registered immediately.

use crate::content::Helpers;
use crate::exec::{Command, UsageMarker};
use crate::hooks::{Hook, Observer, Subscription};
use crate::rules::{Registry, RuleDeclaration};
use crate::surface::{Document, Surface};
use std::collections::VecDeque;

/// Name of the hook fired when the extension point is created.
pub const AVAILABLE_HOOK: &str = "autocorrect.available";

/// Name of the hook fired after the first activation.
pub const READY_HOOK: &str = "autocorrect.ready";

/// Lifecycle of a [`MatcherContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
	/// Declarations are queued.
	Collecting,
	/// Declarations are registered as they arrive. Permanent.
	Ready,
}

/// Outcome of [`MatcherContext::add_replacement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
	/// Registered under this rule name.
	Registered(String),
	/// Held until activation.
	Queued,
	/// Malformed; dropped and logged.
	Rejected,
}

#[derive(Debug)]
pub struct MatcherContext {
	registry: Registry,
	pending: VecDeque<RuleDeclaration>,
	state: State,
	available: Hook<MatcherContext>,
	ready: Hook<MatcherContext>,
	usage: UsageMarker,
	rejected: usize,
}

impl Default for MatcherContext {
	fn default() -> Self {
		MatcherContext::new(UsageMarker::default())
	}
}

impl MatcherContext {
	/// Create an empty context in the collecting state.
	pub fn new(usage: UsageMarker) -> Self {
		MatcherContext::with_observers(usage, Vec::new())
	}

	/// Create a context and fire the available hook for `observers`, in
	/// order. Observers added later through `on_available` run immediately.
	pub fn with_observers<I>(usage: UsageMarker, observers: I) -> Self
	where
		I: IntoIterator<Item = Observer<MatcherContext>>,
	{
		let mut ctx = MatcherContext {
			registry: Registry::new(),
			pending: VecDeque::new(),
			state: State::Collecting,
			available: Hook::new(AVAILABLE_HOOK),
			ready: Hook::new(READY_HOOK),
			usage,
			rejected: 0,
		};
		for observer in observers {
			// not fired yet, so always queued
			let _ = ctx.available.subscribe(observer);
		}
		if let Some(observers) = ctx.available.fire() {
			ctx.run_observers(observers);
		}
		ctx
	}

	pub fn state(&self) -> State {
		self.state
	}

	pub fn is_ready(&self) -> bool {
		self.state == State::Ready
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Number of declarations waiting for activation.
	pub fn pending_len(&self) -> usize {
		self.pending.len()
	}

	/// Number of declarations dropped as malformed.
	pub fn rejected_len(&self) -> usize {
		self.rejected
	}

	pub fn usage_marker(&self) -> &UsageMarker {
		&self.usage
	}

	/// Queue or register a replacement rule, depending on the state.
	pub fn add_replacement(&mut self, declaration: RuleDeclaration) -> Registration {
		match self.state {
			State::Collecting => {
				self.pending.push_back(declaration);
				Registration::Queued
			}
			State::Ready => self.register(declaration),
		}
	}

	/// Alias for [`MatcherContext::add_replacement`].
	pub fn add(&mut self, declaration: RuleDeclaration) -> Registration {
		self.add_replacement(declaration)
	}

	/// Switch to ready: register queued declarations in order, then fire the
	/// ready hook. Does nothing when already ready.
	pub fn activate(&mut self) {
		if self.state == State::Ready {
			tracing::debug!("autocorrect already active");
			return;
		}
		self.state = State::Ready;

		let pending = std::mem::take(&mut self.pending);
		for declaration in pending {
			self.register(declaration);
		}
		tracing::info!(
			rules = self.registry.len(),
			rejected = self.rejected,
			"autocorrect ready"
		);

		if let Some(observers) = self.ready.fire() {
			self.run_observers(observers);
		}
	}

	/// Run `observer` once the extension point exists (immediately).
	pub fn on_available<F>(&mut self, observer: F)
	where
		F: FnOnce(&mut MatcherContext, &Helpers) + 'static,
	{
		if let Subscription::Immediate(observer) = self.available.subscribe(Box::new(observer)) {
			observer(self, &Helpers);
		}
	}

	/// Run `observer` after activation, or immediately if already active.
	pub fn on_ready<F>(&mut self, observer: F)
	where
		F: FnOnce(&mut MatcherContext, &Helpers) + 'static,
	{
		if let Subscription::Immediate(observer) = self.ready.subscribe(Box::new(observer)) {
			observer(self, &Helpers);
		}
	}

	/// Start a new editing session: the next replacement tags the edit again.
	pub fn begin_session(&mut self) {
		self.usage.reset();
	}

	/// Check the content just before the cursor and apply the first matching
	/// rule. Returns the name of the rule that fired.
	pub fn handle_input(&mut self, surface: &mut dyn Surface) -> Option<String> {
		if self.state != State::Ready {
			return None;
		}
		let selection = surface.selection();
		if !selection.is_empty() {
			return None;
		}

		let (rule, span) = self
			.registry
			.find_matching_rule(surface.data(), selection.end)?;
		tracing::debug!(rule = rule.name(), ?span, "autocorrect sequence matched");

		surface.select(span);
		if !rule.command().execute(surface) {
			return None;
		}
		if self.usage.mark(surface) {
			tracing::debug!(tag = self.usage.tag(), "tagged edit");
		}
		Some(rule.name().to_string())
	}

	/// Type `text` into `doc` one character at a time, running autocorrect
	/// after each. `'\n'` presses Enter. Returns the names of fired rules.
	pub fn type_text(&mut self, doc: &mut Document, text: &str) -> Vec<String> {
		let mut fired = Vec::new();
		for c in text.chars() {
			if c == '\n' {
				doc.press_enter();
				continue;
			}
			doc.insert_char(c);
			fired.extend(self.handle_input(doc));
		}
		fired
	}

	fn register(&mut self, declaration: RuleDeclaration) -> Registration {
		match declaration.normalize() {
			Ok(rule) => Registration::Registered(self.registry.register(rule).name().to_string()),
			Err(e) => {
				self.rejected += 1;
				tracing::warn!(error = %e, "rejected replacement rule");
				Registration::Rejected
			}
		}
	}

	fn run_observers(&mut self, observers: Vec<Observer<MatcherContext>>) {
		for observer in observers {
			observer(self, &Helpers);
		}
	}
}
