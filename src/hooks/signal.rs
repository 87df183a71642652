use crate::content::Helpers;
use std::fmt;

/// Callback run when a hook fires. Receives the hook's owner and the
/// content builders.
pub type Observer<T> = Box<dyn FnOnce(&mut T, &Helpers)>;

/// A named event that fires at most once.
///
/// Observers added after the hook fired are not queued; the owner runs them
/// right away (see [`Subscription::Immediate`]).
pub struct Hook<T> {
	name: &'static str,
	observers: Option<Vec<Observer<T>>>,
}

/// What the owner has to do with a new observer.
pub enum Subscription<T> {
	/// Stored until the hook fires.
	Queued,
	/// Hook already fired; run the observer now.
	Immediate(Observer<T>),
}

impl<T> Hook<T> {
	pub fn new(name: &'static str) -> Self {
		Hook {
			name,
			observers: Some(Vec::new()),
		}
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn has_fired(&self) -> bool {
		self.observers.is_none()
	}

	pub fn subscribe(&mut self, observer: Observer<T>) -> Subscription<T> {
		match self.observers.as_mut() {
			Some(observers) => {
				observers.push(observer);
				Subscription::Queued
			}
			None => Subscription::Immediate(observer),
		}
	}

	/// Mark the hook fired and hand back the observers to run.
	///
	/// Returns `None` if it already fired.
	pub fn fire(&mut self) -> Option<Vec<Observer<T>>> {
		let observers = self.observers.take();
		if let Some(ref observers) = observers {
			tracing::debug!(hook = self.name, observers = observers.len(), "firing hook");
		}
		observers
	}
}

impl<T> fmt::Debug for Hook<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Hook")
			.field("name", &self.name)
			.field("fired", &self.has_fired())
			.field(
				"observers",
				&self.observers.as_ref().map_or(0, Vec::len),
			)
			.finish()
	}
}
