//! Signal - shared observable state
//!
//! `Signal<T>` holds a value that the controller writes and a renderer
//! reads. Renderers (or tests) can [`subscribe`](Signal::subscribe) to be
//! told about every write.
//!
//! Signals are single-threaded: clones share one `Rc<RefCell<T>>`, which is
//! all the UI event loop needs.
//!
//! ## Example
//!
//! ```
//! use folio_pages::Signal;
//!
//! let count = Signal::new(0);
//! count.set(42);
//! assert_eq!(count.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A shared value that notifies subscribers on every write.
///
/// ## Cloning
///
/// All clones of the same Signal share the same underlying value and the
/// same subscriber list.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Run `f` against the current value without cloning it
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the value in place and notify subscribers once
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.value.borrow_mut());
		self.notify();
	}

	/// Register a callback invoked after every write.
	///
	/// Subscribers see the value as written. A subscriber must not write to
	/// the signal it observes.
	pub fn subscribe<F>(&self, f: F)
	where
		F: Fn(&T) + 'static,
	{
		self.subscribers.borrow_mut().push(Rc::new(f));
	}

	fn notify(&self) {
		// Snapshot so subscribers may register further subscribers.
		let subscribers = self.subscribers.borrow().clone();
		if subscribers.is_empty() {
			return;
		}
		let value = self.value.borrow();
		for subscriber in subscribers {
			subscriber(&value);
		}
	}
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscribers.borrow().len())
			.finish()
	}
}
