//! Transient status messages
//!
//! A message is written to the [`MessageRegion`] immediately, faded in on
//! the next tick, faded out once its display time is over, and cleared a
//! short while after that:
//!
//! ```text
//! show()        +fade_in_delay      +display          +display+fade_out
//!   │ text/kind      │ opacity 1         │ opacity 0          │ kind/text cleared
//!   ▼                ▼                   ▼                    ▼
//! ──●────────────────●───────────────────●────────────────────●──▶ time
//! ```
//!
//! Only one lifecycle runs at a time. Showing a new message aborts the
//! previous message's pending task first, so a stale timer can never fade
//! or clear a newer message.
//!
//! The lifecycle task is spawned with [`tokio::task::spawn_local`], so
//! [`MessagePresenter::show`] must be called from inside a
//! [`tokio::task::LocalSet`].

use crate::dom::MessageRegion;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// Whether a message reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
	/// The submission went through
	Success,
	/// The submission failed
	Error,
}

impl MessageKind {
	/// CSS modifier class for the message region
	pub fn css_class(&self) -> &'static str {
		match self {
			MessageKind::Success => "success",
			MessageKind::Error => "error",
		}
	}
}

/// A message as it was created.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientMessage {
	/// Success or error
	pub kind: MessageKind,
	/// User-facing text
	pub text: String,
	/// When the message was written
	pub created_at: Instant,
	/// When the fade-out begins
	pub visible_until: Instant,
}

/// Delays driving a message lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageTimings {
	/// Delay before the message becomes fully visible
	pub fade_in_delay: Duration,
	/// Time from creation until the fade-out begins
	pub display: Duration,
	/// Time from the start of the fade-out until the region is cleared
	pub fade_out: Duration,
}

impl Default for MessageTimings {
	fn default() -> Self {
		Self {
			fade_in_delay: Duration::from_millis(10),
			display: Duration::from_millis(5000),
			fade_out: Duration::from_millis(300),
		}
	}
}

impl MessageTimings {
	/// Time from creation until the region is empty again
	pub fn total(&self) -> Duration {
		self.display + self.fade_out
	}
}

/// Drives the lifecycle of messages shown in one [`MessageRegion`].
#[derive(Debug)]
pub struct MessagePresenter {
	region: MessageRegion,
	timings: MessageTimings,
	pending: RefCell<Option<AbortHandle>>,
}

impl MessagePresenter {
	/// Creates a presenter writing into `region`.
	pub fn new(region: MessageRegion, timings: MessageTimings) -> Self {
		Self {
			region,
			timings,
			pending: RefCell::new(None),
		}
	}

	/// The region this presenter writes into
	pub fn region(&self) -> &MessageRegion {
		&self.region
	}

	/// The configured delays
	pub fn timings(&self) -> MessageTimings {
		self.timings
	}

	/// Shows a message, replacing whatever is currently displayed.
	///
	/// # Panics
	///
	/// Panics when called outside of a [`tokio::task::LocalSet`], as the
	/// fade timers run on a local task. The text is already written to the
	/// region at that point.
	pub fn show(&self, kind: MessageKind, text: impl Into<String>) -> TransientMessage {
		self.cancel();

		let text = text.into();
		let created_at = Instant::now();
		let visible_until = created_at + self.timings.display;
		self.region.write(kind, text.clone());
		tracing::debug!(kind = kind.css_class(), %text, "showing form message");

		let region = self.region.clone();
		let timings = self.timings;
		let task = tokio::task::spawn_local(async move {
			tokio::time::sleep(timings.fade_in_delay).await;
			region.set_opacity(1.0);

			tokio::time::sleep_until(visible_until).await;
			region.set_opacity(0.0);

			tokio::time::sleep(timings.fade_out).await;
			region.clear();
			tracing::trace!("form message cleared");
		});
		*self.pending.borrow_mut() = Some(task.abort_handle());

		TransientMessage {
			kind,
			text,
			created_at,
			visible_until,
		}
	}

	/// Aborts the running lifecycle, leaving the region as it is.
	pub fn cancel(&self) {
		if let Some(handle) = self.pending.borrow_mut().take() {
			handle.abort();
		}
	}

	/// Whether a lifecycle task is still scheduled
	pub fn is_active(&self) -> bool {
		self.pending
			.borrow()
			.as_ref()
			.is_some_and(|handle| !handle.is_finished())
	}
}

impl Drop for MessagePresenter {
	fn drop(&mut self) {
		self.cancel();
	}
}
