//! Testing utilities
//!
//! [`ScriptedSubmitter`] replaces the random backend with a fixed list of
//! outcomes and records every payload it receives.
//!
//! ```
//! use folio_pages::testing::ScriptedSubmitter;
//! use folio_pages::SubmissionError;
//!
//! let submitter = ScriptedSubmitter::new([
//!     Ok(()),
//!     Err(SubmissionError::Server("boom".to_string())),
//! ]);
//! assert_eq!(submitter.calls(), 0);
//! ```

use crate::submission::{FormPayload, SubmissionError, Submitter};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

/// Submitter replaying a scripted sequence of outcomes.
///
/// Once the script is exhausted every further attempt succeeds.
#[derive(Debug, Default)]
pub struct ScriptedSubmitter {
	outcomes: RefCell<VecDeque<Result<(), SubmissionError>>>,
	delay: Duration,
	payloads: RefCell<Vec<FormPayload>>,
}

impl ScriptedSubmitter {
	/// Replays `outcomes` in order.
	pub fn new(outcomes: impl IntoIterator<Item = Result<(), SubmissionError>>) -> Self {
		Self {
			outcomes: RefCell::new(outcomes.into_iter().collect()),
			delay: Duration::ZERO,
			payloads: RefCell::new(Vec::new()),
		}
	}

	/// Every attempt succeeds.
	pub fn succeeding() -> Self {
		Self::default()
	}

	/// The first attempt fails with `reason`.
	pub fn failing(reason: impl Into<String>) -> Self {
		Self::new([Err(SubmissionError::Server(reason.into()))])
	}

	/// Waits `delay` before settling each attempt.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Number of attempts received
	pub fn calls(&self) -> usize {
		self.payloads.borrow().len()
	}

	/// Payloads received, oldest first
	pub fn payloads(&self) -> Vec<FormPayload> {
		self.payloads.borrow().clone()
	}
}

#[async_trait(?Send)]
impl Submitter for ScriptedSubmitter {
	async fn submit(&self, payload: &FormPayload) -> Result<(), SubmissionError> {
		self.payloads.borrow_mut().push(payload.clone());
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}
		self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
	}
}
