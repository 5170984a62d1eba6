//! Form submission seam
//!
//! The controller hands a [`FormPayload`] to a [`Submitter`] and awaits a
//! single result: `Ok(())` or a [`SubmissionError`]. There is exactly one
//! attempt per submit action; retrying is left to the user.
//!
//! [`SimulatedSubmitter`] stands in for a real backend: it waits a fixed
//! delay and then succeeds with a configurable probability.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde::ser::SerializeMap;
use std::cell::RefCell;
use std::time::Duration;

/// A failed submission.
///
/// The user only ever sees one generic message for this; the reason is
/// kept for logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
	#[error("Server error: {0}")]
	Server(String),
}

/// Field values sent on submit, in field declaration order.
///
/// Serializes as a flat JSON object:
///
/// ```
/// use folio_pages::FormPayload;
///
/// let payload = FormPayload::new("contactForm")
///     .with_value("name", "Ada")
///     .with_value("email", "ada@example.com");
///
/// assert_eq!(
///     payload.to_json().unwrap(),
///     r#"{"name":"Ada","email":"ada@example.com"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormPayload {
	form_id: String,
	values: Vec<(String, String)>,
}

impl FormPayload {
	/// Creates an empty payload for the given form.
	pub fn new(form_id: impl Into<String>) -> Self {
		Self {
			form_id: form_id.into(),
			values: Vec::new(),
		}
	}

	/// Appends a field value.
	pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.push(name, value);
		self
	}

	pub(crate) fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.push((name.into(), value.into()));
	}

	/// Identifier of the submitted form
	pub fn form_id(&self) -> &str {
		&self.form_id
	}

	/// Value submitted for `name`
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}

	/// Iterates over `(name, value)` pairs
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of submitted fields
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Whether no field was submitted
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// JSON request body
	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}

impl Serialize for FormPayload {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.values.len()))?;
		for (name, value) in &self.values {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

/// Sends a form to wherever it goes.
///
/// Implementations run on the single-threaded UI loop, hence `?Send`.
#[async_trait(?Send)]
pub trait Submitter {
	/// Delivers `payload`, resolving once the outcome is known.
	async fn submit(&self, payload: &FormPayload) -> Result<(), SubmissionError>;
}

/// Local stand-in for a backend.
///
/// Every attempt waits `delay`, then succeeds with probability
/// `success_rate`, independently of previous attempts.
#[derive(Debug)]
pub struct SimulatedSubmitter {
	delay: Duration,
	success_rate: f64,
	rng: RefCell<StdRng>,
}

impl SimulatedSubmitter {
	/// Default delay before an attempt settles
	pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

	/// Default probability of success
	pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;

	/// Creates a submitter seeded from OS entropy.
	///
	/// `success_rate` is clamped to `[0, 1]`; NaN counts as `0`.
	pub fn new(delay: Duration, success_rate: f64) -> Self {
		Self::with_rng(delay, success_rate, StdRng::from_entropy())
	}

	/// Creates a submitter with a reproducible outcome sequence.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::SimulatedSubmitter;
	/// use std::time::Duration;
	///
	/// let a = SimulatedSubmitter::with_seed(Duration::ZERO, 0.5, 7);
	/// let b = SimulatedSubmitter::with_seed(Duration::ZERO, 0.5, 7);
	///
	/// let xs: Vec<_> = (0..16).map(|_| a.roll().is_ok()).collect();
	/// let ys: Vec<_> = (0..16).map(|_| b.roll().is_ok()).collect();
	/// assert_eq!(xs, ys);
	/// ```
	pub fn with_seed(delay: Duration, success_rate: f64, seed: u64) -> Self {
		Self::with_rng(delay, success_rate, StdRng::seed_from_u64(seed))
	}

	fn with_rng(delay: Duration, success_rate: f64, rng: StdRng) -> Self {
		Self {
			delay,
			success_rate: if success_rate.is_nan() {
				0.0
			} else {
				success_rate.clamp(0.0, 1.0)
			},
			rng: RefCell::new(rng),
		}
	}

	/// Delay before an attempt settles
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Probability that an attempt succeeds
	pub fn success_rate(&self) -> f64 {
		self.success_rate
	}

	/// Draws the outcome of one attempt without waiting.
	pub fn roll(&self) -> Result<(), SubmissionError> {
		if self.rng.borrow_mut().gen_bool(self.success_rate) {
			Ok(())
		} else {
			Err(SubmissionError::Server("simulated server error".to_string()))
		}
	}
}

impl Default for SimulatedSubmitter {
	fn default() -> Self {
		Self::new(Self::DEFAULT_DELAY, Self::DEFAULT_SUCCESS_RATE)
	}
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
	async fn submit(&self, payload: &FormPayload) -> Result<(), SubmissionError> {
		tracing::debug!(form = payload.form_id(), fields = payload.len(), "simulating submission");
		tokio::time::sleep(self.delay).await;
		self.roll()
	}
}
