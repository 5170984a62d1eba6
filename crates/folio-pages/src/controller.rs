//! Contact form controller
//!
//! [`FormValidationController`] owns one form: it validates fields as the
//! user types, gates submission on the whole form being valid, drives the
//! submission lifecycle and reports the outcome through a transient
//! message.
//!
//! ## Submission lifecycle
//!
//! ```mermaid
//! stateDiagram-v2
//!     [*] --> Idle
//!     Idle --> Idle: submit (form invalid)
//!     Idle --> Pending: submit (form valid)
//!     Pending --> Succeeded: submitter Ok
//!     Pending --> Failed: submitter Err
//!     Succeeded --> Idle: immediately
//!     Failed --> Idle: immediately
//! ```
//!
//! The submit control is disabled for exactly as long as the state is
//! `Pending`, and a submit while not `Idle` is refused, so at most one
//! submission is ever in flight.
//!
//! ## Example
//!
//! ```ignore
//! use folio_pages::{ContactFormSettings, FormEvent, FormValidationController};
//! use std::rc::Rc;
//!
//! let controller = Rc::new(FormValidationController::contact(&ContactFormSettings::default()));
//!
//! // Wire DOM events to the controller
//! controller.dispatch(FormEvent::input("name", "Ada"))?;
//! controller.dispatch(FormEvent::blur("email"))?;
//! controller.dispatch(FormEvent::Submit)?;
//! ```

use crate::dom::{FieldHandle, MessageRegion, SubmitControl};
use crate::message::{MessageKind, MessagePresenter, MessageTimings};
use crate::reactive::Signal;
use crate::settings::ContactFormSettings;
use crate::submission::{FormPayload, SimulatedSubmitter, Submitter};
use folio_forms::{FieldValidationResult, FormMetadata, validate_value};
use std::fmt;
use std::rc::Rc;

/// Shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Shown after a failed submission.
pub const FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SubmissionState {
	/// Waiting for the user
	#[default]
	Idle,
	/// A submission call is in flight
	Pending,
	/// The last call succeeded (transient)
	Succeeded,
	/// The last call failed (transient)
	Failed,
}

/// What a submit action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
	/// At least one required field was invalid; nothing was sent
	Invalid,
	/// A submission was already in flight; nothing was sent
	Busy,
	/// The submission call succeeded
	Sent,
	/// The submission call failed
	Failed,
}

/// A user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
	/// The value of a field changed
	Input {
		/// Field name
		field: String,
		/// New value
		value: String,
	},
	/// A field lost focus
	Blur {
		/// Field name
		field: String,
	},
	/// The user submitted the form
	Submit,
}

impl FormEvent {
	/// Shorthand for [`FormEvent::Input`]
	pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
		Self::Input {
			field: field.into(),
			value: value.into(),
		}
	}

	/// Shorthand for [`FormEvent::Blur`]
	pub fn blur(field: impl Into<String>) -> Self {
		Self::Blur {
			field: field.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// Validates and submits one form.
///
/// The controller is handed its widgets instead of looking them up, so a
/// renderer or a test keeps clones of the same handles and observes every
/// change.
pub struct FormValidationController {
	form_id: String,
	fields: Vec<FieldHandle>,
	submit_control: SubmitControl,
	messages: MessagePresenter,
	submitter: Rc<dyn Submitter>,
	state: Signal<SubmissionState>,
}

impl FormValidationController {
	/// Creates a controller over the given widgets.
	pub fn new(
		form_id: impl Into<String>,
		fields: Vec<FieldHandle>,
		submit_control: SubmitControl,
		messages: MessagePresenter,
		submitter: Rc<dyn Submitter>,
	) -> Self {
		Self {
			form_id: form_id.into(),
			fields,
			submit_control,
			messages,
			submitter,
			state: Signal::new(SubmissionState::Idle),
		}
	}

	/// Creates fresh widgets for every field in `metadata`.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::FormMetadata;
	/// use folio_pages::{FormValidationController, MessageTimings, SimulatedSubmitter};
	/// use std::rc::Rc;
	///
	/// let controller = FormValidationController::from_metadata(
	///     &FormMetadata::contact(),
	///     Rc::new(SimulatedSubmitter::default()),
	///     MessageTimings::default(),
	/// );
	/// assert_eq!(controller.fields().len(), 4);
	/// assert!(controller.field("email").is_some());
	/// ```
	pub fn from_metadata(
		metadata: &FormMetadata,
		submitter: Rc<dyn Submitter>,
		timings: MessageTimings,
	) -> Self {
		let fields = metadata
			.fields
			.iter()
			.cloned()
			.map(FieldHandle::new)
			.collect();

		Self::new(
			metadata.id.clone(),
			fields,
			SubmitControl::new(),
			MessagePresenter::new(MessageRegion::new(), timings),
			submitter,
		)
	}

	/// The site's contact form backed by the simulated submitter.
	pub fn contact(settings: &ContactFormSettings) -> Self {
		let delay = settings.submission_delay();
		let submitter = match settings.seed {
			Some(seed) => SimulatedSubmitter::with_seed(delay, settings.success_rate, seed),
			None => SimulatedSubmitter::new(delay, settings.success_rate),
		};

		Self::from_metadata(
			&FormMetadata::contact(),
			Rc::new(submitter),
			settings.message_timings(),
		)
	}

	/// Form identifier
	pub fn form_id(&self) -> &str {
		&self.form_id
	}

	/// All fields in declaration order
	pub fn fields(&self) -> &[FieldHandle] {
		&self.fields
	}

	/// Looks up a field by name
	pub fn field(&self, name: &str) -> Option<&FieldHandle> {
		self.fields.iter().find(|field| field.name() == name)
	}

	/// The submit button
	pub fn submit_control(&self) -> &SubmitControl {
		&self.submit_control
	}

	/// The status message slot
	pub fn message_region(&self) -> &MessageRegion {
		self.messages.region()
	}

	/// Current lifecycle state
	pub fn state(&self) -> SubmissionState {
		self.state.get()
	}

	/// Signal carrying every lifecycle transition
	pub fn state_signal(&self) -> &Signal<SubmissionState> {
		&self.state
	}

	/// Routes a user interaction.
	///
	/// `Input` and `Blur` validate the field on the spot. `Submit` checks
	/// the form and locks the submit control before returning; only the
	/// submitter call and the outcome handling run later, on the local task
	/// set.
	///
	/// # Panics
	///
	/// A `Submit` that passes the checks panics outside of a
	/// [`tokio::task::LocalSet`]. The form is back to `Idle` with the
	/// control enabled by then.
	pub fn dispatch(self: &Rc<Self>, event: FormEvent) -> ControllerResult<()> {
		match event {
			FormEvent::Input { field, value } => {
				self.input(&field, value)?;
			}
			FormEvent::Blur { field } => {
				self.validate_field(&field)?;
			}
			FormEvent::Submit => {
				if let Ok(pending) = self.begin_submit() {
					let controller = Rc::clone(self);
					tokio::task::spawn_local(async move {
						controller.complete(pending).await;
					});
				}
			}
		}
		Ok(())
	}

	/// Stores a new value for `name` and validates it.
	pub fn input(
		&self,
		name: &str,
		value: impl Into<String>,
	) -> ControllerResult<FieldValidationResult> {
		let field = self.require_field(name)?;
		field.set_value(value);
		Ok(Self::validate_handle(field))
	}

	/// Validates one field and mirrors the result on its error indicator.
	pub fn validate_field(&self, name: &str) -> ControllerResult<FieldValidationResult> {
		self.require_field(name).map(Self::validate_handle)
	}

	/// Validates every required field.
	///
	/// All required fields are checked, even after the first failure, so
	/// each one shows its own error. Optional fields are left untouched.
	pub fn validate_form(&self) -> bool {
		let invalid = self
			.fields
			.iter()
			.filter(|field| field.metadata().required)
			.map(Self::validate_handle)
			.filter(|result| !result.valid)
			.count();
		invalid == 0
	}

	/// Runs one submit action to completion.
	///
	/// Does nothing unless the controller is `Idle` and the form is valid.
	/// Otherwise the submit control is disabled while the submitter runs,
	/// the outcome is announced, and the controller is back to `Idle` (with
	/// the control re-enabled) before this returns. Message timers keep
	/// running afterwards.
	///
	/// # Panics
	///
	/// Announcing the outcome panics outside of a
	/// [`tokio::task::LocalSet`]. The form is back to `Idle` with the
	/// control enabled by then, so a later submit from inside a local set
	/// works.
	pub async fn submit(&self) -> SubmitOutcome {
		match self.begin_submit() {
			Ok(pending) => self.complete(pending).await,
			Err(outcome) => outcome,
		}
	}

	/// Checks the form and moves it to `Pending`.
	///
	/// Runs synchronously, so the values checked are the ones present at
	/// the moment of the submit action.
	fn begin_submit(&self) -> Result<PendingSubmission, SubmitOutcome> {
		let current = self.state.get();
		if current != SubmissionState::Idle {
			tracing::debug!(form = %self.form_id, state = ?current, "submit ignored while busy");
			return Err(SubmitOutcome::Busy);
		}
		if !self.validate_form() {
			tracing::debug!(form = %self.form_id, "submit blocked by invalid fields");
			return Err(SubmitOutcome::Invalid);
		}

		Ok(PendingSubmission::begin(
			&self.form_id,
			&self.state,
			&self.submit_control,
			self.payload(),
		))
	}

	/// Awaits the submitter and announces the outcome.
	///
	/// `pending` is dropped on return (or on unwind), which re-enables the
	/// control and moves the form back to `Idle`.
	async fn complete(&self, pending: PendingSubmission) -> SubmitOutcome {
		match self.submitter.submit(&pending.payload).await {
			Ok(()) => {
				pending.settle(SubmissionState::Succeeded);
				self.reset();
				tracing::info!(form = %self.form_id, "form submitted");
				self.messages.show(MessageKind::Success, SUCCESS_MESSAGE);
				SubmitOutcome::Sent
			}
			Err(err) => {
				pending.settle(SubmissionState::Failed);
				tracing::error!(form = %self.form_id, error = %err, "form submission error");
				self.messages.show(MessageKind::Error, FAILURE_MESSAGE);
				SubmitOutcome::Failed
			}
		}
	}

	/// Current values of every field
	pub fn payload(&self) -> FormPayload {
		let mut payload = FormPayload::new(self.form_id.clone());
		for field in &self.fields {
			payload.push(field.name(), field.value());
		}
		payload
	}

	/// Clears every field value. Error indicators are left as they are.
	pub fn reset(&self) {
		for field in &self.fields {
			field.clear();
		}
	}

	fn require_field(&self, name: &str) -> ControllerResult<&FieldHandle> {
		self.field(name)
			.ok_or_else(|| ControllerError::UnknownField(name.to_string()))
	}

	fn validate_handle(field: &FieldHandle) -> FieldValidationResult {
		let result = validate_value(field.metadata(), &field.value());
		field.show_result(&result);
		result
	}

}

fn transition(form_id: &str, state: &Signal<SubmissionState>, next: SubmissionState) {
	let previous = state.get();
	tracing::debug!(form = %form_id, from = ?previous, to = ?next, "submission state transition");
	state.set(next);
}

/// A submission that passed the checks and holds the form in `Pending`.
///
/// Dropping it re-enables the submit control and moves the form back to
/// `Idle`, whether the submission finished, panicked or was never polled.
struct PendingSubmission {
	form_id: String,
	state: Signal<SubmissionState>,
	submit_control: SubmitControl,
	payload: FormPayload,
}

impl PendingSubmission {
	fn begin(
		form_id: &str,
		state: &Signal<SubmissionState>,
		submit_control: &SubmitControl,
		payload: FormPayload,
	) -> Self {
		transition(form_id, state, SubmissionState::Pending);
		submit_control.begin_sending();
		Self {
			form_id: form_id.to_string(),
			state: state.clone(),
			submit_control: submit_control.clone(),
			payload,
		}
	}

	fn settle(&self, outcome: SubmissionState) {
		transition(&self.form_id, &self.state, outcome);
	}
}

impl Drop for PendingSubmission {
	fn drop(&mut self) {
		self.submit_control.finish_sending();
		transition(&self.form_id, &self.state, SubmissionState::Idle);
	}
}

impl fmt::Debug for FormValidationController {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FormValidationController")
			.field("form_id", &self.form_id)
			.field("fields", &self.fields)
			.field("submit_control", &self.submit_control)
			.field("messages", &self.messages)
			.field("state", &self.state)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::ScriptedSubmitter;
	use rstest::rstest;

	fn controller() -> FormValidationController {
		FormValidationController::from_metadata(
			&FormMetadata::contact(),
			Rc::new(ScriptedSubmitter::succeeding()),
			MessageTimings::default(),
		)
	}

	#[rstest]
	fn test_unknown_field_is_an_error() {
		let controller = controller();

		assert_eq!(
			controller.validate_field("phone"),
			Err(ControllerError::UnknownField("phone".to_string()))
		);
		assert!(controller.input("phone", "123").is_err());
	}

	#[rstest]
	fn test_input_validates_eagerly() {
		let controller = controller();

		let result = controller.input("email", "ada@").unwrap();
		assert!(!result.valid);
		assert!(controller.field("email").unwrap().has_error());

		controller.input("email", "ada@example.com").unwrap();
		assert!(!controller.field("email").unwrap().has_error());
	}

	#[rstest]
	fn test_validate_form_does_not_short_circuit() {
		let controller = controller();

		assert!(!controller.validate_form());

		let flagged: Vec<_> = controller
			.fields()
			.iter()
			.filter(|field| field.has_error())
			.map(|field| field.name().to_string())
			.collect();
		assert_eq!(flagged, ["name", "email", "message"]);
	}

	#[rstest]
	fn test_begin_submit_locks_until_released() {
		let controller = controller();
		controller.input("name", "Ada").unwrap();
		controller.input("email", "ada@example.com").unwrap();
		controller.input("message", "Hi").unwrap();

		let pending = controller.begin_submit().unwrap();
		assert_eq!(controller.state(), SubmissionState::Pending);
		assert!(controller.submit_control().is_disabled());
		assert_eq!(pending.payload.get("name"), Some("Ada"));
		assert_eq!(controller.begin_submit().err(), Some(SubmitOutcome::Busy));

		// Never completed, e.g. the task was dropped before being polled
		drop(pending);
		assert_eq!(controller.state(), SubmissionState::Idle);
		assert!(!controller.submit_control().is_disabled());
		assert!(!controller.submit_control().is_sending());
	}

	#[rstest]
	fn test_payload_keeps_field_order() {
		let controller = controller();
		controller.input("name", "Ada").unwrap();
		controller.input("message", "Hi").unwrap();

		let names: Vec<_> = controller.payload().iter().map(|(name, _)| name.to_string()).collect();
		assert_eq!(names, ["name", "email", "subject", "message"]);
		assert_eq!(controller.payload().get("name"), Some("Ada"));
	}
}
