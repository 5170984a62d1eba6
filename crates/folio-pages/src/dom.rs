//! Widget handles
//!
//! The controller never touches a real document. It is handed these
//! handles instead; each one is a bundle of [`Signal`]s that a renderer
//! binds to the matching element:
//!
//! | Handle | Element | Signals |
//! |--------|---------|---------|
//! | [`FieldHandle`] | `.form-group` input + `.error-message` | `value`, `error` |
//! | [`SubmitControl`] | `button[type=submit]` | `disabled`, `sending` |
//! | [`MessageRegion`] | `#formMessage` | `kind`, `text`, `opacity` |
//!
//! Cloning a handle clones the signals, so the renderer and the controller
//! observe the same state.

use crate::message::MessageKind;
use crate::reactive::Signal;
use folio_forms::{FieldMetadata, FieldValidationResult};

/// Live state of one form field.
#[derive(Debug, Clone)]
pub struct FieldHandle {
	metadata: FieldMetadata,
	value: Signal<String>,
	error: Signal<Option<String>>,
}

impl FieldHandle {
	/// Creates an empty field without an error indicator.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::FieldMetadata;
	/// use folio_pages::FieldHandle;
	///
	/// let field = FieldHandle::new(FieldMetadata::new("name").required());
	/// assert_eq!(field.value(), "");
	/// assert!(!field.has_error());
	/// ```
	pub fn new(metadata: FieldMetadata) -> Self {
		Self {
			metadata,
			value: Signal::new(String::new()),
			error: Signal::new(None),
		}
	}

	/// Field name
	pub fn name(&self) -> &str {
		&self.metadata.name
	}

	/// Static field description
	pub fn metadata(&self) -> &FieldMetadata {
		&self.metadata
	}

	/// Current value
	pub fn value(&self) -> String {
		self.value.get()
	}

	/// Replace the value without validating it
	pub fn set_value(&self, value: impl Into<String>) {
		self.value.set(value.into());
	}

	/// Empty the value, as a form reset does
	pub fn clear(&self) {
		self.value.set(String::new());
	}

	/// Signal bound to the input's value
	pub fn value_signal(&self) -> &Signal<String> {
		&self.value
	}

	/// Signal bound to the error indicator; `Some` means shown
	pub fn error_signal(&self) -> &Signal<Option<String>> {
		&self.error
	}

	/// Message currently shown next to the field
	pub fn error_message(&self) -> Option<String> {
		self.error.get()
	}

	/// Whether the error indicator is shown
	pub fn has_error(&self) -> bool {
		self.error.with(Option::is_some)
	}

	/// Mirror a validation result onto the error indicator.
	pub(crate) fn show_result(&self, result: &FieldValidationResult) {
		self.error.set(result.error_message().map(str::to_owned));
	}
}

/// The form's submit button.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
	disabled: Signal<bool>,
	sending: Signal<bool>,
}

impl SubmitControl {
	/// An enabled, idle button
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether the button refuses clicks
	pub fn is_disabled(&self) -> bool {
		self.disabled.get()
	}

	/// Whether the "sending" visual state is on
	pub fn is_sending(&self) -> bool {
		self.sending.get()
	}

	/// Signal bound to the `disabled` attribute
	pub fn disabled_signal(&self) -> &Signal<bool> {
		&self.disabled
	}

	/// Signal bound to the `sending` class
	pub fn sending_signal(&self) -> &Signal<bool> {
		&self.sending
	}

	pub(crate) fn begin_sending(&self) {
		self.sending.set(true);
		self.disabled.set(true);
	}

	pub(crate) fn finish_sending(&self) {
		self.sending.set(false);
		self.disabled.set(false);
	}
}

/// The single status-message slot below the form.
#[derive(Debug, Clone)]
pub struct MessageRegion {
	kind: Signal<Option<MessageKind>>,
	text: Signal<String>,
	opacity: Signal<f32>,
}

impl MessageRegion {
	/// An empty, transparent region
	pub fn new() -> Self {
		Self {
			kind: Signal::new(None),
			text: Signal::new(String::new()),
			opacity: Signal::new(0.0),
		}
	}

	/// Kind of the message on display, if any
	pub fn kind(&self) -> Option<MessageKind> {
		self.kind.get()
	}

	/// Text on display (empty when cleared)
	pub fn text(&self) -> String {
		self.text.get()
	}

	/// Current opacity, `0.0` or `1.0`
	pub fn opacity(&self) -> f32 {
		self.opacity.get()
	}

	/// Whether a message is fully shown
	pub fn is_visible(&self) -> bool {
		self.kind.with(Option::is_some) && self.opacity.get() > 0.0
	}

	/// Class attribute for the region element.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::MessageRegion;
	///
	/// assert_eq!(MessageRegion::new().class_name(), "form-message");
	/// ```
	pub fn class_name(&self) -> String {
		match self.kind() {
			Some(kind) => format!("form-message {}", kind.css_class()),
			None => "form-message".to_string(),
		}
	}

	/// Signal bound to the message kind class
	pub fn kind_signal(&self) -> &Signal<Option<MessageKind>> {
		&self.kind
	}

	/// Signal bound to the text content
	pub fn text_signal(&self) -> &Signal<String> {
		&self.text
	}

	/// Signal bound to the opacity style
	pub fn opacity_signal(&self) -> &Signal<f32> {
		&self.opacity
	}

	pub(crate) fn write(&self, kind: MessageKind, text: String) {
		self.opacity.set(0.0);
		self.text.set(text);
		self.kind.set(Some(kind));
	}

	pub(crate) fn set_opacity(&self, opacity: f32) {
		self.opacity.set(opacity);
	}

	pub(crate) fn clear(&self) {
		self.kind.set(None);
		self.text.set(String::new());
	}
}

impl Default for MessageRegion {
	fn default() -> Self {
		Self::new()
	}
}
