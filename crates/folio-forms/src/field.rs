//! Field metadata and per-field validation results
//!
//! A field is split into a static, serializable description
//! ([`FieldMetadata`]) and a live value owned by the client runtime.
//! Validation results are always derived from the pair and never stored.

use serde::{Deserialize, Serialize};

/// Message shown when a required field is left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Message shown when an email field does not look like an address.
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

/// Input kind of a field, mirroring the HTML `type` attribute.
///
/// Only [`FieldKind::Email`] carries a format rule; the other kinds are
/// validated for presence only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
	/// Single-line free text (`<input type="text">`)
	#[default]
	Text,
	/// Email address (`<input type="email">`)
	Email,
	/// Telephone number (`<input type="tel">`)
	Tel,
	/// Multi-line free text (`<textarea>`)
	Textarea,
}

impl FieldKind {
	/// Returns the HTML input type for this kind.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::FieldKind;
	///
	/// assert_eq!(FieldKind::Email.input_type(), "email");
	/// assert_eq!(FieldKind::Textarea.input_type(), "textarea");
	/// ```
	pub fn input_type(&self) -> &'static str {
		match self {
			FieldKind::Text => "text",
			FieldKind::Email => "email",
			FieldKind::Tel => "tel",
			FieldKind::Textarea => "textarea",
		}
	}
}

/// Serializable description of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
	/// Field name (used as form data key)
	pub name: String,

	/// Human-readable label (optional)
	#[serde(default)]
	pub label: Option<String>,

	/// Input kind
	#[serde(default)]
	pub kind: FieldKind,

	/// Whether the field must be non-empty
	#[serde(default)]
	pub required: bool,
}

impl FieldMetadata {
	/// Creates an optional text field.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::{FieldKind, FieldMetadata};
	///
	/// let field = FieldMetadata::new("subject");
	/// assert_eq!(field.kind, FieldKind::Text);
	/// assert!(!field.required);
	/// ```
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			label: None,
			kind: FieldKind::Text,
			required: false,
		}
	}

	/// Sets the input kind.
	pub fn with_kind(mut self, kind: FieldKind) -> Self {
		self.kind = kind;
		self
	}

	/// Sets the human-readable label.
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Marks the field as required.
	pub fn required(mut self) -> Self {
		self.required = true;
		self
	}

	/// Label to display, falling back to the field name.
	pub fn display_label(&self) -> &str {
		self.label.as_deref().unwrap_or(&self.name)
	}
}

/// A failed field-level rule.
///
/// The `Display` output is the user-facing message rendered next to the
/// offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("This field is required")]
	Required,
	#[error("Please enter a valid email address")]
	InvalidEmail,
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Outcome of validating one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldValidationResult {
	/// Whether every rule passed
	pub valid: bool,
	/// Message of the first failing rule, empty when valid
	pub message: String,
}

impl FieldValidationResult {
	/// A passing result with no message.
	pub fn valid() -> Self {
		Self {
			valid: true,
			message: String::new(),
		}
	}

	/// A failing result carrying the error's message.
	pub fn invalid(error: &FieldError) -> Self {
		Self {
			valid: false,
			message: error.to_string(),
		}
	}

	/// Returns the message when invalid, `None` otherwise.
	pub fn error_message(&self) -> Option<&str> {
		(!self.valid).then_some(self.message.as_str())
	}
}

impl From<FieldResult<()>> for FieldValidationResult {
	fn from(result: FieldResult<()>) -> Self {
		match result {
			Ok(()) => Self::valid(),
			Err(err) => Self::invalid(&err),
		}
	}
}
