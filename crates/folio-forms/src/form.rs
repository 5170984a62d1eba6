use crate::field::{FieldKind, FieldMetadata};
use serde::{Deserialize, Serialize};

/// Serializable description of a whole form.
///
/// Fields keep their declaration order; that order is used for rendering,
/// validation passes and the submitted payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormMetadata {
	/// Form identifier (the `id` attribute of the `<form>` element)
	pub id: String,

	/// Field metadata list
	pub fields: Vec<FieldMetadata>,
}

impl FormMetadata {
	/// Creates an empty form.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::FormMetadata;
	///
	/// let form = FormMetadata::new("newsletter");
	/// assert!(form.fields.is_empty());
	/// ```
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			fields: Vec::new(),
		}
	}

	/// Appends a field.
	pub fn with_field(mut self, field: FieldMetadata) -> Self {
		self.fields.push(field);
		self
	}

	/// The site's contact form: name, email, optional subject, message.
	///
	/// # Examples
	///
	/// ```
	/// use folio_forms::FormMetadata;
	///
	/// let form = FormMetadata::contact();
	/// let required: Vec<_> = form.required_fields().map(|f| f.name.as_str()).collect();
	/// assert_eq!(required, ["name", "email", "message"]);
	/// ```
	pub fn contact() -> Self {
		Self::new("contactForm")
			.with_field(FieldMetadata::new("name").with_label("Name").required())
			.with_field(
				FieldMetadata::new("email")
					.with_label("Email")
					.with_kind(FieldKind::Email)
					.required(),
			)
			.with_field(FieldMetadata::new("subject").with_label("Subject"))
			.with_field(
				FieldMetadata::new("message")
					.with_label("Message")
					.with_kind(FieldKind::Textarea)
					.required(),
			)
	}

	/// Looks up a field by name.
	pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
		self.fields.iter().find(|field| field.name == name)
	}

	/// Iterates over required fields in declaration order.
	pub fn required_fields(&self) -> impl Iterator<Item = &FieldMetadata> {
		self.fields.iter().filter(|field| field.required)
	}
}
