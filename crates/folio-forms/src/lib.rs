//! Form metadata and validation for folio
//!
//! This crate holds the synchronous, UI-independent half of the contact
//! form:
//! - Field descriptions ([`FieldMetadata`], [`FieldKind`]) that can be
//!   shipped to any renderer as JSON
//! - The validation rules (required, email) and their user-facing messages
//! - [`FormMetadata`], including the site's default contact form
//!
//! The live field values and the submission lifecycle live in
//! `folio-pages`.

pub mod field;
pub mod form;
pub mod validators;

pub use field::{
	FieldError, FieldKind, FieldMetadata, FieldResult, FieldValidationResult,
	INVALID_EMAIL_MESSAGE, REQUIRED_MESSAGE,
};
pub use form::FormMetadata;
pub use validators::{EmailValidator, RequiredValidator, Validator, validate_value};
