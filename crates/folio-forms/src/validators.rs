//! Field validators
//!
//! Rules run in a fixed order and the first failing rule wins:
//!
//! 1. presence, for required fields ([`RequiredValidator`])
//! 2. address format, for email fields ([`EmailValidator`])
//!
//! Client-side validation is for UX only. A real backend must re-validate.

use crate::field::{FieldError, FieldKind, FieldMetadata, FieldResult, FieldValidationResult};
use regex::Regex;
use std::sync::LazyLock;

// Non-whitespace, "@", non-whitespace, ".", non-whitespace.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

/// A single rule applied to a raw field value.
pub trait Validator {
	/// Returns `Ok(())` when `value` satisfies the rule.
	fn validate(&self, value: &str) -> FieldResult<()>;
}

/// Rejects values that are empty after trimming whitespace.
///
/// # Examples
///
/// ```
/// use folio_forms::validators::{RequiredValidator, Validator};
///
/// assert!(RequiredValidator.validate("Ada").is_ok());
/// assert!(RequiredValidator.validate("   ").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl Validator for RequiredValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if value.trim().is_empty() {
			Err(FieldError::Required)
		} else {
			Ok(())
		}
	}
}

/// Accepts `local@domain.tld` shaped values.
///
/// The check is deliberately loose: no whitespace, exactly one `@`, and a
/// dot somewhere after it.
///
/// # Examples
///
/// ```
/// use folio_forms::validators::{EmailValidator, Validator};
///
/// assert!(EmailValidator.validate("a@b.co").is_ok());
/// assert!(EmailValidator.validate("foo@bar").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
	fn validate(&self, value: &str) -> FieldResult<()> {
		if EMAIL_REGEX.is_match(value) {
			Ok(())
		} else {
			Err(FieldError::InvalidEmail)
		}
	}
}

/// Checks `value` against the rules declared by `field`.
///
/// Optional fields skip the presence rule. Email fields always run the
/// format rule, so an empty optional email field is reported as malformed.
///
/// # Examples
///
/// ```
/// use folio_forms::{FieldKind, FieldMetadata, validate_value};
///
/// let email = FieldMetadata::new("email").with_kind(FieldKind::Email).required();
///
/// assert_eq!(validate_value(&email, "").message, "This field is required");
/// assert_eq!(validate_value(&email, "x@y").message, "Please enter a valid email address");
/// assert!(validate_value(&email, "x@y.io").valid);
/// ```
pub fn validate_value(field: &FieldMetadata, value: &str) -> FieldValidationResult {
	check(field, value).into()
}

fn check(field: &FieldMetadata, value: &str) -> FieldResult<()> {
	if field.required {
		RequiredValidator.validate(value)?;
	}
	if field.kind == FieldKind::Email {
		EmailValidator.validate(value)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("user@example.com")]
	#[case("a@b.co")]
	#[case("first.last@sub.domain.org")]
	fn test_email_validator_valid(#[case] value: &str) {
		assert!(EmailValidator.validate(value).is_ok());
	}

	#[rstest]
	#[case("foo")]
	#[case("foo@")]
	#[case("foo@bar")]
	#[case("@example.com")]
	#[case("user name@example.com")]
	#[case("a@@b.co")]
	fn test_email_validator_invalid(#[case] value: &str) {
		assert_eq!(EmailValidator.validate(value), Err(FieldError::InvalidEmail));
	}

	#[rstest]
	fn test_required_rule_wins_over_email_rule() {
		let field = FieldMetadata::new("email")
			.with_kind(FieldKind::Email)
			.required();

		let result = validate_value(&field, "  ");
		assert!(!result.valid);
		assert_eq!(result.message, "This field is required");
	}

	#[rstest]
	fn test_optional_text_field_accepts_empty() {
		let field = FieldMetadata::new("subject");
		assert!(validate_value(&field, "").valid);
	}

	#[rstest]
	fn test_required_does_not_trim_stored_value() {
		let field = FieldMetadata::new("name").required();
		assert!(validate_value(&field, "  Ada  ").valid);
	}
}
