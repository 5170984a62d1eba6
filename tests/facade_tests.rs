//! Facade integration tests
//!
//! Checks that the `folio` facade exposes a working contact form through
//! its prelude and module re-exports.

use folio::forms::REQUIRED_MESSAGE;
use folio::pages::testing::ScriptedSubmitter;
use folio::prelude::*;
use rstest::rstest;
use std::rc::Rc;
use tokio::task::LocalSet;

#[rstest]
fn test_contact_metadata_through_facade() {
	let form = FormMetadata::contact();

	let required: Vec<_> = form.required_fields().map(|field| field.name.as_str()).collect();
	assert_eq!(required, ["name", "email", "message"]);
	assert_eq!(form.field("email").map(|field| field.kind), Some(FieldKind::Email));
}

#[rstest]
#[case("", false)]
#[case("   ", false)]
#[case("Ada", true)]
fn test_required_text_validation(#[case] value: &str, #[case] valid: bool) {
	let field = FieldMetadata::new("name").required();

	let result = validate_value(&field, value);

	assert_eq!(result.valid, valid);
	if !valid {
		assert_eq!(result.message, REQUIRED_MESSAGE);
	}
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_prelude_drives_a_submission() {
	LocalSet::new()
		.run_until(async {
			let submitter = Rc::new(ScriptedSubmitter::succeeding());
			let form = Rc::new(FormValidationController::from_metadata(
				&FormMetadata::contact(),
				submitter.clone(),
				MessageTimings::default(),
			));

			form.dispatch(FormEvent::input("name", "Ada")).unwrap();
			form.dispatch(FormEvent::input("email", "ada@example.com")).unwrap();
			form.dispatch(FormEvent::input("message", "Hello")).unwrap();

			assert_eq!(form.submit().await, SubmitOutcome::Sent);
			assert_eq!(form.state(), SubmissionState::Idle);
			assert_eq!(form.message_region().kind(), Some(MessageKind::Success));
			assert_eq!(submitter.calls(), 1);
		})
		.await;
}
