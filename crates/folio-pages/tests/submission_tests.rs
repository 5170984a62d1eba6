//! Simulated submission backend tests
//!
//! Covers the delay and the success ratio of `SimulatedSubmitter`, and the
//! contact controller built from settings.

use folio_pages::{
	ContactFormSettings, FormPayload, FormValidationController, SimulatedSubmitter, SubmitOutcome,
	Submitter,
};
use rstest::{fixture, rstest};
use std::rc::Rc;
use std::time::Duration;
use tokio::task::LocalSet;
use tokio::time::Instant;

#[fixture]
fn payload() -> FormPayload {
	FormPayload::new("contactForm")
		.with_value("name", "Ada")
		.with_value("email", "ada@example.com")
		.with_value("message", "Hello")
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_success_ratio_over_many_attempts(payload: FormPayload) {
	let submitter = SimulatedSubmitter::with_seed(Duration::ZERO, 0.9, 42);

	let mut succeeded = 0usize;
	for _ in 0..1000 {
		if submitter.submit(&payload).await.is_ok() {
			succeeded += 1;
		}
	}

	// Roughly five standard deviations either way
	assert!(
		(850..=950).contains(&succeeded),
		"{succeeded} of 1000 attempts succeeded"
	);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_same_seed_same_outcomes(payload: FormPayload) {
	let first = SimulatedSubmitter::with_seed(Duration::ZERO, 0.5, 7);
	let second = SimulatedSubmitter::with_seed(Duration::ZERO, 0.5, 7);

	for _ in 0..50 {
		assert_eq!(
			first.submit(&payload).await.is_ok(),
			second.submit(&payload).await.is_ok()
		);
	}
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_default_delay_is_applied(payload: FormPayload) {
	let submitter = SimulatedSubmitter::with_seed(SimulatedSubmitter::DEFAULT_DELAY, 1.0, 1);
	let started = Instant::now();

	submitter.submit(&payload).await.unwrap();

	assert!(started.elapsed() >= Duration::from_millis(1500));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_contact_controller_from_settings() {
	let settings = ContactFormSettings::from_toml_str(
		r#"
		submission_delay_ms = 200
		success_rate = 1.0
		seed = 3
		"#,
	)
	.unwrap();

	LocalSet::new()
		.run_until(async {
			let form = Rc::new(FormValidationController::contact(&settings));
			assert_eq!(form.form_id(), "contactForm");

			form.input("name", "Ada").unwrap();
			form.input("email", "ada@example.com").unwrap();
			form.input("message", "Hello").unwrap();

			let started = Instant::now();
			assert_eq!(form.submit().await, SubmitOutcome::Sent);
			assert!(started.elapsed() >= Duration::from_millis(200));
		})
		.await;
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn test_contact_controller_with_certain_failure() {
	let settings = ContactFormSettings {
		success_rate: 0.0,
		seed: Some(9),
		..ContactFormSettings::default()
	};

	LocalSet::new()
		.run_until(async {
			let form = FormValidationController::contact(&settings);
			form.input("name", "Ada").unwrap();
			form.input("email", "ada@example.com").unwrap();
			form.input("message", "Hello").unwrap();

			assert_eq!(form.submit().await, SubmitOutcome::Failed);
			assert_eq!(form.field("name").unwrap().value(), "Ada");
		})
		.await;
}
