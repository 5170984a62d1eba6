//! # Folio
//!
//! Client-side behavior for the folio portfolio site.
//!
//! The site is static apart from its contact form. This crate validates the
//! form as the user types, refuses to submit an invalid form, keeps a single
//! submission in flight and reports the outcome through a status message
//! that fades out on its own.
//!
//! ## Feature Flags
//!
//! - `forms` - Field metadata and validators ([`forms`])
//! - `pages` - Client runtime and the contact form controller ([`pages`])
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use folio::prelude::*;
//! use std::rc::Rc;
//! use tokio::task::LocalSet;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = ContactFormSettings::from_file("folio.toml")?;
//!     init_logging(&settings.logging)?;
//!
//!     LocalSet::new()
//!         .run_until(async {
//!             let form = Rc::new(FormValidationController::contact(&settings));
//!             form.dispatch(FormEvent::input("name", "Ada"))?;
//!             form.dispatch(FormEvent::input("email", "ada@example.com"))?;
//!             form.dispatch(FormEvent::input("message", "Hello"))?;
//!             println!("{:?}", form.submit().await);
//!             Ok(())
//!         })
//!         .await
//! }
//! ```

#[cfg(feature = "forms")]
pub mod forms;
#[cfg(feature = "pages")]
pub mod pages;

#[cfg(feature = "forms")]
pub use folio_forms::{
	FieldError, FieldKind, FieldMetadata, FieldValidationResult, FormMetadata, validate_value,
};

#[cfg(feature = "pages")]
pub use folio_pages::{
	ContactFormSettings, FormEvent, FormValidationController, SubmissionState, SubmitOutcome,
	Submitter,
};

/// Convenience re-exports
pub mod prelude {
	#[cfg(feature = "forms")]
	pub use crate::{FieldKind, FieldMetadata, FormMetadata, validate_value};

	#[cfg(feature = "pages")]
	pub use crate::{
		ContactFormSettings, FormEvent, FormValidationController, SubmissionState, SubmitOutcome,
		Submitter,
	};
	#[cfg(feature = "pages")]
	pub use folio_pages::logging::init_logging;
	#[cfg(feature = "pages")]
	pub use folio_pages::{MessageKind, MessageTimings, Signal, SimulatedSubmitter};
}
