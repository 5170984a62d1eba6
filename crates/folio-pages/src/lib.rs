//! Folio Pages - client runtime for the portfolio site
//!
//! This crate drives the interactive part of the site's contact form. It is
//! independent of any particular renderer: the controller writes to
//! [`Signal`]-backed widget handles and a renderer (WASM, SSR, a terminal
//! or a test) binds those handles to real elements.
//!
//! ## Architecture
//!
//! - [`controller`]: [`FormValidationController`], validation and the
//!   submission state machine
//! - [`dom`]: widget handles (fields, submit button, message region)
//! - [`message`]: transient status messages with cancellable fade timers
//! - [`submission`]: the [`Submitter`] seam and the simulated backend
//! - [`reactive`]: [`Signal`], the shared observable cell
//! - [`settings`]: TOML configuration
//! - [`logging`]: `tracing` subscriber setup
//! - [`testing`]: scripted submitter for tests
//!
//! ## Event loop
//!
//! Everything runs on one thread. Timers and submissions are spawned with
//! `tokio::task::spawn_local`, so the controller must be driven from inside
//! a [`tokio::task::LocalSet`].
//!
//! ## Example
//!
//! ```ignore
//! use folio_pages::{ContactFormSettings, FormEvent, FormValidationController};
//! use std::rc::Rc;
//! use tokio::task::LocalSet;
//!
//! let settings = ContactFormSettings::from_file("folio.toml")?;
//! folio_pages::logging::init_logging(&settings.logging)?;
//!
//! LocalSet::new()
//!     .run_until(async {
//!         let form = Rc::new(FormValidationController::contact(&settings));
//!         form.dispatch(FormEvent::input("name", "Ada"))?;
//!         form.dispatch(FormEvent::Submit)?;
//!         Ok(())
//!     })
//!     .await
//! ```

pub mod controller;
pub mod dom;
pub mod logging;
pub mod message;
pub mod reactive;
pub mod settings;
pub mod submission;
pub mod testing;

pub use controller::{
	ControllerError, ControllerResult, FAILURE_MESSAGE, FormEvent, FormValidationController,
	SUCCESS_MESSAGE, SubmissionState, SubmitOutcome,
};
pub use dom::{FieldHandle, MessageRegion, SubmitControl};
pub use message::{MessageKind, MessagePresenter, MessageTimings, TransientMessage};
pub use reactive::Signal;
pub use settings::{ContactFormSettings, LoggingSettings, SettingsError, SettingsResult};
pub use submission::{FormPayload, SimulatedSubmitter, SubmissionError, Submitter};
