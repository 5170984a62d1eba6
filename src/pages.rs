//! Client runtime for the portfolio site
//!
//! This module provides access to folio-pages, which drives the contact
//! form in a renderer-agnostic way.
//!
//! ## Architecture
//!
//! - **Widget handles**: fields, submit button and message region as signals
//! - **Controller**: validation and the submission state machine
//! - **Messages**: transient status messages with cancellable timers
//! - **Submitters**: the seam to a backend, simulated by default
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio::pages::{FormValidationController, MessageTimings, SimulatedSubmitter};
//! use folio::forms::FormMetadata;
//! use std::rc::Rc;
//!
//! let form = FormValidationController::from_metadata(
//!     &FormMetadata::contact(),
//!     Rc::new(SimulatedSubmitter::default()),
//!     MessageTimings::default(),
//! );
//!
//! // Bind the message region to the page
//! form.message_region().text_signal().subscribe(|text| println!("{text}"));
//! ```

// Re-export all folio-pages functionality
pub use folio_pages::*;
