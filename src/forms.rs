//! Field metadata and validators
//!
//! This module provides access to folio-forms: the description of the
//! contact form's fields and the checks run against their values.

// Re-export all folio-forms functionality
pub use folio_forms::*;
