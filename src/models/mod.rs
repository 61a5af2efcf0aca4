//! Data models for the contact book.
//!
//! This module contains the contact record and the directory that owns every
//! record for the duration of a session. Neither performs any I/O: mutating
//! operations return a success message for the caller to display.

pub mod directory;
pub mod record;

pub use directory::ContactDirectory;
pub use record::ContactRecord;
