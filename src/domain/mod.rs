//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone
//! numbers. These value objects validate at construction time, so an invalid
//! name or phone number cannot be represented anywhere else in the crate.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{PhoneNumber, PHONE_DIGITS};
