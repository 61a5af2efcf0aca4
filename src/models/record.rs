//! Contact record: one contact's name and its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact.
///
/// Phones keep their insertion order. Duplicate phone values are allowed;
/// lookups and removals act on the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with no phone numbers.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// The record is left untouched if validation fails.
    pub fn add_phone(&mut self, value: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == value)
    }

    /// Remove the first phone equal to `value`.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<String> {
        let index = self
            .position(value)
            .ok_or_else(|| BookError::PhoneNotFound(value.to_string()))?;

        self.phones.remove(index);
        debug!(name = %self.name, phone = value, "Removed phone");
        Ok(format!("Phone {} removed.", value))
    }

    /// Replace `old` with `new` in place.
    ///
    /// Lookup happens before validation and validation before mutation, so
    /// the phone list is unchanged unless the whole edit succeeds.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<String> {
        let index = self
            .position(old)
            .ok_or_else(|| BookError::PhoneNotFound(old.to_string()))?;
        let replacement = PhoneNumber::new(new)?;

        self.phones[index] = replacement;
        debug!(name = %self.name, old, new, "Edited phone");
        Ok(format!("Phone {} changed to {}.", old, new))
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == value)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
