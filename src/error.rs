//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every message here is user-facing: the interactive shell prints it verbatim.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced by contact records and the contact directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A name or phone number failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is not stored on the record
    #[error("Phone {0} not found.")]
    PhoneNotFound(String),

    /// No record is stored under the name
    #[error("Record for {0} not found.")]
    RecordNotFound(String),
}

/// Errors raised while parsing or executing a shell command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A command that needs a contact name was given none
    #[error("Please provide a name.")]
    MissingName,

    /// `change` needs a name, the old phone and the new phone
    #[error("Please provide a name, the phone number to edit, and the new phone number.")]
    MissingChangeArgs,

    /// `remove_phone` needs a name and a phone
    #[error("Please provide both a name and a phone number to remove.")]
    MissingRemoveArgs,

    /// More arguments than the command accepts
    #[error("Too many arguments for '{command}': expected at most {max}.")]
    TooManyArgs { command: String, max: usize },

    /// The named contact does not exist
    #[error("Name '{0}' not found in contacts.")]
    ContactNotFound(String),

    /// The command token is not part of the vocabulary
    #[error("Invalid command.")]
    UnknownCommand(String),

    /// Error bubbled up from the contact book core
    #[error(transparent)]
    Book(#[from] BookError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Book(BookError::Validation(err))
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
