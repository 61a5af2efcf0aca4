//! Contact Book - an interactive command-line assistant for managing contacts.
//!
//! A session keeps a directory of named contacts, each holding zero or more
//! ten-digit phone numbers, and accepts textual commands to add, edit, remove
//! and list them. Nothing is persisted between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`ContactName`, `PhoneNumber`)
//! - **models**: `ContactRecord` and the `ContactDirectory` that owns them
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **shell**: Command parsing, dispatch and the interactive session loop
//!
//! The domain and models layers never perform I/O; they return success
//! messages or typed errors and leave printing to the shell.
//!
//! # Example
//!
//! ```
//! use contact_book::{ContactDirectory, ContactRecord};
//!
//! let mut record = ContactRecord::new("Alice").unwrap();
//! record.add_phone("0123456789").unwrap();
//!
//! let mut contacts = ContactDirectory::new();
//! contacts.add_record(record);
//! assert!(contacts.find("Alice").is_some());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use config::Config;
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::{ContactDirectory, ContactRecord};
pub use shell::{Command, Reply, Session};
