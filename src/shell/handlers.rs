//! Command handlers.
//!
//! Each handler calls into the contact directory and returns the text to show
//! the user. Failures are returned as `CommandError` and printed by the session
//! loop in one place.

use super::parser::Command;
use crate::error::{BookError, CommandError, CommandResult};
use crate::models::{ContactDirectory, ContactRecord};
use tracing::debug;

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const FAREWELL: &str = "Goodbye!";
pub const EMPTY_LIST: &str = "Contact list is empty.";

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading commands
    Message(String),
    /// Print the message and end the session
    Exit(String),
}

/// Run one command against the directory.
pub fn execute(command: Command, contacts: &mut ContactDirectory) -> CommandResult<Reply> {
    debug!(?command, "Executing command");

    let message = match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add { name, phone } => add_contact(contacts, name, phone)?,
        Command::Change { name, old, new } => change_contact(contacts, &name, &old, &new)?,
        Command::RemovePhone { name, phone } => remove_phone(contacts, &name, &phone)?,
        Command::Phone { name } => show_phone(contacts, &name)?,
        Command::Delete { name } => contacts.delete(&name)?,
        Command::All => show_all(contacts),
        Command::Exit => return Ok(Reply::Exit(FAREWELL.to_string())),
    };

    Ok(Reply::Message(message))
}

/// Create a contact or add a phone to an existing one.
///
/// A new contact is only stored once its phone (if any) has validated.
fn add_contact(
    contacts: &mut ContactDirectory,
    name: String,
    phone: Option<String>,
) -> CommandResult<String> {
    if contacts.contains(&name) {
        if let Some(phone) = phone {
            contacts.add_phone(&name, phone)?;
        }
        return Ok(format!("Contact updated: {}", name));
    }

    let mut record = ContactRecord::new(name.as_str())?;
    if let Some(phone) = phone {
        record.add_phone(phone)?;
    }
    contacts.add_record(record);
    Ok(format!("Contact added: {}", name))
}

fn change_contact(
    contacts: &mut ContactDirectory,
    name: &str,
    old: &str,
    new: &str,
) -> CommandResult<String> {
    contacts
        .edit_phone(name, old, new)
        .map_err(unknown_name_as_contact_error)
}

fn remove_phone(contacts: &mut ContactDirectory, name: &str, phone: &str) -> CommandResult<String> {
    contacts
        .remove_phone(name, phone)
        .map_err(unknown_name_as_contact_error)
}

/// Report a missing record as an unknown contact name.
fn unknown_name_as_contact_error(err: BookError) -> CommandError {
    match err {
        BookError::RecordNotFound(name) => CommandError::ContactNotFound(name),
        other => other.into(),
    }
}

fn show_phone(contacts: &ContactDirectory, name: &str) -> CommandResult<String> {
    contacts
        .find(name)
        .map(ToString::to_string)
        .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
}

fn show_all(contacts: &ContactDirectory) -> String {
    if contacts.is_empty() {
        return EMPTY_LIST.to_string();
    }

    let mut lines = vec!["Contacts list:".to_string()];
    lines.extend(
        contacts
            .iter()
            .map(|(name, record)| format!("{}: {}", name, record)),
    );
    lines.join("\n")
}
