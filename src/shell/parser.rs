//! Parsing of raw input lines into commands.

use crate::error::{CommandError, CommandResult};

/// A fully parsed command with its arguments checked for arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: Option<String> },
    Change { name: String, old: String, new: String },
    RemovePhone { name: String, phone: String },
    Phone { name: String },
    Delete { name: String },
    All,
    Exit,
}

/// Split a line into a lowercased command token and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

impl Command {
    /// Parse a raw line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        match parse_input(line) {
            Some((command, args)) => Self::from_parts(&command, args).map(Some),
            None => Ok(None),
        }
    }

    fn from_parts(command: &str, args: Vec<String>) -> CommandResult<Command> {
        match command {
            "hello" => Ok(Command::Hello),
            "all" => Ok(Command::All),
            "close" | "exit" => Ok(Command::Exit),
            "add" => {
                // extra arguments after the phone are ignored
                let mut args = args.into_iter();
                let name = args.next().ok_or(CommandError::MissingName)?;
                Ok(Command::Add {
                    name,
                    phone: args.next(),
                })
            }
            "change" => {
                let [name, old, new] =
                    exact_args::<3>(command, args, CommandError::MissingChangeArgs)?;
                Ok(Command::Change { name, old, new })
            }
            "remove_phone" => {
                let [name, phone] =
                    exact_args::<2>(command, args, CommandError::MissingRemoveArgs)?;
                Ok(Command::RemovePhone { name, phone })
            }
            "phone" => {
                let [name] = exact_args::<1>(command, args, CommandError::MissingName)?;
                Ok(Command::Phone { name })
            }
            "delete" => {
                let [name] = exact_args::<1>(command, args, CommandError::MissingName)?;
                Ok(Command::Delete { name })
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Require exactly `N` arguments, reporting `missing` when there are too few.
fn exact_args<const N: usize>(
    command: &str,
    args: Vec<String>,
    missing: CommandError,
) -> CommandResult<[String; N]> {
    if args.len() < N {
        return Err(missing);
    }
    args.try_into().map_err(|_| CommandError::TooManyArgs {
        command: command.to_string(),
        max: N,
    })
}
