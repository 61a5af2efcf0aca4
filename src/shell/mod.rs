//! Interactive command shell.
//!
//! This is the only layer that touches stdin/stdout:
//! - **parser**: Split input lines and check command arguments
//! - **handlers**: Run one command against the contact directory
//! - **session**: Prompt/read/execute/print loop

pub mod handlers;
pub mod parser;
pub mod session;

pub use handlers::{execute, Reply};
pub use parser::{parse_input, Command};
pub use session::Session;
