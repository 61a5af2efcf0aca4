//! Interactive session loop.

use super::handlers::{execute, Reply, FAREWELL, GREETING};
use super::parser::Command;
use crate::config::Config;
use crate::models::ContactDirectory;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// One interactive session over a line-oriented input and an output sink.
///
/// The directory lives as long as the session and is dropped with it.
pub struct Session {
    prompt: String,
    contacts: ContactDirectory,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            prompt: config.prompt.clone(),
            contacts: ContactDirectory::new(),
        }
    }

    /// Contacts accumulated so far.
    pub fn contacts(&self) -> &ContactDirectory {
        &self.contacts
    }

    /// Read and execute commands until `close`/`exit` or end of input.
    ///
    /// Command failures are written to `output` and the loop continues; only
    /// I/O errors end the session early.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        write_line(&mut output, GREETING).await?;

        loop {
            output.write_all(self.prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                info!("Input closed, ending session");
                write_line(&mut output, FAREWELL).await?;
                break;
            };

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!(input = %line, "Rejected command: {}", e);
                    write_line(&mut output, &e.to_string()).await?;
                    continue;
                }
            };

            match execute(command, &mut self.contacts) {
                Ok(Reply::Message(message)) => write_line(&mut output, &message).await?,
                Ok(Reply::Exit(message)) => {
                    info!("Session closed by user");
                    write_line(&mut output, &message).await?;
                    break;
                }
                Err(e) => {
                    warn!(input = %line, "Command failed: {}", e);
                    write_line(&mut output, &e.to_string()).await?;
                }
            }
        }

        output.flush().await
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}
