//! Contact Book - Main entry point
//!
//! Runs one interactive assistant session on stdin/stdout. Contacts live only
//! for the duration of the session.

use anyhow::Result;
use contact_book::{Config, Session};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so the interactive transcript on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book session");

    let mut session = Session::new(&config);
    let stdin = BufReader::new(tokio::io::stdin());
    if let Err(e) = session.run(stdin, tokio::io::stdout()).await {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    info!("Session ended with {} contact(s)", session.contacts().len());
    Ok(())
}
