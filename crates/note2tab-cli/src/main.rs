use anyhow::Result;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod session;

use cli::{Invocation, UsageError, USAGE};
use config::Config;
use session::Session;

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> Result<()> {
    let invocation = Invocation::parse_from(std::env::args_os())?;

    if invocation.show_config {
        config::show_config(config);
        return Ok(());
    }

    let mut session = Session::new(config, io::stdout().lock());
    session.run(invocation.directives)?;
    log::debug!("Processed {} notes", session.notes_processed());

    Ok(())
}

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("note2tab: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(usage) = e.downcast_ref::<UsageError>() {
                log::warn!("{usage}");
                eprintln!("Usage: {USAGE}");
            } else {
                eprintln!("note2tab: {e}");
            }
            ExitCode::FAILURE
        }
    }
}
