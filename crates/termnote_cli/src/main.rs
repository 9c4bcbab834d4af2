//! Terminal entry point for termnote.
//!
//! # Responsibility
//! - Parse flags/env into `AppConfig`.
//! - Wire stdin/stdout into the core shell.
//! - Map fatal errors to exit status 1.

use clap::Parser;
use log::error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use termnote_core::{
    init_logging, AppConfig, LineInput, NoteService, Shell, ShellError, SystemClock,
};

/// Local note-taking shell backed by a flat file.
#[derive(Debug, Parser)]
#[command(name = "termnote", version = termnote_core::core_version())]
struct Args {
    /// Notes file to read and rewrite.
    #[arg(long, env = "TERMNOTE_FILE")]
    file: Option<PathBuf>,

    /// Record format used when saving: json | delimited.
    #[arg(long, env = "TERMNOTE_FORMAT")]
    format: Option<String>,

    /// Log level: trace | debug | info | warn | error.
    #[arg(long, env = "TERMNOTE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, env = "TERMNOTE_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match AppConfig::from_options(
        args.file,
        args.format.as_deref(),
        args.log_level.as_deref(),
        args.log_dir,
    ) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("Error: {err}");
            return ExitCode::from(2);
        }
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=shell_exit module=cli status=error error={}", err);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> Result<(), ShellError> {
    let service = NoteService::new(config.open_store(), SystemClock);
    let stdin = io::stdin();
    let mut shell = Shell::new(service, LineInput::new(stdin.lock()), io::stdout().lock());
    shell.run()
}
