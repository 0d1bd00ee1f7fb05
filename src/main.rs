//! Transmogrify - command-line entry point.

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::Parser;
use tracing::debug;
use transmogrify::{
    cli::{Cli, StdStreams, formatting::format_error},
    tracing_config,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = tracing_config::init_cli_mode(cli.log_level) {
        eprintln!("failed to initialise logging: {e}");
    }

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut streams = StdStreams {
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let command = cli.command.command();
    match command.execute(&mut streams) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(command = command.name(), error = %e, "command failed");

            let label = if io::stderr().is_terminal() {
                format_error("Error")
            } else {
                "Error".to_string()
            };
            eprintln!("{label}: {e}");
            ExitCode::FAILURE
        }
    }
}
