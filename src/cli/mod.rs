//! Command-line interface.
//!
//! Arguments are parsed with clap into one struct per subcommand; each of
//! those structs implements [`Command`] and runs against injectable
//! standard streams.

mod commands;
pub mod formatting;
mod types;

use clap::{Parser, Subcommand};

pub use commands::{ConvertCommand, FormatsCommand, GetKeyCommand};
pub use types::{Command, StdStreams};

use crate::{Result, TransmogrifyError, tracing_config::LogLevel};

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(name = "transmogrify", version)]
#[command(about = "Convert structured data documents between JSON, TOML and YAML")]
pub struct Cli {
    /// Verbosity of diagnostics written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a document from one format to another
    Convert(ConvertCommand),

    /// List the supported formats
    Formats(FormatsCommand),

    /// Print the value of a top-level key
    GetKey(GetKeyCommand),
}

impl Commands {
    /// The command implementation selected on the command line.
    pub fn command(&self) -> &dyn Command {
        match self {
            Commands::Convert(command) => command,
            Commands::Formats(command) => command,
            Commands::GetKey(command) => command,
        }
    }
}

/// Parses `args` (program name first) and runs the selected command.
///
/// Logging is not initialised here; the binary does that before calling in.
///
/// # Errors
/// Returns the command's error. A command line clap rejects becomes
/// `TransmogrifyError::InvalidArguments`.
pub fn run<I, T>(args: I, streams: &mut StdStreams<'_>) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)
        .map_err(|e| TransmogrifyError::InvalidArguments(e.to_string()))?;

    cli.command.command().execute(streams)
}

#[cfg(test)]
mod tests;
