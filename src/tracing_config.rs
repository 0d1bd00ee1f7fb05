use std::{env, fmt};

use clap::ValueEnum;
use tracing_subscriber::{
    EnvFilter, fmt as tracing_fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable selecting the log output format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "TRANSMOGRIFY_LOG_FORMAT";

/// Logging level for the application.
///
/// Controls the verbosity of diagnostics on stderr, from errors only
/// to detailed trace information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// Only show errors.
    Error,

    /// Show warnings and errors (default level).
    #[default]
    Warn,

    /// Also show which files were read and written.
    Info,

    /// Also show format resolution and document sizes.
    Debug,

    /// Show everything, including dependency internals.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Initialize tracing for a command-line run
///
/// All log output goes to stderr so stdout only carries command output.
/// Uses the RUST_LOG environment variable if set, otherwise `level`.
/// Emits JSON lines when TRANSMOGRIFY_LOG_FORMAT is `json`.
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_cli_mode(level: LogLevel) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "pretty".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    tracing_fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    tracing_fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(())
}
