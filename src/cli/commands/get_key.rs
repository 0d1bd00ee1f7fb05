use std::path::PathBuf;

use clap::Args;
use tracing::{debug, instrument};

use crate::{
    Result, TransmogrifyError,
    cli::{Command, StdStreams, formatting::format_value},
    converter::Converter,
    format::Format,
    stream::{STD_STREAM_PLACEHOLDER, StreamRef},
};

/// Command for printing the value stored under one top-level key.
///
/// The key is matched literally: `a.b` looks up a key named `a.b`, it does
/// not descend into `a`.
///
/// # Example Usage
///
/// ```bash
/// transmogrify get-key -i Cargo.toml package
/// echo '{"hello": "world"}' | transmogrify get-key -F json hello
/// ```
#[derive(Debug, Clone, Args)]
pub struct GetKeyCommand {
    /// File to read, or `-` for standard input
    #[arg(short = 'i', long, default_value = STD_STREAM_PLACEHOLDER)]
    pub input: PathBuf,

    /// Format of the input; inferred from the input extension when omitted
    #[arg(short = 'F', long, value_enum)]
    pub input_format: Option<Format>,

    /// Top-level key to look up
    pub key: String,
}

impl Command for GetKeyCommand {
    fn name(&self) -> &'static str {
        "get-key"
    }

    /// Loads the input and prints the value under `key`.
    ///
    /// # Errors
    ///
    /// * `TransmogrifyError::NotAMapping` - If the document root is not a mapping
    /// * `TransmogrifyError::KeyNotFound` - If the key is absent
    /// * Any error loading the input, as for `convert`
    #[instrument(skip_all, fields(input = %self.input.display(), key = %self.key))]
    fn execute(&self, streams: &mut StdStreams<'_>) -> Result<()> {
        let format = Format::resolve(self.input_format, &self.input, "input")?;
        let loader = format.converter();

        let document =
            StreamRef::input(&self.input).read_with(&mut *streams.stdin, |reader| loader.load(reader))?;

        if document.as_mapping().is_none() {
            return Err(TransmogrifyError::NotAMapping {
                found: document.type_name(),
            });
        }

        let value = document
            .get(&self.key)
            .ok_or_else(|| TransmogrifyError::KeyNotFound {
                key: self.key.clone(),
            })?;

        debug!(kind = value.type_name(), "found key");
        writeln!(streams.stdout, "{}", format_value(value))?;
        Ok(())
    }
}
