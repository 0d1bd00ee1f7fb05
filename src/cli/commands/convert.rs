use std::path::PathBuf;

use clap::Args;
use tracing::{info, instrument};

use crate::{
    Result,
    cli::{Command, StdStreams},
    converter::Converter,
    format::Format,
    stream::{STD_STREAM_PLACEHOLDER, StreamRef},
};

/// Command for converting a document from one format to another.
///
/// # Example Usage
///
/// ```bash
/// transmogrify convert -i config.json -o config.toml
/// cat config.yaml | transmogrify convert -F yaml -f json
/// ```
#[derive(Debug, Clone, Args)]
pub struct ConvertCommand {
    /// File to read, or `-` for standard input
    #[arg(short = 'i', long, default_value = STD_STREAM_PLACEHOLDER)]
    pub input: PathBuf,

    /// File to write, or `-` for standard output
    #[arg(short = 'o', long, default_value = STD_STREAM_PLACEHOLDER)]
    pub output: PathBuf,

    /// Format of the input; inferred from the input extension when omitted
    #[arg(short = 'F', long, value_enum)]
    pub input_format: Option<Format>,

    /// Format of the output; inferred from the output extension when omitted
    #[arg(short = 'f', long, value_enum)]
    pub output_format: Option<Format>,
}

impl Command for ConvertCommand {
    fn name(&self) -> &'static str {
        "convert"
    }

    /// Loads the input with one converter and dumps it with another.
    ///
    /// Both formats are resolved before any stream is opened, so a missing
    /// format never leaves a half-written output behind.
    ///
    /// # Errors
    ///
    /// * `TransmogrifyError::FormatResolution` - If a format is neither given nor inferable
    /// * `TransmogrifyError::Parse` - If the input is malformed
    /// * `TransmogrifyError::Serialize` - If the output format cannot hold the document
    /// * `TransmogrifyError::IoError` - If a file cannot be read or written
    #[instrument(skip_all, fields(input = %self.input.display(), output = %self.output.display()))]
    fn execute(&self, streams: &mut StdStreams<'_>) -> Result<()> {
        let input_format = Format::resolve(self.input_format, &self.input, "input")?;
        let output_format = Format::resolve(self.output_format, &self.output, "output")?;

        let loader = input_format.converter();
        let dumper = output_format.converter();

        let source = StreamRef::input(&self.input);
        let destination = StreamRef::output(&self.output);

        let document = source.read_with(&mut *streams.stdin, |reader| loader.load(reader))?;
        destination.write_with(&mut *streams.stdout, |writer| dumper.dump(writer, &document))?;

        info!(%source, %destination, from = %input_format, to = %output_format, "converted");
        Ok(())
    }
}
