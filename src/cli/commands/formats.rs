use clap::Args;

use crate::{
    Result,
    cli::{Command, StdStreams},
    format::Format,
};

/// Command for listing the supported formats.
#[derive(Debug, Clone, Default, Args)]
pub struct FormatsCommand {
    /// Also list the file extensions recognised for each format
    #[arg(long)]
    pub extensions: bool,
}

impl Command for FormatsCommand {
    fn name(&self) -> &'static str {
        "formats"
    }

    fn execute(&self, streams: &mut StdStreams<'_>) -> Result<()> {
        if !self.extensions {
            writeln!(streams.stdout, "{}", Format::joined())?;
            return Ok(());
        }

        for format in Format::ALL {
            writeln!(streams.stdout, "{format}: {}", format.extensions().join(", "))?;
        }
        Ok(())
    }
}
