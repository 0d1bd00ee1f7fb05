use std::io::{Read, Write};

use crate::Result;

/// The standard streams a command reads from and writes to.
///
/// The binary passes the locked process streams; tests pass in-memory
/// buffers.
pub struct StdStreams<'a> {
    /// Source for the `-` input placeholder.
    pub stdin: &'a mut dyn Read,

    /// Destination for command output and the `-` output placeholder.
    pub stdout: &'a mut dyn Write,
}

/// Trait defining the interface for all CLI commands.
///
/// Each command is its own clap argument struct, so by the time `execute`
/// runs every flag has been parsed and validated.
pub trait Command {
    /// Name the command is invoked by.
    fn name(&self) -> &'static str;

    /// Runs the command against the given streams.
    ///
    /// # Errors
    ///
    /// Returns `TransmogrifyError` for any failure, including:
    /// - Format resolution failures
    /// - Malformed input or unrepresentable output
    /// - I/O failures
    fn execute(&self, streams: &mut StdStreams<'_>) -> Result<()>;
}
