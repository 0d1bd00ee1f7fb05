//! Stream references: the process's standard streams or a file on disk.

use std::{
    fmt,
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::{Result, TransmogrifyError};

/// Path value that stands for the standard input or output stream.
pub const STD_STREAM_PLACEHOLDER: &str = "-";

/// Where a command reads from or writes to.
///
/// Resolved once from a command-line path. File handles are only held for
/// the duration of [`read_with`](StreamRef::read_with) or
/// [`write_with`](StreamRef::write_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamRef {
    /// The process's standard input.
    Stdin,
    /// The process's standard output.
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl StreamRef {
    /// Resolves an input path, mapping `-` to standard input.
    pub fn input(path: &Path) -> Self {
        if path == Path::new(STD_STREAM_PLACEHOLDER) {
            StreamRef::Stdin
        } else {
            StreamRef::File(path.to_path_buf())
        }
    }

    /// Resolves an output path, mapping `-` to standard output.
    pub fn output(path: &Path) -> Self {
        if path == Path::new(STD_STREAM_PLACEHOLDER) {
            StreamRef::Stdout
        } else {
            StreamRef::File(path.to_path_buf())
        }
    }

    /// Opens the stream for reading and hands it to `read`.
    ///
    /// A file is opened right before `read` runs and closed when it returns,
    /// whether it succeeded or not.
    ///
    /// # Arguments
    /// * `stdin` - Stream used when this reference is [`StreamRef::Stdin`]
    /// * `read` - Consumes the opened stream
    ///
    /// # Errors
    /// Returns `TransmogrifyError::IoError` if the file cannot be opened or
    /// this reference is standard output, and any error `read` returns.
    pub fn read_with<T>(
        &self,
        stdin: &mut dyn Read,
        read: impl FnOnce(&mut dyn Read) -> Result<T>,
    ) -> Result<T> {
        match self {
            StreamRef::Stdin => {
                debug!("reading from standard input");
                read(stdin)
            }
            StreamRef::File(path) => {
                debug!(path = %path.display(), "reading file");
                let mut file = File::open(path).map_err(|e| TransmogrifyError::io(e, path))?;
                read(&mut file).map_err(|e| with_path(e, path))
            }
            StreamRef::Stdout => Err(TransmogrifyError::io(
                "standard output cannot be read",
                STD_STREAM_PLACEHOLDER,
            )),
        }
    }

    /// Opens the stream for writing and hands it to `write`.
    ///
    /// A file destination is written through a temporary file in the same
    /// directory which replaces the destination only after `write` returned
    /// successfully. On any failure the destination keeps its previous
    /// content.
    ///
    /// # Arguments
    /// * `stdout` - Stream used when this reference is [`StreamRef::Stdout`]
    /// * `write` - Produces the output
    ///
    /// # Errors
    /// Returns `TransmogrifyError::IoError` if the temporary file cannot be
    /// created or moved into place, or this reference is standard input, and
    /// any error `write` returns.
    pub fn write_with(
        &self,
        stdout: &mut dyn Write,
        write: impl FnOnce(&mut dyn Write) -> Result<()>,
    ) -> Result<()> {
        match self {
            StreamRef::Stdout => {
                debug!("writing to standard output");
                write(stdout)
            }
            StreamRef::File(path) => write_atomically(path, write),
            StreamRef::Stdin => Err(TransmogrifyError::io(
                "standard input cannot be written",
                STD_STREAM_PLACEHOLDER,
            )),
        }
    }
}

impl fmt::Display for StreamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamRef::Stdin => f.write_str("<stdin>"),
            StreamRef::Stdout => f.write_str("<stdout>"),
            StreamRef::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn write_atomically(path: &Path, write: impl FnOnce(&mut dyn Write) -> Result<()>) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| TransmogrifyError::io(e, dir))?;
    debug!(path = %path.display(), temp = %temp.path().display(), "staging output");

    write(&mut temp).map_err(|e| with_path(e, path))?;
    keep_permissions(path, &temp)?;

    temp.persist(path)
        .map_err(|e| TransmogrifyError::io(e.error, path))?;

    info!(path = %path.display(), "wrote output");
    Ok(())
}

/// Gives the staged file the destination's permissions, or the usual
/// `rw-r--r--` for a new file instead of the private mode temp files get.
fn keep_permissions(path: &Path, temp: &NamedTempFile) -> Result<()> {
    let permissions = match fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => default_permissions(temp)?,
    };

    temp.as_file()
        .set_permissions(permissions)
        .map_err(|e| TransmogrifyError::io(e, temp.path()))
}

#[cfg(unix)]
fn default_permissions(_temp: &NamedTempFile) -> Result<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Ok(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(temp: &NamedTempFile) -> Result<fs::Permissions> {
    temp.as_file()
        .metadata()
        .map(|metadata| metadata.permissions())
        .map_err(|e| TransmogrifyError::io(e, temp.path()))
}

/// Attaches the file path to bare I/O errors raised while using a file.
fn with_path(error: TransmogrifyError, path: &Path) -> TransmogrifyError {
    match error {
        TransmogrifyError::Io(e) => TransmogrifyError::io(e, path),
        other => other,
    }
}
