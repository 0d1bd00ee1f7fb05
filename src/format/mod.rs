//! Format registry.
//!
//! Maps format identifiers and file extensions to [`Format`] values, and
//! formats to the converter that loads and dumps them.

use std::{fmt, path::Path};

use clap::ValueEnum;
use tracing::debug;

use crate::{
    Result, TransmogrifyError,
    converter::{FormatConverter, JsonConverter, TomlConverter, YamlConverter},
};

/// A supported serialization format.
///
/// Declaration order is the order reported by the `formats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Format {
    /// JavaScript Object Notation.
    Json,
    /// Tom's Obvious Minimal Language.
    Toml,
    /// YAML Ain't Markup Language.
    Yaml,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Format; 3] = [Format::Json, Format::Toml, Format::Yaml];

    /// Canonical identifier of this format.
    pub fn id(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Toml => "toml",
            Format::Yaml => "yaml",
        }
    }

    /// File extensions, dot included, that select this format.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Format::Json => &[".json"],
            Format::Toml => &[".toml"],
            Format::Yaml => &[".yaml", ".yml"],
        }
    }

    /// All canonical identifiers joined with `", "`.
    pub fn joined() -> String {
        Self::ALL.map(Format::id).join(", ")
    }

    /// Infers the format from a path's extension.
    ///
    /// Matching is case-sensitive: `config.JSON` is not recognised.
    ///
    /// # Errors
    /// Returns `TransmogrifyError::UnknownFormat` if the path has no
    /// extension (this includes the `-` standard stream placeholder) or the
    /// extension is not one of `.json`, `.toml`, `.yaml`, `.yml`.
    pub fn for_path(path: &Path) -> Result<Format> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{ext}"))
            .ok_or_else(|| TransmogrifyError::UnknownFormat(path.display().to_string()))?;

        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&extension.as_str()))
            .ok_or(TransmogrifyError::UnknownFormat(extension))
    }

    /// Picks the explicit format if one was given, otherwise infers it from
    /// `path`.
    ///
    /// # Arguments
    /// * `explicit` - Format passed on the command line, if any
    /// * `path` - Path whose extension is used as a fallback
    /// * `role` - "input" or "output", used in the error message
    ///
    /// # Errors
    /// Returns `TransmogrifyError::FormatResolution` if no format was given
    /// and none can be inferred.
    pub fn resolve(explicit: Option<Format>, path: &Path, role: &'static str) -> Result<Format> {
        if let Some(format) = explicit {
            debug!(role, %format, "using explicit format");
            return Ok(format);
        }

        let format = Self::for_path(path).map_err(|_| TransmogrifyError::FormatResolution {
            role,
            path: path.display().to_string(),
        })?;

        debug!(role, %format, path = %path.display(), "inferred format from extension");
        Ok(format)
    }

    /// Returns a new converter bound to this format.
    pub fn converter(self) -> FormatConverter {
        match self {
            Format::Json => FormatConverter::Json(JsonConverter),
            Format::Toml => FormatConverter::Toml(TomlConverter),
            Format::Yaml => FormatConverter::Yaml(YamlConverter),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
