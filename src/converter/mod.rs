//! Format-specific load and dump implementations.

mod json;
mod toml;
mod yaml;

use std::io::{Read, Write};

use tracing::debug;

use crate::{Result, document::Document, format::Format};

pub use self::json::JsonConverter;
pub use self::toml::TomlConverter;
pub use self::yaml::YamlConverter;

/// Loads and dumps documents in one serialization format.
///
/// Implementors only provide the string-level [`parse`](Converter::parse) and
/// [`render`](Converter::render) steps; reading and writing whole streams is
/// shared.
pub trait Converter {
    /// The format this converter handles.
    fn format(&self) -> Format;

    /// Parses the complete text of a document.
    ///
    /// # Errors
    /// Returns `TransmogrifyError::Parse` if the text is malformed.
    fn parse(&self, text: &str) -> Result<Document>;

    /// Serializes a document to its complete text.
    ///
    /// # Errors
    /// Returns `TransmogrifyError::Serialize` if the document holds a shape
    /// this format cannot represent.
    fn render(&self, document: &Document) -> Result<String>;

    /// Reads `reader` to the end and parses the content.
    ///
    /// # Errors
    /// Returns `TransmogrifyError::Io` if the stream cannot be read or is not
    /// valid UTF-8, and `TransmogrifyError::Parse` on malformed content.
    fn load(&self, reader: &mut dyn Read) -> Result<Document> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        debug!(format = %self.format(), bytes = text.len(), "loading document");

        self.parse(&text)
    }

    /// Serializes `document` and writes all of it to `writer`.
    ///
    /// Serialization completes before the first byte is written, so a
    /// document the format cannot represent leaves `writer` untouched.
    ///
    /// # Errors
    /// Returns `TransmogrifyError::Serialize` if the document cannot be
    /// represented and `TransmogrifyError::Io` if writing fails.
    fn dump(&self, writer: &mut dyn Write, document: &Document) -> Result<()> {
        let text = self.render(document)?;
        debug!(format = %self.format(), bytes = text.len(), "dumping document");

        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// One converter per [`Format`], dispatched without boxing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatConverter {
    /// JSON via `serde_json`.
    Json(JsonConverter),
    /// TOML via `toml`.
    Toml(TomlConverter),
    /// YAML via `serde_yaml`.
    Yaml(YamlConverter),
}

macro_rules! dispatch {
    ($self:ident, $converter:ident => $call:expr) => {
        match $self {
            FormatConverter::Json($converter) => $call,
            FormatConverter::Toml($converter) => $call,
            FormatConverter::Yaml($converter) => $call,
        }
    };
}

impl Converter for FormatConverter {
    fn format(&self) -> Format {
        dispatch!(self, converter => converter.format())
    }

    fn parse(&self, text: &str) -> Result<Document> {
        dispatch!(self, converter => converter.parse(text))
    }

    fn render(&self, document: &Document) -> Result<String> {
        dispatch!(self, converter => converter.render(document))
    }
}
