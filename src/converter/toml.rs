use toml::{Table, Value};

use super::Converter;
use crate::{Result, TransmogrifyError, document::Document, format::Format};

/// Converter for TOML documents.
///
/// TOML has no null, caps integers at `i64::MAX` and requires a table at the
/// root. Dumping a document that breaks any of these fails instead of
/// producing invalid output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TomlConverter;

impl Converter for TomlConverter {
    fn format(&self) -> Format {
        Format::Toml
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let table: Table =
            toml::from_str(text).map_err(|e| TransmogrifyError::parse(Format::Toml, e))?;

        Ok(Value::Table(table).into())
    }

    fn render(&self, document: &Document) -> Result<String> {
        if document.as_mapping().is_none() {
            return Err(TransmogrifyError::serialize(
                Format::Toml,
                format!("root must be a table, found {}", document.type_name()),
            ));
        }

        ensure_in_range(document)?;

        toml::to_string(document).map_err(|e| TransmogrifyError::serialize(Format::Toml, e))
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Document::String(s),
            Value::Integer(i) => Document::Integer(i),
            Value::Float(f) => Document::Float(f),
            Value::Boolean(b) => Document::Bool(b),
            Value::Datetime(datetime) => Document::String(datetime.to_string()),
            Value::Array(items) => Document::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Table(table) => Document::Mapping(
                table
                    .into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

/// `toml` writes a `u64` as-is, which no TOML reader accepts back.
fn ensure_in_range(document: &Document) -> Result<()> {
    match document {
        Document::Unsigned(u) => Err(TransmogrifyError::serialize(
            Format::Toml,
            format!("integer {u} is out of range for a 64-bit signed integer"),
        )),
        Document::Sequence(items) => items.iter().try_for_each(ensure_in_range),
        Document::Mapping(mapping) => mapping.values().try_for_each(ensure_in_range),
        _ => Ok(()),
    }
}
