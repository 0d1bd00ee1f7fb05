use serde_json::Value;

use super::Converter;
use crate::{Result, TransmogrifyError, document::Document, format::Format};

/// Converter for JSON documents.
///
/// Output is pretty-printed with a two-space indent and ends with a newline.
/// Infinite and NaN floats cannot be written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonConverter;

impl Converter for JsonConverter {
    fn format(&self) -> Format {
        Format::Json
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| TransmogrifyError::parse(Format::Json, e))?;

        Ok(value.into())
    }

    fn render(&self, document: &Document) -> Result<String> {
        ensure_finite(document)?;

        let mut text = serde_json::to_string_pretty(document)
            .map_err(|e| TransmogrifyError::serialize(Format::Json, e))?;
        text.push('\n');

        Ok(text)
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Document::Integer(i),
                (None, Some(u)) => Document::Unsigned(u),
                (None, None) => Document::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(map) => Document::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, value.into()))
                    .collect(),
            ),
        }
    }
}

/// JSON has no literal for infinities or NaN; `serde_json` would write `null`.
fn ensure_finite(document: &Document) -> Result<()> {
    match document {
        Document::Float(f) if !f.is_finite() => Err(TransmogrifyError::serialize(
            Format::Json,
            format!("non-finite float {f} is not representable"),
        )),
        Document::Sequence(items) => items.iter().try_for_each(ensure_finite),
        Document::Mapping(mapping) => mapping.values().try_for_each(ensure_finite),
        _ => Ok(()),
    }
}
