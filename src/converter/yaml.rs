use serde_yaml::Value;

use super::Converter;
use crate::{
    Result, TransmogrifyError,
    document::{Document, Mapping},
    format::Format,
};

/// Converter for YAML documents.
///
/// Scalar mapping keys are stored by their textual form (`1: a` loads with
/// key `"1"`), and two keys that end up with the same text are rejected.
/// Sequence or mapping keys and explicitly tagged values have no counterpart
/// in the other formats and are rejected as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlConverter;

impl Converter for YamlConverter {
    fn format(&self) -> Format {
        Format::Yaml
    }

    fn parse(&self, text: &str) -> Result<Document> {
        let value: Value =
            serde_yaml::from_str(text).map_err(|e| TransmogrifyError::parse(Format::Yaml, e))?;

        Document::try_from(value)
    }

    fn render(&self, document: &Document) -> Result<String> {
        serde_yaml::to_string(document).map_err(|e| TransmogrifyError::serialize(Format::Yaml, e))
    }
}

impl TryFrom<Value> for Document {
    type Error = TransmogrifyError;

    fn try_from(value: Value) -> Result<Self> {
        let document = match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => Document::Integer(i),
                (None, Some(u)) => Document::Unsigned(u),
                (None, None) => Document::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Document::String(s),
            Value::Sequence(items) => Document::Sequence(
                items
                    .into_iter()
                    .map(Document::try_from)
                    .collect::<Result<_>>()?,
            ),
            Value::Mapping(mapping) => {
                let mut entries = Mapping::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let key = mapping_key(key)?;
                    if entries.contains_key(&key) {
                        return Err(unrepresentable(format!(
                            "duplicate key '{key}' after key normalisation"
                        )));
                    }
                    entries.insert(key, Document::try_from(value)?);
                }
                Document::Mapping(entries)
            }
            Value::Tagged(tagged) => {
                return Err(unrepresentable(format!("tagged value {}", tagged.tag)));
            }
        };

        Ok(document)
    }
}

fn mapping_key(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Sequence(_) => Err(unrepresentable("sequence used as a mapping key")),
        Value::Mapping(_) => Err(unrepresentable("mapping used as a mapping key")),
        Value::Tagged(tagged) => Err(unrepresentable(format!(
            "tagged value {} used as a mapping key",
            tagged.tag
        ))),
    }
}

fn unrepresentable(what: impl std::fmt::Display) -> TransmogrifyError {
    TransmogrifyError::parse(Format::Yaml, format!("{what} is not representable"))
}
