//! In-memory document tree shared by every converter.
//!
//! Each converter parses into its library's native value type and then
//! normalises that value into a [`Document`], so that any loaded document can
//! be handed to any other converter for dumping.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Ordered mapping from string keys to documents.
pub type Mapping = IndexMap<String, Document>;

/// A structured data value.
///
/// Mappings keep the key order of the source document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    /// An absent value (`null` in JSON, `~` in YAML). TOML has no equivalent.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number without a fractional part that fits in an `i64`.
    Integer(i64),
    /// A whole number above `i64::MAX`. TOML cannot hold these.
    Unsigned(u64),
    /// Any other number.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered sequence of documents.
    Sequence(Vec<Document>),
    /// A mapping from string keys to documents.
    Mapping(Mapping),
}

impl Document {
    /// Looks up `key` in a mapping document.
    ///
    /// Only top-level keys are considered; dots and other separators have no
    /// special meaning. Returns `None` for missing keys and for documents that
    /// are not mappings.
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Returns the inner mapping if this document is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Short human-readable name of this document's kind, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "boolean",
            Document::Integer(_) | Document::Unsigned(_) => "integer",
            Document::Float(_) => "float",
            Document::String(_) => "string",
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Integer(i) => serializer.serialize_i64(*i),
            Document::Unsigned(u) => serializer.serialize_u64(*u),
            Document::Float(f) => serializer.serialize_f64(*f),
            Document::String(s) => serializer.serialize_str(s),
            Document::Sequence(items) => items.serialize(serializer),
            Document::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Integer(value)
    }
}

impl From<u64> for Document {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Document::Unsigned(value), Document::Integer)
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Float(value)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl<T: Into<Document>> From<Vec<T>> for Document {
    fn from(values: Vec<T>) -> Self {
        Document::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Document>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Document::Mapping(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
