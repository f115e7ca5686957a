use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::models::UnknownField;

/// Represents one CC-CEDICT headword record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub traditional: String,      // Traditional Chinese characters
    pub simplified: String,       // Simplified Chinese characters
    pub pinyin: String,           // Pinyin as written in the source, e.g. "mao1"
    pub definitions: Vec<String>, // English glosses, in source order
}

/// Named field of a `DictEntry`, used for typed projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Definitions,
    Pinyin,
    Simplified,
    Traditional,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Definitions,
        Field::Pinyin,
        Field::Simplified,
        Field::Traditional,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Definitions => "definitions",
            Field::Pinyin => "pinyin",
            Field::Simplified => "simplified",
            Field::Traditional => "traditional",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Borrowed value of a single entry field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    Definitions(&'a [String]),
    Text(&'a str),
}

impl DictEntry {
    /// Projects one named field out of the entry.
    pub fn field(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Definitions => FieldValue::Definitions(&self.definitions),
            Field::Pinyin => FieldValue::Text(&self.pinyin),
            Field::Simplified => FieldValue::Text(&self.simplified),
            Field::Traditional => FieldValue::Text(&self.traditional),
        }
    }
}
