use std::collections::HashMap;
use std::io::BufRead;

use log::{debug, error, info, trace};

use crate::data::models::{DictEntry, DictError, Field, FieldValue, Result};
use crate::data::repositories::DatasetRepository;
use crate::parser::parse_line;

/// In-memory CC-CEDICT index.
///
/// Every parsed entry is stored once, in source order, and indexed under both
/// its simplified and its traditional headword. When several lines share a
/// headword the index keeps the position of the *last* one (last write wins);
/// the earlier entries are still part of [`Dictionary::get_entries`].
///
/// A dictionary only comes out of a completed build; there is no empty
/// constructor.
///
/// ```compile_fail
/// let dict = cedict_lookup::Dictionary::default();
/// ```
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    simplified_index: HashMap<String, usize>,
    traditional_index: HashMap<String, usize>,
}

impl Dictionary {
    /// Loads the CC-CEDICT excerpt bundled with the crate.
    ///
    /// The excerpt is a small sample of the full dictionary; point
    /// [`Config`](crate::Config) at a complete `cedict_ts.u8(.gz)` for real use.
    pub fn new() -> Result<Self> {
        DatasetRepository::load_bundled()
    }

    /// Builds the index from already decoded lines.
    ///
    /// Fails on the first malformed line; nothing is returned in that case.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines.into_iter().map(Ok))
    }

    /// Builds the index from a reader, propagating read and decode errors.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::build(reader.lines())
    }

    fn build<I, S>(lines: I) -> Result<Self>
    where
        I: Iterator<Item = std::io::Result<S>>,
        S: AsRef<str>,
    {
        debug!("Building dictionary index");
        let mut dict = Dictionary {
            entries: Vec::new(),
            simplified_index: HashMap::new(),
            traditional_index: HashMap::new(),
        };

        for (i, line) in lines.enumerate() {
            let line = line?;
            let line = line.as_ref();
            match parse_line(line) {
                Ok(Some(entry)) => dict.insert(entry),
                Ok(None) => continue,
                Err(source) => {
                    error!("Malformed dictionary line {}: {}", i + 1, source);
                    return Err(DictError::Malformed {
                        line_number: i + 1,
                        line: line.to_string(),
                        source,
                    });
                }
            }
        }

        info!(
            "Dictionary loaded: {} entries, {} simplified keys, {} traditional keys",
            dict.entries.len(),
            dict.simplified_index.len(),
            dict.traditional_index.len()
        );
        Ok(dict)
    }

    fn insert(&mut self, entry: DictEntry) {
        let i = self.entries.len();

        if let Some(prev) = self.simplified_index.insert(entry.simplified.clone(), i) {
            trace!("Simplified key {} moved from entry {} to {}", entry.simplified, prev, i);
        }
        if let Some(prev) = self.traditional_index.insert(entry.traditional.clone(), i) {
            trace!("Traditional key {} moved from entry {} to {}", entry.traditional, prev, i);
        }

        self.entries.push(entry);
    }

    /// Looks up a headword, simplified form first, then traditional.
    pub fn get_entry(&self, headword: &str) -> Option<&DictEntry> {
        self.simplified_index
            .get(headword)
            .or_else(|| self.traditional_index.get(headword))
            .map(|&i| &self.entries[i])
    }

    pub fn get_field(&self, headword: &str, field: Field) -> Option<FieldValue<'_>> {
        self.get_entry(headword).map(|entry| entry.field(field))
    }

    pub fn get_definitions(&self, headword: &str) -> Option<&[String]> {
        self.get_entry(headword).map(|entry| entry.definitions.as_slice())
    }

    pub fn get_pinyin(&self, headword: &str) -> Option<&str> {
        self.get_entry(headword).map(|entry| entry.pinyin.as_str())
    }

    pub fn get_simplified(&self, headword: &str) -> Option<&str> {
        self.get_entry(headword).map(|entry| entry.simplified.as_str())
    }

    pub fn get_traditional(&self, headword: &str) -> Option<&str> {
        self.get_entry(headword).map(|entry| entry.traditional.as_str())
    }

    /// All entries in source order, duplicates included.
    pub fn get_entries(&self) -> &[DictEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
