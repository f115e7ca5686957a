//! Exact-match lookups over the CC-CEDICT Chinese-English dictionary.
//!
//! The dictionary is parsed once into memory and indexed by both the
//! simplified and the traditional headword.
//!
//! [`Dictionary::new`] loads a bundled *sample* of CC-CEDICT (a few dozen
//! entries), enough for the examples and tests. For the full dictionary,
//! download `cedict_1_0_ts_utf-8_mdbg.txt.gz` from MDBG and load it with
//! [`DatasetRepository::load_path`] or by setting `CEDICT_PATH` for
//! [`Config::from_env`].
//!
//! ```no_run
//! use cedict_lookup::Dictionary;
//!
//! let dict = Dictionary::new()?;
//! assert_eq!(dict.get_pinyin("猫"), Some("mao1"));
//! assert_eq!(dict.get_traditional("猫"), Some("貓"));
//! # Ok::<(), cedict_lookup::DictError>(())
//! ```

pub mod config;
pub mod data;
pub mod features;
pub mod parser;

pub use config::Config;
pub use data::models::{DictEntry, DictError, Field, FieldValue, ParseError, Result, UnknownField};
pub use data::repositories::DatasetRepository;
pub use features::dictionary::Dictionary;
pub use parser::parse_line;
