pub mod dictionary_models;
pub mod parser_model;

pub use dictionary_models::{DictError, ParseError, Result, UnknownField};
pub use parser_model::{DictEntry, Field, FieldValue};
