//! Resolves dictionary datasets and feeds them to the index.
//!
//! The default dataset is a gzip-compressed CC-CEDICT excerpt compiled into
//! the crate. Alternate datasets are read from disk; a `.gz` extension selects
//! gzip decoding, anything else is read as plain UTF-8 text.

use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;

use crate::data::models::{DictError, Result};
use crate::features::dictionary::Dictionary;

/// Gzip-compressed CC-CEDICT text bundled with the crate.
pub static BUNDLED_DATASET: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/cedict_ts.u8.gz"));

pub struct DatasetRepository;

impl DatasetRepository {
    pub fn load_bundled() -> Result<Dictionary> {
        debug!("Decoding bundled dataset ({} compressed bytes)", BUNDLED_DATASET.len());
        Self::load_gzip(BUNDLED_DATASET)
    }

    pub fn load_path(path: &Path) -> Result<Dictionary> {
        let load_error = |source| DictError::Load {
            path: path.to_path_buf(),
            source,
        };

        if path.extension().is_some_and(|ext| ext == "gz") {
            debug!("Decoding gzip dataset {}", path.display());
            let file = fs::File::open(path).map_err(load_error)?;
            Self::load_gzip(file)
        } else {
            debug!("Reading plain dataset {}", path.display());
            let content = fs::read_to_string(path).map_err(load_error)?;
            Dictionary::from_lines(content.lines())
        }
    }

    /// Gunzips `compressed` in one pass and builds the index from its lines.
    pub fn load_gzip<R: Read>(compressed: R) -> Result<Dictionary> {
        let mut bytes = Vec::new();
        GzDecoder::new(compressed)
            .read_to_end(&mut bytes)
            .map_err(|e| DictError::Decode(format!("gzip decompression failed: {}", e)))?;
        debug!("Decompressed dataset to {} bytes", bytes.len());

        let content = String::from_utf8(bytes)
            .map_err(|e| DictError::Decode(format!("dataset is not valid UTF-8: {}", e)))?;
        Dictionary::from_lines(content.lines())
    }
}
