use std::env;
use std::path::PathBuf;

use log::info;

use crate::data::models::Result;
use crate::data::repositories::DatasetRepository;
use crate::features::dictionary::Dictionary;

/// Environment variable naming an alternate dataset file
pub const DATASET_PATH_VAR: &str = "CEDICT_PATH";

/// Loader configuration, resolved from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub dataset_path: Option<PathBuf>, // None selects the bundled dataset
}

impl Config {
    /// Reads `CEDICT_PATH` from the process environment.
    pub fn from_env() -> Self {
        Self::from_var(env::var_os(DATASET_PATH_VAR).map(PathBuf::from))
    }

    fn from_var(dataset_path: Option<PathBuf>) -> Self {
        Config {
            dataset_path: dataset_path.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    pub fn load_dictionary(&self) -> Result<Dictionary> {
        match &self.dataset_path {
            Some(path) => {
                info!("Loading dictionary from {}", path.display());
                DatasetRepository::load_path(path)
            }
            None => {
                info!("Loading bundled dictionary");
                DatasetRepository::load_bundled()
            }
        }
    }
}
