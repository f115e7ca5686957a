pub mod dataset;

pub use dataset::{BUNDLED_DATASET, DatasetRepository};
