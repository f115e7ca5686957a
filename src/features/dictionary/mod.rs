mod index;

pub use index::Dictionary;
