use std::path::PathBuf;

/// Supplies the price lists to ingest, in the order they should be read.
pub trait PriceSource {
    fn discover(&self) -> Vec<PathBuf>;
}
