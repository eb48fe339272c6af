//! Price-list consolidation: reads heterogeneous CSV price lists, normalizes
//! their columns to name/price/weight, ranks products by price per unit of
//! weight and exports the consolidated table as HTML.

pub mod catalog;
pub mod config;
pub mod exporter;
pub mod ingest;
pub mod model;
pub mod normalizer;
pub mod parser;
pub mod shell;
pub mod source;
pub mod utils;

pub use catalog::Catalog;
pub use model::{IngestSummary, PricedRecord, Record};
