// Core structs: Record, PricedRecord, IngestSummary and the error types
use std::path::PathBuf;
use thiserror::Error;

/// One validated price-list row. Never mutated after ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    pub source: String,
}

impl Record {
    /// Price per unit of weight. `weight` is positive for every ingested record.
    pub fn unit_price(&self) -> f64 {
        self.price / self.weight
    }
}

/// A record paired with its derived unit price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedRecord<'a> {
    pub record: &'a Record,
    pub unit_price: f64,
}

impl<'a> From<&'a Record> for PricedRecord<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            record,
            unit_price: record.unit_price(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderRole {
    Name,
    Price,
    Weight,
}

/// Outcome of parsing a single file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParsedFile {
    pub records: Vec<Record>,
    pub rows_skipped: usize,
}

/// Counters for a whole folder scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_seen: usize,
    pub files_ingested: usize,
    pub files_skipped: usize,
    pub rows_skipped: usize,
    pub records_loaded: usize,
}

/// File-level failures. The run skips the file and continues.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{file}: missing {missing:?} column(s)")]
    UnresolvedHeaders {
        file: String,
        missing: Vec<HeaderRole>,
    },
}

/// Row-level failures. The row is dropped and the file continues.
#[derive(Debug, Error, PartialEq)]
pub enum RowError {
    #[error("field {0:?} is empty")]
    MissingField(HeaderRole),
    #[error("field {role:?} is not a number: {value:?}")]
    NotANumber { role: HeaderRole, value: String },
    #[error("field {role:?} must be positive, got {value}")]
    NotPositive { role: HeaderRole, value: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("delimiter must be a single ASCII character, got {0:?}")]
    Delimiter(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
