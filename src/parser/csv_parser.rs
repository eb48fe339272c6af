// CSV price-list parsing
use crate::model::{HeaderRole, IngestError, ParsedFile, Record, RowError};
use crate::normalizer::{resolve_headers, ResolvedColumns};
use crate::utils::file_label;
use csv::{ReaderBuilder, StringRecord};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, trace};

pub trait Parser {
    /// Parses one price list. `source` tags every record produced.
    fn parse<R: Read>(&self, reader: R, source: &str) -> Result<ParsedFile, IngestError>;

    fn parse_path(&self, path: &Path) -> Result<ParsedFile, IngestError> {
        let file = File::open(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(file, &file_label(path))
    }
}

pub struct CsvPriceParser {
    delimiter: u8,
}

impl CsvPriceParser {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvPriceParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for CsvPriceParser {
    fn parse<R: Read>(&self, reader: R, source: &str) -> Result<ParsedFile, IngestError> {
        let csv_error = |e: csv::Error| IngestError::Csv {
            file: source.to_string(),
            source: e,
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mapping = resolve_headers(reader.headers().map_err(csv_error)?.iter());
        let columns = mapping
            .complete()
            .ok_or_else(|| IngestError::UnresolvedHeaders {
                file: source.to_string(),
                missing: mapping.missing(),
            })?;
        debug!("{}: columns resolved as {:?}", source, columns);

        let mut parsed = ParsedFile::default();
        for (idx, row) in reader.records().enumerate() {
            let row = row.map_err(csv_error)?;
            match parse_row(&row, &columns, source) {
                Ok(record) => parsed.records.push(record),
                Err(e) => {
                    // +2: header line plus 1-based numbering
                    trace!("{}: skipping line {}: {}", source, idx + 2, e);
                    parsed.rows_skipped += 1;
                }
            }
        }

        Ok(parsed)
    }
}

fn parse_row(row: &StringRecord, columns: &ResolvedColumns, source: &str) -> Result<Record, RowError> {
    let name = field(row, columns.name, HeaderRole::Name)?;
    let price = field(row, columns.price, HeaderRole::Price)?;
    let weight = field(row, columns.weight, HeaderRole::Weight)?;

    Ok(Record {
        name: name.to_string(),
        price: parse_amount(price, HeaderRole::Price)?,
        weight: parse_amount(weight, HeaderRole::Weight)?,
        source: source.to_string(),
    })
}

fn field(row: &StringRecord, idx: usize, role: HeaderRole) -> Result<&str, RowError> {
    match row.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(RowError::MissingField(role)),
    }
}

/// Parses a price or weight. Only finite values above zero are accepted.
pub fn parse_amount(value: &str, role: HeaderRole) -> Result<f64, RowError> {
    let not_a_number = || RowError::NotANumber {
        role,
        value: value.to_string(),
    };
    let amount = strip_digit_separators(value)
        .ok_or_else(not_a_number)?
        .parse::<f64>()
        .map_err(|_| not_a_number())?;
    if !amount.is_finite() {
        return Err(not_a_number());
    }
    if amount <= 0.0 {
        return Err(RowError::NotPositive { role, value: amount });
    }
    Ok(amount)
}

/// Drops `_` digit grouping (`1_000`). An underscore must sit between two digits.
fn strip_digit_separators(value: &str) -> Option<Cow<'_, str>> {
    if !value.contains('_') {
        return Some(Cow::Borrowed(value));
    }
    let bytes = value.as_bytes();
    let grouped = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    grouped.then(|| Cow::Owned(value.replace('_', "")))
}
