// Price-list parsers
pub mod csv_parser;

pub use csv_parser::{CsvPriceParser, Parser};
