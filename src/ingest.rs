// Folder ingestion: discovery -> parsing -> catalog
use crate::catalog::Catalog;
use crate::model::IngestSummary;
use crate::parser::Parser;
use crate::source::PriceSource;
use std::path::PathBuf;
use tracing::{debug, info};

/// Loads every discovered price list into `catalog`.
///
/// Files that cannot be read or whose headers do not resolve are skipped
/// whole; a failing file never contributes a partial set of records.
pub fn load_prices<S, P>(source: &S, parser: &P, catalog: &mut Catalog) -> IngestSummary
where
    S: PriceSource + ?Sized,
    P: Parser,
{
    load_files(source.discover(), parser, catalog)
}

pub fn load_files<P: Parser>(
    paths: impl IntoIterator<Item = PathBuf>,
    parser: &P,
    catalog: &mut Catalog,
) -> IngestSummary {
    let mut summary = IngestSummary::default();

    for path in paths {
        summary.files_seen += 1;
        match parser.parse_path(&path) {
            Ok(parsed) => {
                debug!(
                    "{}: {} record(s), {} row(s) skipped",
                    path.display(),
                    parsed.records.len(),
                    parsed.rows_skipped
                );
                summary.files_ingested += 1;
                summary.rows_skipped += parsed.rows_skipped;
                summary.records_loaded += parsed.records.len();
                catalog.extend(parsed.records);
            }
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                summary.files_skipped += 1;
            }
        }
    }

    info!(
        "Loaded {} record(s) from {} of {} file(s)",
        summary.records_loaded, summary.files_ingested, summary.files_seen
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::CsvPriceParser;
    use crate::source::FolderSource;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn bad_files_are_skipped_and_the_run_continues() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("price_1.csv"), "Товар,Цена,Вес\nA,10,2\n").unwrap();
        fs::write(dir.path().join("price_2.csv"), "Товар,Цена\nB,10\n").unwrap();
        fs::write(dir.path().join("price_3.csv"), b"\xff\xfe,\x00\n").unwrap();
        fs::write(dir.path().join("price_4.csv"), "Наименование,Розница,Масса\nC,9,3\nD,x,1\n").unwrap();
        // good rows ahead of an undecodable one: none of them survive
        let mut broken = "Товар,Цена,Вес\nE,10,2\nF,12,2\n".as_bytes().to_vec();
        broken.extend_from_slice(b"\xd2\xee,5,1\nG,20,4\n");
        fs::write(dir.path().join("price_5.csv"), broken).unwrap();

        let mut catalog = Catalog::new();
        let summary = load_prices(&FolderSource::new(dir.path()), &CsvPriceParser::new(), &mut catalog);

        assert_eq!(
            summary,
            IngestSummary {
                files_seen: 5,
                files_ingested: 2,
                files_skipped: 3,
                rows_skipped: 1,
                records_loaded: 2,
            }
        );
        let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn vanished_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let mut catalog = Catalog::new();
        let summary = load_files(
            vec![dir.path().join("price_gone.csv")],
            &CsvPriceParser::new(),
            &mut catalog,
        );
        assert_eq!(summary.files_skipped, 1);
        assert!(catalog.is_empty());
    }
}
