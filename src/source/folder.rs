use crate::source::traits::PriceSource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Lists `*.csv` files whose name mentions "price" in a single folder.
pub struct FolderSource {
    root: PathBuf,
}

impl FolderSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Name filter for price lists: contains "price" (any case) and has a `.csv` extension.
pub fn is_price_list(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    is_csv && name.to_lowercase().contains("price")
}

impl PriceSource for FolderSource {
    fn discover(&self) -> Vec<PathBuf> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot list {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_price_list(path))
            .collect();

        // read_dir order is platform dependent
        files.sort();
        debug!("Discovered {} price list(s) in {}", files.len(), self.root.display());
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("price.csv", true)]
    #[case("Supplier_PRICE_2024.csv", true)]
    #[case("prices.CSV", true)]
    #[case("price.xlsx", false)]
    #[case("catalog.csv", false)]
    #[case("price", false)]
    #[case("price.csv.bak", false)]
    fn name_filter(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_price_list(Path::new(name)), expected);
    }

    #[test]
    fn discovers_sorted_matching_files_only() {
        let dir = TempDir::new().unwrap();
        for name in ["price_b.csv", "notes.csv", "Price_a.csv", "price.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("price_dir.csv")).unwrap();

        let found: Vec<String> = FolderSource::new(dir.path())
            .discover()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(found, vec!["Price_a.csv", "price_b.csv"]);
    }

    #[test]
    fn missing_folder_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let source = FolderSource::new(dir.path().join("does-not-exist"));
        assert!(source.discover().is_empty());
    }
}
