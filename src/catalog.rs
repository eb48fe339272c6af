// In-memory price catalog and unit-price search
use crate::model::{PricedRecord, Record};

/// All records of a run, in ingestion order.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = Record>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Every record with its unit price, in ingestion order.
    pub fn entries(&self) -> Vec<PricedRecord<'_>> {
        self.records.iter().map(PricedRecord::from).collect()
    }

    /// Records whose name contains `query` (case-insensitive), cheapest per unit first.
    ///
    /// An empty query matches everything. Records with equal unit price keep
    /// their ingestion order.
    pub fn search(&self, query: &str) -> Vec<PricedRecord<'_>> {
        let needle = query.to_lowercase();
        let mut hits: Vec<PricedRecord<'_>> = self
            .records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .map(PricedRecord::from)
            .collect();
        // sort_by is stable
        hits.sort_by(|a, b| a.unit_price.total_cmp(&b.unit_price));
        hits
    }
}

impl FromIterator<Record> for Catalog {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, weight: f64, source: &str) -> Record {
        Record {
            name: name.into(),
            price,
            weight,
            source: source.into(),
        }
    }

    fn names<'a>(hits: &[PricedRecord<'a>]) -> Vec<&'a str> {
        hits.iter().map(|h| h.record.name.as_str()).collect()
    }

    #[test]
    fn ranks_by_unit_price() {
        let catalog: Catalog = vec![record("A", 100.0, 2.0, "x"), record("B", 90.0, 3.0, "x")]
            .into_iter()
            .collect();
        let hits = catalog.search("");
        assert_eq!(names(&hits), vec!["B", "A"]);
        let unit: Vec<f64> = hits.iter().map(|h| h.unit_price).collect();
        assert_eq!(unit, vec![30.0, 50.0]);
    }

    #[test]
    fn substring_match_ignores_case() {
        let catalog: Catalog = vec![
            record("Олива Extra", 500.0, 1.0, "a"),
            record("Подсолнечное", 150.0, 1.0, "a"),
        ]
        .into_iter()
        .collect();
        assert_eq!(names(&catalog.search("олив")), vec!["Олива Extra"]);
        assert_eq!(names(&catalog.search("ОЛИВ")), vec!["Олива Extra"]);
        assert_eq!(names(&catalog.search("extra")), vec!["Олива Extra"]);
    }

    #[test]
    fn ties_keep_ingestion_order() {
        let catalog: Catalog = vec![
            record("Рис 1", 100.0, 1.0, "a"),
            record("Рис 2", 50.0, 1.0, "b"),
            record("Рис 3", 200.0, 2.0, "c"),
            record("Рис 4", 25.0, 0.25, "d"),
        ]
        .into_iter()
        .collect();
        assert_eq!(names(&catalog.search("рис")), vec!["Рис 2", "Рис 1", "Рис 3", "Рис 4"]);
    }

    #[test]
    fn duplicates_across_files_are_kept() {
        let catalog: Catalog = vec![record("Соль", 20.0, 1.0, "a.csv"), record("Соль", 20.0, 1.0, "b.csv")]
            .into_iter()
            .collect();
        let sources: Vec<&str> = catalog.search("соль").iter().map(|h| h.record.source.as_str()).collect();
        assert_eq!(sources, vec!["a.csv", "b.csv"]);
    }

    #[test]
    fn no_match_is_empty() {
        let catalog: Catalog = vec![record("Соль", 20.0, 1.0, "a")].into_iter().collect();
        assert!(catalog.search("сахар").is_empty());
        assert!(Catalog::new().search("").is_empty());
    }

    #[test]
    fn search_is_idempotent_and_leaves_order_untouched() {
        let catalog: Catalog = vec![
            record("Гречка", 120.0, 1.0, "a"),
            record("Гречка ядрица", 90.0, 1.0, "a"),
            record("Гречневая мука", 60.0, 1.0, "b"),
        ]
        .into_iter()
        .collect();
        let first = catalog.search("греч");
        let second = catalog.search("греч");
        assert_eq!(first, second);
        let in_order: Vec<&str> = catalog.entries().iter().map(|e| e.record.name.as_str()).collect();
        assert_eq!(in_order, vec!["Гречка", "Гречка ядрица", "Гречневая мука"]);
    }
}
