// Fixed-width console table for search results
use crate::model::PricedRecord;

pub fn header_line() -> String {
    format!(
        "{:<5}{:<30}{:<10}{:<10}{:<15}{:<10}",
        "#", "Name", "Price", "Weight", "File", "Per kg"
    )
}

pub fn row_line(idx: usize, entry: &PricedRecord<'_>) -> String {
    let record = entry.record;
    format!(
        "{:<5}{:<30}{:<10.2}{:<10.2}{:<15}{:<10.2}",
        idx, record.name, record.price, record.weight, record.source, entry.unit_price
    )
}

/// Header plus one numbered line per hit, in the given order.
pub fn format_results(hits: &[PricedRecord<'_>]) -> String {
    let mut out = header_line();
    out.push('\n');
    for (i, hit) in hits.iter().enumerate() {
        out.push_str(row_line(i + 1, hit).trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn pads_columns_by_characters() {
        let record = Record {
            name: "Олива".into(),
            price: 100.0,
            weight: 2.0,
            source: "price.csv".into(),
        };
        let line = row_line(1, &PricedRecord::from(&record));
        assert_eq!(
            line,
            format!("1    Олива{}100.00    2.00      price.csv      50.00     ", " ".repeat(25))
        );
    }

    #[test]
    fn numbers_rows_from_one() {
        let records = [
            Record { name: "B".into(), price: 90.0, weight: 3.0, source: "b.csv".into() },
            Record { name: "A".into(), price: 100.0, weight: 2.0, source: "a.csv".into() },
        ];
        let hits: Vec<PricedRecord<'_>> = records.iter().map(PricedRecord::from).collect();
        let text = format_results(&hits);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#    Name"));
        assert!(lines[1].starts_with("1    B "));
        assert!(lines[2].starts_with("2    A "));
        assert!(lines[2].ends_with("50.00"));
    }
}
