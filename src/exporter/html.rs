use crate::catalog::Catalog;
use crate::exporter::Exporter;
use crate::model::PricedRecord;
use crate::utils::escape_html;
use chrono::{DateTime, Utc};

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f9f9f9; }
        h2 { text-align: center; color: #333; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0;
                box-shadow: 0 2px 5px rgba(0,0,0,0.1); background-color: white; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: center; }
        th { background-color: #4CAF50; color: white; font-weight: bold; }
        thead th { position: sticky; top: 0; z-index: 2; }
        tr:hover { background-color: #f1f1f1; }
        td:last-child { font-weight: bold; color: #d9534f; }
        footer { text-align: center; color: #888; font-size: 0.8em; }
"#;

const COLUMNS: [&str; 6] = ["#", "Name", "Price", "Weight", "File", "Price per kg"];

/// Static HTML table of the whole catalog.
pub struct HtmlExporter {
    title: String,
    clock: fn() -> DateTime<Utc>,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::with_title("Price lists")
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            clock: Utc::now,
        }
    }

    /// Replaces the source of the footer timestamp.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn render_entries(&self, entries: &[PricedRecord<'_>], generated_at: DateTime<Utc>) -> String {
        let title = escape_html(&self.title);
        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("    <title>{}</title>\n", title));
        html.push_str(&format!("    <style>{}    </style>\n", STYLE));
        html.push_str("</head>\n<body>\n");
        html.push_str(&format!("    <h2>{}</h2>\n", title));
        html.push_str("    <table>\n        <thead>\n            <tr>\n");
        for column in COLUMNS {
            html.push_str(&format!("                <th>{}</th>\n", column));
        }
        html.push_str("            </tr>\n        </thead>\n        <tbody>\n");

        for (idx, entry) in entries.iter().enumerate() {
            let record = entry.record;
            html.push_str("            <tr>\n");
            html.push_str(&format!("                <td>{}</td>\n", idx + 1));
            html.push_str(&format!("                <td>{}</td>\n", escape_html(&record.name)));
            html.push_str(&format!("                <td>{:.2}</td>\n", record.price));
            html.push_str(&format!("                <td>{:.2}</td>\n", record.weight));
            html.push_str(&format!("                <td>{}</td>\n", escape_html(&record.source)));
            html.push_str(&format!("                <td>{:.2}</td>\n", entry.unit_price));
            html.push_str("            </tr>\n");
        }

        html.push_str("        </tbody>\n    </table>\n");
        html.push_str(&format!(
            "    <footer>Generated {} &middot; {} record(s)</footer>\n",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            entries.len()
        ));
        html.push_str("</body>\n</html>\n");
        html
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for HtmlExporter {
    fn render(&self, catalog: &Catalog) -> String {
        self.render_entries(&catalog.entries(), (self.clock)())
    }
}
