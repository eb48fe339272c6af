// Exporters: render the whole catalog to a standalone document

pub mod html;

use crate::catalog::Catalog;
use crate::model::ExportError;
use std::fs;
use std::path::Path;
use tracing::info;

pub use html::HtmlExporter;

pub trait Exporter {
    /// Renders every record of the catalog in ingestion order.
    fn render(&self, catalog: &Catalog) -> String;
}

/// Renders `catalog` and writes it to `path` as UTF-8.
pub fn export_to_file<E: Exporter + ?Sized>(
    exporter: &E,
    catalog: &Catalog,
    path: &Path,
) -> Result<(), ExportError> {
    let document = exporter.render(catalog);
    fs::write(path, document).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Exported {} record(s) to {}", catalog.len(), path.display());
    Ok(())
}
