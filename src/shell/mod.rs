// Interactive search loop and export prompt

pub mod table;

use crate::catalog::Catalog;
use crate::exporter::{export_to_file, Exporter};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Accepts `y` or `n` in any case; anything else is `None`.
pub fn parse_answer(input: &str) -> Option<Answer> {
    match input.trim().to_lowercase().as_str() {
        "y" => Some(Answer::Yes),
        "n" => Some(Answer::No),
        _ => None,
    }
}

/// Opens a finished export for viewing.
pub type Viewer<'a> = Box<dyn Fn(&Path) -> io::Result<()> + 'a>;

/// Launches the platform's default handler for the file.
pub fn open_in_default_viewer(path: &Path) -> io::Result<()> {
    open::that(path)
}

pub struct Shell<'a, R, W> {
    catalog: &'a Catalog,
    input: R,
    output: W,
    exit_word: String,
    viewer: Option<Viewer<'a>>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(catalog: &'a Catalog, input: R, output: W, exit_word: impl Into<String>) -> Self {
        Self {
            catalog,
            input,
            output,
            exit_word: exit_word.into(),
            viewer: None,
        }
    }

    /// Called with the output path after every successful interactive export.
    pub fn with_viewer(mut self, viewer: impl Fn(&Path) -> io::Result<()> + 'a) -> Self {
        self.viewer = Some(Box::new(viewer));
        self
    }

    /// Search loop followed by the export prompt.
    pub fn run<E: Exporter + ?Sized>(&mut self, exporter: &E, output_file: &Path) -> io::Result<()> {
        self.search_loop()?;
        if self.confirm_export()? {
            match export_to_file(exporter, self.catalog, output_file) {
                Ok(()) => {
                    writeln!(self.output, "Data exported to {}.", output_file.display())?;
                    self.open_export(output_file);
                }
                Err(e) => {
                    warn!("Export failed: {}", e);
                    writeln!(self.output, "Export failed: {}", e)?;
                }
            }
        } else {
            writeln!(self.output, "Export cancelled.")?;
        }
        Ok(())
    }

    fn open_export(&self, output_file: &Path) {
        let Some(viewer) = &self.viewer else {
            return;
        };
        if let Err(e) = viewer(output_file) {
            warn!("Failed to open {}: {}", output_file.display(), e);
        }
    }

    /// Reads queries until the exit word or end of input.
    pub fn search_loop(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "Search text (or '{}' to quit): ", self.exit_word)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };
            let query = line.trim();
            if query.to_lowercase() == self.exit_word.to_lowercase() {
                return Ok(());
            }

            self.print_search(query)?;
        }
    }

    pub fn print_search(&mut self, query: &str) -> io::Result<()> {
        let hits = self.catalog.search(query);
        info!("Query {:?}: {} hit(s)", query, hits.len());
        if hits.is_empty() {
            writeln!(self.output, "No products found.")
        } else {
            writeln!(self.output)?;
            write!(self.output, "{}", table::format_results(&hits))
        }
    }

    /// Asks until a valid y/n answer arrives. End of input counts as "no".
    pub fn confirm_export(&mut self) -> io::Result<bool> {
        loop {
            write!(self.output, "Export data to HTML? (y/n): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(false);
            };
            match parse_answer(&line) {
                Some(answer) => return Ok(answer == Answer::Yes),
                None => writeln!(self.output, "Please enter 'y' (yes) or 'n' (no).")?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
