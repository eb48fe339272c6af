use clap::Parser as CliParser;
use price_sniper::config::{load_config, AppConfig};
use price_sniper::exporter::{export_to_file, HtmlExporter};
use price_sniper::ingest::load_prices;
use price_sniper::parser::CsvPriceParser;
use price_sniper::model::ExportError;
use price_sniper::shell::{open_in_default_viewer, Shell};
use price_sniper::source::FolderSource;
use price_sniper::Catalog;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "config.json";

#[derive(Debug, CliParser)]
#[command(name = "price-sniper", version, about = "Search consolidated CSV price lists by price per kg")]
struct Cli {
    /// Settings file (JSON). Defaults to ./config.json when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Folder with the price lists.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// HTML export target.
    #[arg(long)]
    output: Option<PathBuf>,
    /// CSV field delimiter.
    #[arg(long)]
    delimiter: Option<String>,
    /// Run a search and print the results instead of starting the shell. Repeatable.
    #[arg(long = "query")]
    queries: Vec<String>,
    /// Write the HTML export without prompting. The file is not opened.
    #[arg(long)]
    export: bool,
    /// Do not open the export in the default viewer after an interactive export.
    #[arg(long)]
    no_open: bool,
}

#[derive(Debug)]
enum BatchError {
    Terminal(io::Error),
    Export(ExportError),
}

impl From<io::Error> for BatchError {
    fn from(e: io::Error) -> Self {
        BatchError::Terminal(e)
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the result tables
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        error!("Panic occurred: {}", panic_info);
    }));

    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let delimiter = match config.delimiter_byte() {
        Ok(d) => d,
        Err(e) => {
            error!("Config load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Loading price lists from {}...", config.data_dir.display());
    let mut catalog = Catalog::new();
    let summary = load_prices(
        &FolderSource::new(&config.data_dir),
        &CsvPriceParser::with_delimiter(delimiter),
        &mut catalog,
    );
    info!("Ingest summary: {:?}", summary);
    println!("Total records loaded: {}", catalog.len());

    let exporter = HtmlExporter::new();
    if !cli.queries.is_empty() || cli.export {
        return match run_batch(&cli, &config, &catalog, &exporter) {
            Ok(()) => ExitCode::SUCCESS,
            Err(BatchError::Export(e)) => {
                error!("Export failed: {}", e);
                ExitCode::FAILURE
            }
            Err(BatchError::Terminal(e)) => {
                error!("Terminal I/O error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut shell = Shell::new(&catalog, io::stdin().lock(), io::stdout(), config.exit_word.clone());
    if config.open_after_export && !cli.no_open {
        shell = shell.with_viewer(open_in_default_viewer);
    }
    if let Err(e) = shell.run(&exporter, &config.output_file) {
        error!("Terminal I/O error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Runs `--query` searches and the optional `--export` without prompting.
fn run_batch(cli: &Cli, config: &AppConfig, catalog: &Catalog, exporter: &HtmlExporter) -> Result<(), BatchError> {
    let mut shell = Shell::new(catalog, io::empty(), io::stdout(), config.exit_word.clone());
    for query in &cli.queries {
        println!("\nQuery: {}", query);
        shell.print_search(query)?;
    }

    if cli.export {
        export_to_file(exporter, catalog, &config.output_file).map_err(BatchError::Export)?;
        println!("Data exported to {}.", config.output_file.display());
    }
    Ok(())
}

/// Config file (explicit path, or ./config.json when present) overlaid with CLI flags.
fn resolve_config(cli: &Cli) -> Result<AppConfig, price_sniper::model::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG).is_file() => load_config(Path::new(DEFAULT_CONFIG))?,
        None => AppConfig::default(),
    };

    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(output) = &cli.output {
        config.output_file = output.clone();
    }
    if let Some(delimiter) = &cli.delimiter {
        config.delimiter = delimiter.clone();
    }
    Ok(config)
}
