// store-report: imports a sales sheet export and prints the dashboard views
use anyhow::{Context, Result};
use clap::Parser;
use engine::aggregation::compute_view;
use engine::config::EngineSettings;
use engine::data::{dataset::StoreDataset, import_into};
use engine::report::{render_json, render_text};
use shared::models::{QueryState, Quartile};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "store-report", version, about = "Store sell-in / sell-out performance report")]
struct Cli {
    /// Sales sheet exported as CSV (';' separated by default) or as a JSON array of rows
    file: PathBuf,

    /// Only stores whose name contains this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    search: String,

    /// Only stores in this sell-out quartile
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=4))]
    quartile: Option<u8>,

    /// JSON settings file (delimiter, ranking sizes, table page size, log filter)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show every table row instead of the first page
    #[arg(long)]
    all_rows: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = EngineSettings::load_or_default(cli.config.as_deref())?;
    if cli.all_rows {
        settings.table_page_size = None;
    }

    // RUST_LOG wins over the configured filter. Logs go to stderr so --json output stays clean.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting store report for {}", cli.file.display());

    let quartile = cli
        .quartile
        .map(Quartile::try_from)
        .transpose()
        .map_err(anyhow::Error::msg)?;
    let query = QueryState::new(cli.search, quartile);

    let mut dataset = StoreDataset::new();
    import_into(&mut dataset, &cli.file, &settings)
        .with_context(|| format!("could not import '{}'", cli.file.display()))?;

    let view = compute_view(dataset.records(), &query, &settings);
    if cli.json {
        println!("{}", render_json(&view)?);
    } else {
        print!("{}", render_text(&view));
    }

    Ok(())
}
