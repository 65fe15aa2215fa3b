//! CLI command definitions for runviz.
//!
//! Provides commands for inspecting CSV run artifacts and resolving run
//! status from API records.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::dataset::{self, ParsedDataset};
use crate::graph::{downsample, format_axis_value, graph_interval, TickInterval};
use crate::run::{resolve_run_state, PipelineRun};

/// Default number of points shown in an inspect preview.
const DEFAULT_PREVIEW_POINTS: usize = 8;

/// Run-output inspection for pipeline dashboards.
#[derive(Parser)]
#[command(name = "runviz")]
#[command(about = "Inspect pipeline run output: typed CSV artifacts and run status")]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Parse a CSV artifact and print inferred columns plus a downsampled preview.
    Inspect(InspectArgs),

    /// Resolve a run's status, timestamps and duration from a JSON record.
    Status(StatusArgs),
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Path to the CSV artifact.
    pub file: PathBuf,

    /// Number of points to keep in the preview.
    #[arg(short, long, default_value_t = DEFAULT_PREVIEW_POINTS)]
    pub points: usize,

    /// Start of an index window (requires --max-index).
    #[arg(long)]
    pub min_index: Option<usize>,

    /// End of an index window, exclusive (requires --min-index).
    #[arg(long)]
    pub max_index: Option<usize>,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Path to a JSON run record with a `states` array.
    pub file: PathBuf,
}

/// Parse CLI arguments and return the Cli struct.
///
/// This allows main.rs to access CLI arguments (like log_level) before running commands.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the CLI with the parsed arguments.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Inspect(args) => run_inspect_command(args).await,
        Commands::Status(args) => run_status_command(args).await,
    }
}

async fn run_inspect_command(args: InspectArgs) -> anyhow::Result<()> {
    ensure_file_exists(&args.file)?;

    let csv_text = tokio::fs::read_to_string(&args.file).await?;
    let dataset = dataset::parse(csv_text).await?;
    info!(
        rows = dataset.len(),
        columns = dataset.headers.len(),
        "parsed artifact"
    );

    println!("columns:");
    for column in &dataset.headers {
        match (dataset.types.get(column), dataset.scales.get(column)) {
            (Some(column_type), Some(scale)) => {
                println!("  {} [{} / {}]", column, column_type, scale);
            }
            _ => println!("  {} [unclassified]", column),
        }
    }

    let preview = downsample(&dataset.rows, args.min_index, args.max_index, args.points);
    println!(
        "rows: {} total, {} in preview (tick interval: {})",
        dataset.len(),
        preview.len(),
        describe_interval(graph_interval(preview.len()))
    );

    for row in &preview {
        println!("  {}", render_row(&dataset, row));
    }

    Ok(())
}

async fn run_status_command(args: StatusArgs) -> anyhow::Result<()> {
    ensure_file_exists(&args.file)?;

    let record = tokio::fs::read_to_string(&args.file).await?;
    let run: PipelineRun = serde_json::from_str(&record)?;
    info!(events = run.states.len(), "resolving run record");

    let resolved = resolve_run_state(run);

    println!(
        "status:       {}",
        resolved
            .status
            .map(|status| status.to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    println!("started_at:   {}", render_instant(resolved.started_at));
    println!("completed_at: {}", render_instant(resolved.completed_at));
    println!(
        "duration:     {}",
        resolved.duration.as_deref().unwrap_or("-")
    );

    Ok(())
}

fn ensure_file_exists(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        return Err(anyhow::anyhow!("File does not exist: {}", path.display()));
    }
    Ok(())
}

/// Renders one preview row in header order, timestamps formatted as dates.
fn render_row(dataset: &ParsedDataset, row: &dataset::Row) -> String {
    dataset
        .headers
        .iter()
        .map(|column| match row.get(column) {
            Some(value) => format_axis_value(value, dataset.is_time_column(column)),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_instant(instant: Option<chrono::DateTime<chrono::Local>>) -> String {
    instant
        .map(|value| value.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

fn describe_interval(interval: TickInterval) -> String {
    match interval {
        TickInterval::Every(n) => format!("every {} ticks", n),
        TickInterval::PreserveStartEnd => "preserve start and end".to_string(),
    }
}
