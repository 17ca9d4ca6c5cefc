use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use pokedex_progress::ReportInputs;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "pokedex-progress", version)]
#[command(about = "Build a trainer's Pokedex progress report from a species catalog and a snapshot")]
struct Args {
    /// Species catalog (.csv with a header row, or .ron)
    #[arg(long)]
    catalog: PathBuf,

    /// The user's snapshot (.ron, or .json)
    #[arg(long)]
    snapshot: PathBuf,

    /// Companion assignment records; a missing file means no companion
    #[arg(long)]
    companions: Option<PathBuf>,

    /// Optional RON config with image settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let inputs = ReportInputs::load(
        &args.catalog,
        &args.snapshot,
        args.companions.as_deref(),
        args.config.as_deref(),
    )
    .context("failed to load report inputs")?;
    let report = inputs.build(Utc::now());

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);

    let written = if args.compact {
        serde_json::to_writer(&mut writer, &report)
    } else {
        serde_json::to_writer_pretty(&mut writer, &report)
    };
    written.context("failed to serialize report")?;
    writeln!(writer)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        log::info!("report written to {}", path.display());
    }
    Ok(())
}
