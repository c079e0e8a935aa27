//! rampgen CLI - Procedural gradient ramp textures

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rampgen_algorithms::{generate_batch, validate, BatchOptions, BatchReport, RampBatch};
use rampgen_core::io::{PngAssetSink, PngSinkOptions};
use rampgen_core::RowOrder;
use rampgen_parallel::{num_threads, ProcessingMode};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rampgen")]
#[command(author, version, about = "Procedural gradient ramp textures", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a batch and write one PNG per ramp
    Generate {
        /// Batch file (JSON)
        input: PathBuf,
        /// Output directory (defaults to the batch file's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Worker threads for synthesis
        #[arg(short = 'j', long, conflicts_with = "sequential")]
        threads: Option<usize>,
        /// Synthesize ramps one at a time
        #[arg(long)]
        sequential: bool,
        /// Write buffer row 0 as the first image row
        #[arg(long)]
        top_down: bool,
        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a batch without generating anything
    Validate {
        /// Batch file (JSON)
        input: PathBuf,
    },
    /// Show the ramps a batch describes
    Info {
        /// Batch file (JSON)
        input: PathBuf,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_batch(path: &Path) -> Result<RampBatch> {
    let batch = RampBatch::from_path(path)
        .with_context(|| format!("Failed to read batch {}", path.display()))?;
    info!("Batch: {} ramps", batch.len());
    Ok(batch)
}

/// Directory the batch file lives in; textures land next to their source.
fn batch_dir(input: &Path) -> PathBuf {
    input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn processing_mode(threads: Option<usize>, sequential: bool) -> ProcessingMode {
    match (threads, sequential) {
        (Some(n), _) => ProcessingMode::ParallelWith(n),
        (None, true) => ProcessingMode::Sequential,
        (None, false) => ProcessingMode::Parallel,
    }
}

fn print_report(report: &BatchReport) {
    for ramp in &report.ramps {
        let kind = if ramp.blended { "blended" } else { "single" };
        println!("  {}.png  {} x {}  ({})", ramp.name, ramp.width, ramp.height, kind);
    }
}

fn done(count: usize, dir: &Path, elapsed: std::time::Duration) {
    println!("{} ramps saved to: {}", count, dir.display());
    println!("  Processing time: {:.2?}", elapsed);
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        // ── Generate ─────────────────────────────────────────────────
        Commands::Generate {
            input,
            out_dir,
            threads,
            sequential,
            top_down,
            json,
        } => {
            let batch = read_batch(&input)?;
            let out_dir = out_dir.unwrap_or_else(|| batch_dir(&input));
            std::fs::create_dir_all(&out_dir).with_context(|| {
                format!("Failed to create output directory {}", out_dir.display())
            })?;

            let options = BatchOptions {
                mode: processing_mode(threads, sequential),
            };
            let row_order = if top_down {
                RowOrder::TopDown
            } else {
                RowOrder::BottomUp
            };
            let mut sink = PngAssetSink::with_options(
                &out_dir,
                PngSinkOptions {
                    row_order,
                    ..PngSinkOptions::default()
                },
            );
            info!("Mode: {:?} ({} threads available)", options.mode, num_threads());

            let pb = spinner(&format!("Generating {} ramps...", batch.len()));
            let start = Instant::now();
            let result = generate_batch(&batch.ramps, &mut sink, &options);
            pb.finish_and_clear();
            let report = result.context("Failed to generate ramps")?;
            let elapsed = start.elapsed();

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
                done(report.len(), &out_dir, elapsed);
            }
        }

        // ── Validate ─────────────────────────────────────────────────
        Commands::Validate { input } => {
            let batch = read_batch(&input)?;
            validate(&batch.ramps)
                .with_context(|| format!("Invalid batch {}", input.display()))?;
            println!("{}: {} ramps OK", input.display(), batch.len());
        }

        // ── Info ─────────────────────────────────────────────────────
        Commands::Info { input } => {
            let batch = read_batch(&input)?;

            println!("File: {}", input.display());
            println!("Ramps: {}", batch.len());
            for (index, ramp) in batch.ramps.iter().enumerate() {
                println!(
                    "\n[{}] {}  {} x {}",
                    index, ramp.name, ramp.size.width, ramp.size.height
                );
                for (i, gradient) in ramp.gradients.iter().enumerate() {
                    println!(
                        "  gradient {}: {} color keys, {} alpha keys, {:?}",
                        i,
                        gradient.color_keys().len(),
                        gradient.alpha_keys().len(),
                        gradient.mode()
                    );
                }
                match (&ramp.remap_curve, ramp.is_blended()) {
                    (Some(curve), _) => match curve.time_range() {
                        Some((t0, t1)) => println!(
                            "  remap curve: {} keys over [{:.3}, {:.3}]",
                            curve.keys().len(),
                            t0,
                            t1
                        ),
                        None => println!("  remap curve: empty"),
                    },
                    (None, true) => println!("  remap curve: missing"),
                    (None, false) => {}
                }
            }

            match validate(&batch.ramps) {
                Ok(()) => println!("\nStatus: valid"),
                Err(err) => println!("\nStatus: invalid ({})", err),
            }
        }
    }

    Ok(())
}
