//! geomap CLI - synthetic terrain, peaks, rivers and plane orientation

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use geomap_algorithms::analysis::{run_analysis, AnalysisParams, AnalysisResult, PickOutcome, PickSession};
use geomap_algorithms::geology::{strike_dip, StrikeDip};
use geomap_algorithms::hydrology::River;
use geomap_algorithms::terrain::generate_terrain;
use geomap_core::{GridIndex, Point3D};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "geomap")]
#[command(author, version, about = "Synthetic terrain, river tracing and strike/dip", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a surface, detect its peaks and trace a river from each
    Run {
        #[command(flatten)]
        surface: SurfaceArgs,
        /// Maximum number of river steps
        #[arg(long)]
        step_limit: Option<usize>,
        /// Tolerance for the maximum filter comparison
        #[arg(long)]
        epsilon: Option<f64>,
        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
    /// Pick points on a generated surface; every third pick measures a plane
    Pick {
        #[command(flatten)]
        surface: SurfaceArgs,
        /// Picks as "x,y;x,y;x,y" in surface coordinates
        #[arg(short, long)]
        at: String,
    },
    /// Strike and dip of the plane through three points
    Orient {
        /// Points as "x,y,z;x,y,z;x,y,z"
        #[arg(short, long)]
        points: String,
    },
}

/// Surface generation options shared by the subcommands
#[derive(Args)]
struct SurfaceArgs {
    /// Samples per axis
    #[arg(short = 'n', long)]
    size: Option<usize>,
    /// Gaussian smoothing sigma in cells
    #[arg(short, long)]
    sigma: Option<f64>,
    /// JSON parameter file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SurfaceArgs {
    fn params(&self) -> Result<AnalysisParams> {
        let mut params = match &self.config {
            Some(path) => load_config(path)?,
            None => AnalysisParams::default(),
        };
        if let Some(size) = self.size {
            params.terrain.size = size;
        }
        if let Some(sigma) = self.sigma {
            params.terrain.sigma = sigma;
        }
        Ok(params)
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")
}

fn spinner(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

fn done(name: &str, elapsed: std::time::Duration) {
    println!("{} finished", name);
    println!("  Processing time: {:.2?}", elapsed);
}

fn load_config(path: &PathBuf) -> Result<AnalysisParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config: {}", path.display()))
}

fn parse_coords<const N: usize>(s: &str, what: &str) -> Result<Vec<[f64; N]>> {
    s.split(';')
        .map(|item| {
            let parts: Vec<&str> = item.trim().split(',').collect();
            if parts.len() != N {
                bail!("{} must have {} comma-separated values, got: {}", what, N, item);
            }
            let mut out = [0.0; N];
            for (slot, part) in out.iter_mut().zip(&parts) {
                *slot = part
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid number in {}: {}", what, item))?;
            }
            Ok(out)
        })
        .collect()
}

fn orientation_text(orientation: &geomap_core::Result<StrikeDip>) -> String {
    match orientation {
        Ok(sd) => sd.to_string(),
        Err(_) => StrikeDip::PLACEHOLDER.to_string(),
    }
}

/// Machine-readable run output
#[derive(Serialize)]
struct Summary<'a> {
    rows: usize,
    cols: usize,
    min: Option<f64>,
    max: Option<f64>,
    mean: Option<f64>,
    maxima: &'a [GridIndex],
    rivers: &'a [River],
}

fn print_run(result: &AnalysisResult) {
    let (rows, cols) = result.surface.shape();
    let stats = result.surface.z().statistics();

    println!("Grid: {} x {} ({} cells)", cols, rows, rows * cols);
    println!("Heights:");
    if let Some(min) = stats.min {
        println!("  Min: {:.4}", min);
    }
    if let Some(max) = stats.max {
        println!("  Max: {:.4}", max);
    }
    if let Some(mean) = stats.mean {
        println!("  Mean: {:.4}", mean);
    }

    let flowing = result.flowing_rivers().count();
    println!("Local maxima: {}", result.maxima.len());
    println!("Rivers: {} ({} leave their peak)", result.rivers.len(), flowing);
    for river in &result.rivers {
        let drop = river.path.drop_along(result.surface.z()).unwrap_or(f64::NAN);
        println!(
            "  {} -> {}  {} cells, drop {:.4}",
            river.peak,
            river.path.end(),
            river.path.len(),
            drop
        );
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose)?;

    match cli.command {
        Commands::Run {
            surface,
            step_limit,
            epsilon,
            json,
        } => {
            let mut params = surface.params()?;
            if let Some(step_limit) = step_limit {
                params.river.step_limit = step_limit;
            }
            if let Some(epsilon) = epsilon {
                params.maxima.epsilon = epsilon;
            }
            info!(
                size = params.terrain.size,
                sigma = params.terrain.sigma,
                step_limit = params.river.step_limit,
                "running analysis"
            );

            let pb = spinner("Running analysis...")?;
            let start = Instant::now();
            let result = run_analysis(params).context("Analysis failed")?;
            let elapsed = start.elapsed();
            pb.finish_and_clear();

            if json {
                let stats = result.surface.z().statistics();
                let (rows, cols) = result.surface.shape();
                let summary = Summary {
                    rows,
                    cols,
                    min: stats.min,
                    max: stats.max,
                    mean: stats.mean,
                    maxima: &result.maxima,
                    rivers: &result.rivers,
                };
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_run(&result);
                done("Analysis", elapsed);
            }
        }

        Commands::Pick { surface, at } => {
            let params = surface.params()?;
            let picks = parse_coords::<2>(&at, "Pick")?;

            let pb = spinner("Generating surface...")?;
            let grid = generate_terrain(params.terrain).context("Failed to generate surface")?;
            pb.finish_and_clear();

            let mut session = PickSession::new();
            for [x, y] in picks {
                let outcome = session
                    .pick(&grid, x, y)
                    .with_context(|| format!("Invalid pick ({}, {})", x, y))?;
                let p = outcome.point();
                println!("Picked ({:.4}, {:.4}) -> {}", x, y, p);
                if let PickOutcome::Complete { orientation, .. } = &outcome {
                    if let Err(e) = orientation {
                        info!("{}", e);
                    }
                    println!("{}", orientation_text(orientation));
                }
            }
            if !session.is_empty() {
                println!("{} point(s) pending", session.len());
                println!("{}", StrikeDip::PLACEHOLDER);
            }
        }

        Commands::Orient { points } => {
            let points = parse_coords::<3>(&points, "Point")?;
            let [p1, p2, p3]: [[f64; 3]; 3] = points
                .try_into()
                .map_err(|v: Vec<[f64; 3]>| anyhow::anyhow!("Expected 3 points, got {}", v.len()))?;
            let orientation = strike_dip(Point3D::from(p1), Point3D::from(p2), Point3D::from(p3));
            if let Err(e) = &orientation {
                info!("{}", e);
            }
            println!("{}", orientation_text(&orientation));
        }
    }

    Ok(())
}
