//! slicekit CLI - parametric shape to G-code generator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slicekit::{
    build_path_segments, build_render_buffers, calculate_stats, format_length, format_time,
    generate_job_async, init_logging, parse_gcode, read_gcode_lines, EncodeMode, JobConfig,
    PrintStats, ShapeKind, ShapeParameters, BUILD_DATE, VERSION,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "slicekit")]
#[command(about = "Generate and inspect 3D-printer G-code for parametric shapes", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate G-code for a shape
    Generate(GenerateArgs),
    /// Report print statistics for a G-code file
    Stats {
        /// G-code file to scan
        file: PathBuf,
    },
    /// Decode a G-code file and summarize the preview geometry
    Inspect {
        /// G-code file to decode
        file: PathBuf,
    },
    /// Write a default job configuration
    InitConfig {
        /// Output path (.json or .toml); defaults to the platform config location
        path: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Job configuration file (.json or .toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file; G-code goes to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace the configured shape with a default-sized one
    #[arg(long)]
    shape: Option<ShapeKind>,

    /// Override the layer height (mm)
    #[arg(long)]
    layer_height: Option<f64>,

    /// Emit the whole-shape point cloud instead of sliced layers
    #[arg(long)]
    point_cloud: bool,
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    read_gcode_lines(path)
        .with_context(|| format!("Failed to read G-code file {}", path.display()))
}

fn print_stats(stats: &PrintStats) {
    println!("Print time:    {}", format_time(stats.print_time));
    println!("Filament used: {}", format_length(stats.filament_used));
    println!("Layers:        {}", stats.layer_count);
    println!("Moves:         {}", stats.total_moves);
}

async fn generate(args: GenerateArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => JobConfig::load_from_file(path)
            .with_context(|| format!("Failed to load job config {}", path.display()))?,
        None => JobConfig::load_or_default().context("Failed to load default job config")?,
    };

    if let Some(kind) = args.shape {
        config.shape = ShapeParameters::default_for(kind);
    }
    if let Some(layer_height) = args.layer_height {
        config.printer.layer_height = layer_height;
    }
    if args.point_cloud {
        config.output.mode = EncodeMode::PointCloud;
    }
    debug!("Effective job: {:?}", config);

    let output = generate_job_async(config).await?;

    match &args.output {
        Some(path) => {
            output
                .write_gcode(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} lines to {}", output.gcode.len(), path.display());
            print_stats(&output.stats);
        }
        None => print!("{}", output.gcode_text()),
    }

    Ok(())
}

fn stats(file: &Path) -> Result<()> {
    let lines = read_lines(file)?;
    print_stats(&calculate_stats(&lines));
    Ok(())
}

fn inspect(file: &Path) -> Result<()> {
    let lines = read_lines(file)?;
    let parsed = parse_gcode(&lines);
    let segments = build_path_segments(&parsed.moves);
    let buffers = build_render_buffers(&segments);

    println!("Lines:           {}", lines.len());
    println!("Moves:           {}", parsed.moves.len());
    println!("Extruding moves: {}", parsed.extrusion_move_count());
    println!("Layers:          {}", parsed.layer_count);
    println!("Segments:        {}", segments.len());
    println!("Position floats: {}", buffers.positions.len());
    println!("Color floats:    {}", buffers.colors.len());
    Ok(())
}

fn init_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => JobConfig::default_path()?,
    };
    JobConfig::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write job config {}", path.display()))?;
    println!("Wrote default job config to {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json)?;
    debug!("slicekit {} (built {})", VERSION, BUILD_DATE);

    match cli.command {
        Commands::Generate(args) => generate(args).await?,
        Commands::Stats { file } => stats(&file)?,
        Commands::Inspect { file } => inspect(&file)?,
        Commands::InitConfig { path } => init_config(path)?,
    }

    Ok(())
}
