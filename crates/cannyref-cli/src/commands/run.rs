use std::path::PathBuf;

use anyhow::{Context, Result};
use cannyref_core::io::hex::read_pixel_grid;
use cannyref_core::io::png::save_grid_png;
use cannyref_core::io::text::{write_edge_map, write_stage_dump};
use cannyref_core::pipeline::config::{CannyConfig, ThresholdConfig};
use cannyref_core::pipeline::run_pipeline;
use clap::Args;

use crate::summary;

#[derive(Args)]
pub struct RunArgs {
    /// Input hex pixel dump (one RRGGBB token per pixel)
    pub pixels: PathBuf,

    /// Pipeline config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Grid width in pixels
    #[arg(long, default_value = "50")]
    pub width: usize,

    /// Grid height in pixels
    #[arg(long, default_value = "50")]
    pub height: usize,

    /// High threshold (strong edges)
    #[arg(long, default_value = "100")]
    pub high: u8,

    /// Low threshold (weak edges)
    #[arg(long, default_value = "50")]
    pub low: u8,

    /// Output reference edge map
    #[arg(short, long, default_value = "canny_reference.txt")]
    pub output: PathBuf,

    /// Write every intermediate stage to a dump file
    #[arg(long)]
    pub stages: Option<PathBuf>,

    /// Save the final edge map as a grayscale PNG
    #[arg(long)]
    pub png: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        CannyConfig {
            width: args.width,
            height: args.height,
            thresholds: ThresholdConfig {
                high: args.high,
                low: args.low,
            },
        }
    };

    summary::print_run_summary(&args.pixels, &args.output, &config);

    let input = read_pixel_grid(&args.pixels, config.width, config.height)
        .with_context(|| format!("Failed to read pixel dump {}", args.pixels.display()))?;

    let output = run_pipeline(&input, &config)?;

    write_edge_map(&args.output, &output.edges, &config)
        .with_context(|| format!("Failed to write edge map {}", args.output.display()))?;

    if let Some(ref stages_path) = args.stages {
        write_stage_dump(stages_path, &output)
            .with_context(|| format!("Failed to write stage dump {}", stages_path.display()))?;
    }

    if let Some(ref png_path) = args.png {
        save_grid_png(&output.edges, png_path)
            .with_context(|| format!("Failed to write PNG {}", png_path.display()))?;
    }

    summary::print_edge_stats(&output.edge_stats());
    println!("\nReference edge map saved to {}", args.output.display());

    Ok(())
}
