#![deny(unsafe_code)]
//! CLI binary for the stipple-field renderer.
//!
//! Subcommands:
//! - `render` — build a lattice, render the dot field, write a PNG
//! - `recipe <file>` — render from a saved recipe JSON

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::{Path, PathBuf};
use std::process;
use stipple_core::{DensityConfig, GradientLattice, Recipe, RenderConfig, Xorshift64};
use stipple_raster::Raster;

#[derive(Parser)]
#[command(name = "stipple", about = "Gradient-noise dot field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a dot field and write a PNG snapshot.
    Render {
        /// Field width in pixels.
        #[arg(short = 'W', long, default_value_t = 1000)]
        width: i64,

        /// Field height in pixels.
        #[arg(short = 'H', long, default_value_t = 1000)]
        height: i64,

        /// Number of lattice cells across the width.
        #[arg(short = 'n', long, default_value_t = 50)]
        cells: i64,

        /// Scan step between candidate dots (recommended >= radius).
        #[arg(short, long, default_value_t = 4.0)]
        step: f64,

        /// Dot radius in pixels.
        #[arg(short, long, default_value_t = 1.5)]
        radius: f64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Density parameters as a JSON object
        /// (input_min, input_max, threshold, contrast, invert).
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "stipple.png")]
        output: PathBuf,
    },
    /// Render from a recipe JSON file.
    Recipe {
        /// Path to the recipe file.
        path: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "stipple.png")]
        output: PathBuf,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            width,
            height,
            cells,
            step,
            radius,
            seed,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
            let config = RenderConfig::new(width, height, cells, step, radius)?;
            let density = DensityConfig::from_json(&params)?;
            render_to_png(&config, &density, seed, &output, cli.json)
        }
        Command::Recipe { path, output } => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
            let recipe: Recipe = serde_json::from_str(&text)
                .map_err(|e| CliError::Input(format!("invalid recipe: {e}")))?;
            let (config, density) = recipe.resolve()?;
            render_to_png(&config, &density, recipe.seed, &output, cli.json)
        }
    }
}

fn render_to_png(
    config: &RenderConfig,
    density: &DensityConfig,
    seed: u64,
    output: &Path,
    json: bool,
) -> Result<(), CliError> {
    let mut rng = Xorshift64::new(seed);
    let lattice =
        GradientLattice::build(config.width(), config.height(), config.spacing(), &mut rng)?;

    let mut raster = Raster::new(config.width() as u32, config.height() as u32)?;
    let stats = stipple_core::render(config, density, &lattice, &mut rng, |x, y, r| {
        raster.fill_circle(x, y, r);
    });

    stipple_raster::snapshot::write_png(&raster, output)?;

    if json {
        let report = serde_json::json!({
            "width": config.width(),
            "height": config.height(),
            "cells": config.cells(),
            "spacing": config.spacing(),
            "seed": seed,
            "scanned": stats.scanned,
            "drawn": stats.drawn,
            "skipped": stats.skipped,
            "inked_pixels": raster.inked_pixels(),
            "output": output.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!(
            "rendered {}x{} ({} cells, seed {}): {} dots from {} points ({} skipped) -> {}",
            config.width(),
            config.height(),
            config.cells(),
            seed,
            stats.drawn,
            stats.scanned,
            stats.skipped,
            output.display()
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
