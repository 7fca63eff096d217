/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command line interface
//!
//! * `form-factor` tabulates WK1995 atomic form factors
//! * `sqw` computes phonon intensities for rock-salt NaCl
//! * `bands` prints phonon frequencies along a straight path from Gamma

use crate::atoms::{transform_row, FCC_PRIMITIVE_MATRIX};
use crate::phonon::{band_path, nacl_model, run_band_structure};
use crate::scattering::{tabulate, wk1995_params};
use crate::spectrum::{run_config, DsfConfig, PathReport};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;

/// Species plotted by default, as labelled in the built-in WK1995 table
pub const DEFAULT_SPECIES: [&str; 6] = ["Si", "Na", "Cl", "Pb", "Pb0", "Te"];

#[derive(Parser, Debug)]
#[command(name = "phonon-dsf", version, about = "Phonon dynamic structure factors")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tabulate WK1995 atomic form factors f(Q)
    FormFactor {
        /// Species labels from the built-in table
        #[arg(short, long, num_args = 1.., default_values_t = DEFAULT_SPECIES.map(String::from))]
        species: Vec<String>,

        /// Largest |Q| in Å⁻¹
        #[arg(long, default_value_t = 6.0)]
        q_max: f64,

        /// Number of points
        #[arg(long, default_value_t = 101)]
        points: usize,

        /// Print JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Compute S(Q, ν) for NaCl
    Sqw {
        /// JSON run configuration; without it the eight ⟨½ ½ ½⟩ directions
        /// from G = [7, 1, 1] are computed
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print JSON instead of text tables
        #[arg(long)]
        json: bool,
    },
    /// Phonon frequencies of NaCl from Gamma along a cubic direction
    Bands {
        /// Direction in conventional cubic coordinates
        #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.5, 0.5, 0.5])]
        direction: Vec<f64>,

        /// Number of points including Gamma
        #[arg(long, default_value_t = 51)]
        points: usize,
    },
}

/// Configuration of the built-in NaCl demonstration
pub fn nacl_demo_config() -> DsfConfig {
    let mut directions = Vec::with_capacity(8);
    for sx in [0.5, -0.5] {
        for sy in [0.5, -0.5] {
            for sz in [0.5, -0.5] {
                directions.push([sx, sy, sz]);
            }
        }
    }
    DsfConfig {
        n_points: 51,
        directions,
        ..DsfConfig::default()
    }
}

/// Execute a parsed command, writing results to `out`
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Commands::FormFactor {
            species,
            q_max,
            points,
            json,
        } => form_factor(&species, q_max, points, json, out),
        Commands::Sqw { config, json } => sqw(config, json, out),
        Commands::Bands { direction, points } => bands(&direction, points, out),
    }
}

fn form_factor<W: Write>(
    species: &[String],
    q_max: f64,
    points: usize,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if !(q_max.is_finite() && q_max >= 0.0) {
        return Err(anyhow!("q-max must be finite and non-negative, got {}", q_max));
    }

    let mut tables = BTreeMap::new();
    for s in species {
        let params = wk1995_params(s).ok_or_else(|| anyhow!("no WK1995 parameters for {}", s))?;
        tables.insert(s.as_str(), tabulate(&params, q_max, points));
    }

    if json {
        serde_json::to_writer_pretty(&mut *out, &tables)?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "# {:>8}", "Q")?;
    for s in species {
        write!(out, " {:>10}", s)?;
    }
    writeln!(out)?;
    for i in 0..points {
        let q = tables.values().next().map_or(0.0, |t| t[i].0);
        write!(out, "{:10.4}", q)?;
        for s in species {
            write!(out, " {:10.6}", tables[s.as_str()][i].1)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn sqw<W: Write>(config: Option<PathBuf>, json: bool, out: &mut W) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => DsfConfig::from_file(&path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => nacl_demo_config(),
    };

    let model = nacl_model()?;
    let results = run_config(&model, &config)?;

    if json {
        let reports: Vec<PathReport> = results.iter().map(PathReport::from).collect();
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
        return Ok(());
    }

    for r in &results {
        writeln!(
            out,
            "# G = {:?}, direction = {:?}, T = {} K",
            r.path.g_point, r.path.direction, r.result.temperature
        )?;
        for row in r.result.intensities.rows() {
            for s in row {
                write!(out, "{:10.6} ", s)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn bands<W: Write>(direction: &[f64], points: usize, out: &mut W) -> anyhow::Result<()> {
    let direction: [f64; 3] = direction
        .try_into()
        .map_err(|_| anyhow!("direction needs three components"))?;
    let end = transform_row(direction, &FCC_PRIMITIVE_MATRIX);

    let model = nacl_model()?;
    let path = band_path([0.0; 3], end, points, true)?;
    let bands = run_band_structure(&model, &[path])?;

    for (d, freqs) in bands.distances[0].iter().zip(bands.frequencies(0)) {
        write!(out, "{:10.6}", d)?;
        for f in freqs {
            write!(out, " {:10.4}", f)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
