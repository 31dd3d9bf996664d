//! Run the box model over a periodic forcing year.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --forcing data/forcing_annual.csv --steps 999 --output trajectory.csv
//! ```
//!
//! Settings may also come from a TOML file (`--config run.toml`); flags given on the command
//! line take precedence. Set `RUST_LOG=debug` (or `trace` for per-day closure diagnostics) for
//! more output.

use boxclim::config::RunConfig;
use boxclim_core::errors::BoxModelResult;
use boxclim_core::state::STATE_LABELS;
use clap::Parser;
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Three-box ocean/atmosphere/sea-ice climate model
#[derive(Parser, Debug)]
#[command(name = "boxclim")]
#[command(about = "Integrate the three-box ocean/atmosphere/sea-ice model with daily Euler steps")]
struct Args {
    /// TOML run configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Forcing CSV with T_atm_pole and T_atm_eq columns
    #[arg(short, long)]
    forcing: Option<PathBuf>,

    /// Number of days to simulate
    #[arg(short, long)]
    steps: Option<usize>,

    /// Step size in days
    #[arg(long)]
    dt: Option<f64>,

    /// Write the trajectory to this CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not print the state after every step
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn into_config(self) -> BoxModelResult<(RunConfig, bool)> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_path(path)?,
            None => RunConfig::default(),
        };

        if let Some(forcing) = self.forcing {
            config.forcing = Some(forcing);
        }
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        Ok((config, self.quiet))
    }
}

fn run(args: Args) -> BoxModelResult<()> {
    let (config, quiet) = args.into_config()?;
    let forcing = config.load_forcing()?;

    if !quiet {
        println!("day\t{}", STATE_LABELS.join("\t"));
    }
    let trajectory = config.run_with(forcing, |day, state| {
        if !quiet {
            let values: Vec<String> = state.to_array().iter().map(|v| format!("{:.6}", v)).collect();
            println!("{}\t{}", day, values.join("\t"));
        }
    })?;

    if let Some(path) = &config.output {
        let file = File::create(path)?;
        trajectory.write_csv(BufWriter::new(file))?;
        info!("Wrote {} states to {}", trajectory.len(), path.display());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
