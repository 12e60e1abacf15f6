//! Taxi trip simulator.
//!
//! Reads a scenario from standard input (or `--input`) and prints, for every client,
//! the cheapest taxi routes from a shop and the cheapest routes to a shop.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{anyhow, Context, Error};
use clap::Parser;

use taxi_core::CostTolerance;
use taxi_input::Scenario;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();

    let tolerance = CostTolerance::new(opts.tolerance).ok_or_else(|| anyhow!("bad cost tolerance {}", opts.tolerance))?;
    let input = opts.read_input()?;
    let scenario = Scenario::parse(&input)?;

    for report in taxi_sim::simulate(&scenario, tolerance)? {
        println!("{}", report);
    }

    Ok(())
}

/// Cheapest taxi and shop routes for every client.
#[derive(Parser)]
#[command(version, author = "The taxi-trips developers")]
struct Opts {
    /// Scenario file path (default: standard input)
    #[arg(long = "input")]
    input: Option<PathBuf>,

    /// Relative tolerance under which two route costs are considered equal (default: exact)
    #[arg(long = "tolerance", default_value_t = CostTolerance::default().value())]
    tolerance: f64,
}

impl Opts {
    fn read_input(&self) -> Result<String, Error> {
        match &self.input {
            Some(path) => fs::read_to_string(path).with_context(|| format!("can't read {}", path.display())),
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).context("can't read standard input")?;
                Ok(buf)
            }
        }
    }
}
