//! plotlog-sim: motor controller simulator
//!
//! Writes a `step,speed,state,events` CSV log that `plotlog` can plot.

use clap::Parser;
use log::debug;
use plotlog::PlotResult;
use plotlog::sim::{self, DEFAULT_STEPS, Scenario};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "plotlog-sim")]
#[command(about = "Simulate the motor controller and write its CSV log", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output CSV file
    #[arg(short, long, value_name = "FILE", default_value = "log.csv")]
    out: PathBuf,

    /// Number of steps to simulate
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    debug!("plotlog-sim {}", plotlog::VERSION);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> PlotResult<()> {
    let scenario = Scenario::default().with_steps(cli.steps);
    sim::simulate_to_file(&scenario, &cli.out)?;
    println!("Wrote {}", cli.out.display());
    Ok(())
}
