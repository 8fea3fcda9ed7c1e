//! plotlog command line interface
//!
//! Plots a `step,speed,state` CSV log and saves the chart as an image.

use clap::Parser;
use log::debug;
use plotlog::processor;
use plotlog::render::{DEFAULT_DPI, RenderOptions};
use plotlog::PlotResult;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "plotlog")]
#[command(about = "Plot step vs speed from a CSV log and save an image", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Input CSV file
    #[arg(value_name = "CSV", default_value = "log.csv")]
    input: PathBuf,

    /// Output image file
    #[arg(short, long, value_name = "FILE", default_value = "log.png")]
    out: PathBuf,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = clap::value_parser!(u32).range(1..))]
    dpi: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    debug!("plotlog {}", plotlog::VERSION);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> PlotResult<()> {
    let options = RenderOptions::default().with_dpi(cli.dpi);
    let stats = processor::plot_file(&cli.input, &cli.out, &options)?;
    println!("Wrote {}", stats.output.display());
    Ok(())
}
