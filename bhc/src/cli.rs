// src/cli.rs
use anyhow::Result;
use clap::Parser;
use colored::Colorize as _;
use std::path::PathBuf;

use crate::core::health::compute_health;
use crate::core::report::load_report;
use crate::models::{HealthReading, HealthTier};

const AFTER_HELP: &str = "\
Generate a report first:

  Windows:  powercfg /batteryreport /output battery-report.html
  macOS:    system_profiler SPPowerDataType > battery-report.txt

Then point bhc at the file:

  bhc battery-report.html";

#[derive(Parser, Debug)]
#[command(author, version, about, after_help = AFTER_HELP)]
pub struct Args {
    /// Battery report to check (.html from powercfg, .txt from system_profiler)
    pub report: PathBuf,

    /// Print the health percentage only
    #[arg(short = 'n', long)]
    pub number: bool,
}

/// Loads the report, computes the health percentage, and prints it.
///
/// # Errors
///
/// Any [`crate::error::ReportError`] from loading or extraction propagates
/// here and surfaces to the user as its single verbatim message.
pub fn run(args: Args) -> Result<()> {
    let text = load_report(&args.report)?;
    let reading = compute_health(&text)?;

    if args.number {
        println!("{:.2}", reading.percent);
    } else {
        println!("{}", render_reading(&reading));
    }

    Ok(())
}

fn render_reading(reading: &HealthReading) -> colored::ColoredString {
    let line = format!("Battery Health: {:.2}%", reading.percent);
    match reading.tier() {
        HealthTier::Good => line.green(),
        HealthTier::Fair => line.yellow(),
        HealthTier::Worn => line.truecolor(255, 165, 0),
        HealthTier::Poor => line.red(),
    }
}
