// src/main.rs
use anyhow::Result;
use clap::Parser;

use bhc::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    cli::run(args)
}
