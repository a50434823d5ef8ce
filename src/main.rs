use anyhow::Context;
use clap::Parser;
use roadtrip::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    let file = args.file_args().file.clone();

    let result = commands::run(args)
        .with_context(|| format!("Failed to read Road Trip file {}", file.display()));

    if let Err(error) = result {
        // Print the whole context chain and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
