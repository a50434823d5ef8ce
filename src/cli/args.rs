//! Command-line argument definitions for the Road Trip reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Road Trip backup reader
///
/// Reads a Road Trip MPG CSV backup file and reports on its contents.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "roadtrip",
    version,
    about = "Read Road Trip MPG CSV backup files and report fuel statistics",
    long_about = "Reads the multi-section CSV backup written by the Road Trip MPG app \
                  (vehicle, fuel, maintenance, trips, tires, valuations) and reports \
                  fuel spend, economy and section layout."
)]
pub struct Args {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarise the vehicle's fuel spend, economy and record counts
    Summary(FileArgs),
    /// Show where each section was found and how many rows it held
    Sections(FileArgs),
}

/// Arguments shared by every subcommand
#[derive(Debug, Clone, ClapArgs)]
pub struct FileArgs {
    /// Road Trip vehicle CSV file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Leave the erroneous Tank 1 Type/Tank 2 Type/Tank 2 Units VEHICLE
    /// columns in place
    #[arg(long = "keep-erroneous-headers")]
    pub keep_erroneous_headers: bool,

    /// Treat absent sections (other than VEHICLE) as empty
    #[arg(long = "allow-missing-sections")]
    pub allow_missing_sections: bool,
}

/// Report output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// Pretty-printed JSON
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// The file arguments of whichever subcommand was given
    pub fn file_args(&self) -> &FileArgs {
        match &self.command {
            Commands::Summary(file_args) | Commands::Sections(file_args) => file_args,
        }
    }
}

impl FileArgs {
    /// Parser configuration selected by the flags
    pub fn parser_config(&self) -> ParserConfig {
        let mut config = ParserConfig::default();
        if self.keep_erroneous_headers {
            config = config.without_header_strip();
        }
        if self.allow_missing_sections {
            config = config.with_missing_sections_allowed();
        }
        config
    }
}
