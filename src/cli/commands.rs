//! Command implementations for the Road Trip CLI
//!
//! This module contains logging setup, the `summary` and `sections`
//! commands, and their report rendering.

use crate::app::models::{SectionName, Vehicle};
use crate::app::services::fuel_summary::FuelSummary;
use crate::app::services::roadtrip_parser::{LoadOptions, LoadStats, load_vehicle_with};
use crate::cli::args::{Args, Commands, FileArgs, OutputFormat};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use std::fmt::{self, Write};
use tracing::debug;

/// Summary report for one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub name: String,
    pub version: Option<i64>,
    pub fuel: FuelSummary,
    pub cost_per_distance: Option<f64>,
    pub record_counts: Vec<(SectionName, usize)>,
}

impl SummaryReport {
    pub fn from_vehicle(vehicle: &Vehicle) -> Self {
        let fuel = FuelSummary::from_records(&vehicle.fuel_records);
        Self {
            name: vehicle.name().to_string(),
            version: vehicle.preamble.version,
            cost_per_distance: fuel.cost_per_distance(),
            fuel,
            record_counts: SectionName::ALL
                .into_iter()
                .map(|section| (section, vehicle.record_count(section)))
                .collect(),
        }
    }
}

/// Main command runner
///
/// Sets up logging, loads the file named on the command line with the
/// installed subscriber injected as the logging collaborator, and prints
/// the requested report to stdout.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let file_args = args.file_args();
    let vehicle = load(file_args)?;

    let output = match &args.command {
        Commands::Summary(file_args) => render_summary(&vehicle, file_args.format)?,
        Commands::Sections(file_args) => render_sections(&vehicle, file_args.format)?,
    };

    print!("{}", output);
    Ok(())
}

fn load(file_args: &FileArgs) -> Result<Vehicle> {
    let dispatch = tracing::dispatcher::get_default(|dispatch| dispatch.clone());
    let options = LoadOptions::default()
        .with_config(file_args.parser_config())
        .with_dispatch(dispatch);

    load_vehicle_with(&file_args.file, &options)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roadtrip={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    result.map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Render the `summary` report
pub fn render_summary(vehicle: &Vehicle, format: OutputFormat) -> Result<String> {
    let report = SummaryReport::from_vehicle(vehicle);

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Human => render_text(|out| write_summary(out, &report)),
    }
}

/// Render the `sections` report
pub fn render_sections(vehicle: &Vehicle, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&vehicle.stats),
        OutputFormat::Human => render_text(|out| write_sections(out, &vehicle.stats)),
    }
}

fn write_summary(out: &mut String, report: &SummaryReport) -> fmt::Result {
    let fuel = &report.fuel;

    writeln!(out, "{}", report.name.bold())?;
    writeln!(
        out,
        "Spent {} on fuel in {} fill-ups",
        format!("{:.2}", fuel.total_cost).green(),
        fuel.fillups
    )?;
    match fuel.average_mpg {
        Some(mpg) => writeln!(out, "Average MPG: {:.2}", mpg)?,
        None => writeln!(out, "Average MPG: {}", "n/a".dimmed())?,
    }
    if let Some(cost) = report.cost_per_distance {
        writeln!(
            out,
            "Cost per distance unit: {:.3} over {:.0}",
            cost, fuel.distance
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Records".bold())?;
    for (section, count) in &report.record_counts {
        writeln!(out, "  {:<20} {:>6}", section.header(), count)?;
    }

    Ok(())
}

fn write_sections(out: &mut String, stats: &LoadStats) -> fmt::Result {
    writeln!(
        out,
        "{} bytes{}",
        stats.bytes,
        if stats.erroneous_headers_stripped {
            " (erroneous VEHICLE headers stripped)"
        } else {
            ""
        }
    )?;

    for section in &stats.sections {
        match &section.range {
            Some(range) => writeln!(
                out,
                "  {:<20} {:>8}..{:<8} {:>6} rows",
                section.section.header(),
                range.start,
                range.end,
                section.rows
            )?,
            None => writeln!(
                out,
                "  {:<20} {}",
                section.section.header(),
                "missing".yellow()
            )?,
        }
    }

    Ok(())
}

fn render_text(write: impl FnOnce(&mut String) -> fmt::Result) -> Result<String> {
    let mut out = String::new();
    write(&mut out).map_err(|e| Error::configuration(format!("Failed to format report: {}", e)))?;
    Ok(out)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| json + "\n")
        .map_err(|e| Error::configuration(format!("Failed to serialise report: {}", e)))
}
