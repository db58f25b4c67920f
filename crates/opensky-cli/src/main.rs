// SPDX-License-Identifier: MIT
// Copyright (c) 2026 OpenSky contributors

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use opensky_core::report::LandingReport;
use opensky_core::{FlightLog, FlightLogLoader};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding flight logs (*.json, *.json.gz)
    #[arg(short, long, env = "OPENSKY_LOGS", global = true)]
    logs: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade the landing of a single flight log
    Grade { file: PathBuf },
    /// List all flight logs with their landing grade
    List,
    /// Write a CSV landing report for all flight logs
    Report {
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let logs_dir = cli
        .logs
        .clone()
        .unwrap_or_else(opensky_core::default_flight_log_dir);

    match &cli.command {
        Commands::Grade { file } => {
            let log = FlightLogLoader::load_file(file)?;
            print_grade(&log);
        }
        Commands::List => {
            let logs = FlightLogLoader::load_dir(&logs_dir)?;
            if logs.is_empty() {
                println!("No flight logs found in {:?}", logs_dir);
            }
            for log in &logs {
                let result = log.landing_grade();
                println!(
                    "[{:<2}] {:<10} {:<8} {:<16} {}",
                    result.grade,
                    log.aircraft_registry,
                    log.aircraft_type,
                    log.route(),
                    result.description
                );
            }
        }
        Commands::Report { out } => {
            let logs = FlightLogLoader::load_dir(&logs_dir)?;
            let report = LandingReport::from_logs(&logs);
            report.save_csv(out)?;
            println!("Wrote {} landings to {:?}", report.rows.len(), out);
            for (grade, count) in report.grade_counts() {
                println!("  {:<2} {}", grade, count);
            }
        }
    }

    Ok(())
}

fn print_grade(log: &FlightLog) {
    let result = log.landing_grade();
    let stats = log.landing_stats();

    println!("Flight {} ({}, {})", log.id, log.aircraft_registry, log.route());
    println!("Grade: {} ({})", result.grade, result.description);
    println!("  Landing rate:  {:.0} fpm", stats.max_landing_rate);
    println!(
        "  G-force:       {:.2} max / {:.2} min",
        stats.max_g_force, stats.min_g_force
    );
    println!("  Bank angle:    {:.1} deg", stats.max_bank_angle);
    println!("  Sideslip:      {:.1} deg", stats.max_side_slip_angle);
    println!("  Bounces:       {}", stats.bounces);
    println!(
        "  Wind:          {:.0} kt @ {:.0} deg (cross {:.1}, head {:.1})",
        stats.wind_knots, stats.wind_angle, stats.cross_wind, stats.head_wind
    );
    println!(
        "  Speed:         {:.0} kt IAS / {:.0} kt GS",
        stats.airspeed, stats.ground_speed
    );
}
