//! Botica CLI - pharmacy sales analytics in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{clear, dates, demo, families, ingest, logs, report, status};

/// Botica - pharmacy sales analytics in your terminal
#[derive(Parser)]
#[command(name = "botica", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest a point-of-sale export (CSV)
    Ingest {
        /// Path to the export file ("-" for stdin)
        file: Option<PathBuf>,
        /// Expected record kind: transactions or categories
        #[arg(long)]
        kind: Option<String>,
        /// Column delimiter (single character, default from settings or ";")
        #[arg(long)]
        delimiter: Option<char>,
        /// Preview without saving
        #[arg(long)]
        preview: bool,
        /// Skip the overwrite confirmation
        #[arg(long, short)]
        yes: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show dataset status and summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Aggregate sales over a date window
    Report {
        /// Window start (DD/MM/YYYY, defaults to the earliest day with data)
        #[arg(long)]
        from: Option<String>,
        /// Window end (DD/MM/YYYY, defaults to the latest day with data)
        #[arg(long)]
        to: Option<String>,
        /// Breakdown: totals, day, prefix, seller
        #[arg(long, default_value = "totals")]
        by: String,
        /// Only count lines with this payment type (e.g. Tarjeta)
        #[arg(long)]
        payment: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the calendar dates that have data
    Dates {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the catalog families
    Families {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// Delete all stored data
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Show recent activity events
    Logs {
        /// Number of events to show
        #[arg(long, default_value_t = 20)]
        tail: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ingest {
            file,
            kind,
            delimiter,
            preview,
            yes,
            json,
        } => ingest::run(file, kind, delimiter, preview, yes, json),
        Commands::Status { json } => status::run(json),
        Commands::Report {
            from,
            to,
            by,
            payment,
            json,
        } => report::run(from, to, &by, payment, json),
        Commands::Dates { json } => dates::run(json),
        Commands::Families { json } => families::run(json),
        Commands::Demo { command } => demo::run(command),
        Commands::Clear { force } => clear::run(force),
        Commands::Logs { tail, json } => logs::run(tail, json),
    }
}
