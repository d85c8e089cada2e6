//! Demo command - manage demo mode

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use botica_core::services::{DemoService, LogEvent};

use super::{get_data_dir, get_logger, log_event};
use crate::output;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode and seed the sample dataset
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let data_dir = get_data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let demo_service = DemoService::new(&data_dir);

    match command {
        Some(DemoCommands::On) => {
            demo_service.enable()?;
            log_event(&get_logger(), LogEvent::new("demo_enabled").with_command("demo"));
            output::success("Demo mode enabled");
            println!("Sample data has been loaded. Run 'botica status' to see the demo dataset.");
            Ok(())
        }
        Some(DemoCommands::Off) => {
            demo_service.disable(false)?; // Keep demo data by default
            log_event(&get_logger(), LogEvent::new("demo_disabled").with_command("demo"));
            output::warning("Demo mode disabled, the real dataset is active again");
            Ok(())
        }
        Some(DemoCommands::Status) | None => {
            if demo_service.is_enabled()? {
                println!("Demo mode: {} (reports read the sample dataset)", "ON".green());
            } else {
                println!("Demo mode: {}", "OFF".yellow());
            }
            Ok(())
        }
    }
}
