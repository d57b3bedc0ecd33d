use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{parse_time_of_day, validate_non_empty_string, Validate};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "restaurant-directory")]
#[command(about = "Browse restaurants, their menus and order totals")]
pub struct CliConfig {
    /// Path to the TOML directory file
    #[arg(short, long, default_value = "directory.toml")]
    pub config: String,

    /// Evaluate opening hours at this time of day (HH:MM:SS) instead of now
    #[arg(long, value_parser = parse_at)]
    pub at: Option<NaiveTime>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every registered restaurant
    List,
    /// Show a restaurant's details and menu
    Menu { restaurant: String },
    /// Report whether a restaurant is open
    Status { restaurant: String },
    /// Price a list of menu items
    Total {
        restaurant: String,
        #[arg(required = true)]
        items: Vec<String>,
    },
}

fn parse_at(value: &str) -> std::result::Result<NaiveTime, String> {
    parse_time_of_day(value).map_err(|e| e.to_string())
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("config", &self.config)?;

        match &self.command {
            Command::List => Ok(()),
            Command::Menu { restaurant } | Command::Status { restaurant } => {
                validate_non_empty_string("restaurant", restaurant)
            }
            Command::Total { restaurant, items } => {
                validate_non_empty_string("restaurant", restaurant)?;
                if items.is_empty() {
                    return Err(DirectoryError::MissingConfigError {
                        field: "items".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}
