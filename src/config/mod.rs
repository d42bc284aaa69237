pub mod toml_config;

use crate::core::{ConfigProvider, RowPolicy};
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_path, validate_range, Validate};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub use toml_config::TomlConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "birthday-greetings")]
#[command(about = "Send a birthday greeting to every employee born on the given day")]
pub struct CliConfig {
    /// Employee file: a header line, then `last, first, date_of_birth, email`
    #[arg(long, default_value = "data/employee_data.txt")]
    pub input: String,

    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long, default_value = "localhost")]
    pub smtp_host: String,

    #[arg(long, default_value = "80")]
    pub smtp_port: u16,

    /// Drop rows that cannot be parsed instead of failing the run
    #[arg(long)]
    pub skip_malformed: bool,

    /// TOML file overriding input, transport and parsing settings
    #[arg(long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn smtp_host(&self) -> &str {
        &self.smtp_host
    }

    fn smtp_port(&self) -> u16 {
        self.smtp_port
    }

    fn row_policy(&self) -> RowPolicy {
        if self.skip_malformed {
            RowPolicy::Skip
        } else {
            RowPolicy::Fail
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_host("smtp_host", &self.smtp_host)?;
        validate_range("smtp_port", self.smtp_port, 1, u16::MAX)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
