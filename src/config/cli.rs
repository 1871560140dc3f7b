use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-status")]
#[command(about = "Look up purchase order status from the order API")]
pub struct Cli {
    /// TOML configuration file (falls back to $ORDER_STATUS_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Fetch the status of one order
    Status(StatusArgs),
    /// Print the styling tool configuration document
    Theme,
}

#[derive(Debug, Clone, Args)]
pub struct StatusArgs {
    #[arg(long)]
    pub customer_number: String,

    #[arg(long)]
    pub invoice_number: String,

    /// Overrides client.base_url from the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Overrides client.timeout_ms from the config file
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

impl Cli {
    /// Config file values with command line overrides applied on top.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        if let Command::Status(args) = &self.command {
            if let Some(base_url) = &args.base_url {
                config.client.base_url = base_url.clone();
            }
            if let Some(timeout_ms) = args.timeout_ms {
                config.client.timeout_ms = timeout_ms;
            }
        }

        Ok(config)
    }

    /// Checks only the section the selected command reads.
    pub fn validate_config(&self, config: &AppConfig) -> Result<()> {
        match &self.command {
            Command::Status(_) => config.client.validate(),
            Command::Theme => config.theme().validate(),
        }
    }
}
