use clap::Parser;
use order_status_client::config::cli::{Cli, Command, StatusArgs};
use order_status_client::utils::logger::{self, LogFormat};
use order_status_client::{ApiClient, ApiError, AppConfig, OrderService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(cli.verbose, format);

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    if let Err(e) = cli.validate_config(&config) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    match &cli.command {
        Command::Status(args) => run_status(&config, args).await,
        Command::Theme => {
            println!("{}", config.theme().to_json_pretty()?);
            Ok(())
        }
    }
}

async fn run_status(config: &AppConfig, args: &StatusArgs) -> anyhow::Result<()> {
    let client = ApiClient::new(config)?;
    let service = OrderService::new(client);

    match service
        .get_order_status(&args.customer_number, &args.invoice_number)
        .await
    {
        Ok(response) => {
            tracing::info!(
                "✅ Order status retrieved (HTTP {}) for customer {} / invoice {}",
                response.status,
                args.customer_number,
                args.invoice_number
            );
            println!("{}", serde_json::to_string_pretty(&response.data)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                status = ?e.status(),
                "Order status request failed"
            );
            exit_with(&e)
        }
    }
}

fn exit_with(e: &ApiError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
