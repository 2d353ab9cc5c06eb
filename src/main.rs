use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qr_herald::{gateway, Config};

#[derive(Parser)]
#[command(name = "qr-herald")]
#[command(about = "Discord bot that renders text as QR-code images")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Register the global slash commands (run once per bot account)
    TOKEN=... qr-herald register

    # Connect to the gateway and serve commands
    TOKEN=... qr-herald run
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to the gateway and serve slash commands
    Run,

    /// Register the global slash commands and exit
    Register,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qr_herald=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Run => {
            gateway::run(&config).await?;
        }
        Commands::Register => {
            gateway::register_commands(&config.token).await?;
        }
    }

    Ok(())
}
