use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
mod config;
mod setup;

use commands::{cart::CartCommand, pull::PullArgs};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// qfifat storefront: browse the catalog, manage the local cart and replay
/// pull-to-refresh gestures.
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog products
    Products {
        #[arg(long)]
        category: Option<String>,
    },
    /// List catalog categories
    Categories,
    /// Show one product
    Product { id: String },
    /// Manage the cart stored on this device
    #[command(subcommand)]
    Cart(CartCommand),
    /// Replay a pull gesture from one y coordinate to another
    Pull(PullArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env()?;
    tracing::debug!(
        data_dir = %config.storage.data_dir.display(),
        backend = config.backend.is_some(),
        threshold = config.gesture.threshold,
        "Configuration loaded"
    );

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 5. Dispatch
    match cli.command {
        Command::Products { category } => {
            commands::catalog::list_products(&container, category).await
        }
        Command::Categories => commands::catalog::list_categories(&container).await,
        Command::Product { id } => commands::catalog::show_product(&container, id).await,
        Command::Cart(command) => commands::cart::run(&container, command).await,
        Command::Pull(args) => commands::pull::run(&container, args).await,
    }
}
