use clap::{Parser, Subcommand};

mod explore;
mod notify;

#[derive(Debug, Parser)]
#[command(name = "utsav")]
#[command(about = "Event-services marketplace client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse a catalog tab with budget, location, and sort filters.
    Explore(explore::ExploreArgs),
    /// List vendors, nearest first when a viewer position is known.
    Businesses,
    /// List notifications, or mark one as read.
    Notifications {
        /// Mark this notification as read instead of listing.
        #[arg(long)]
        mark_read: Option<i64>,
    },
    /// Check a vendor's availability on a date.
    Availability {
        #[arg(long)]
        business: i64,
        /// Date in YYYY-MM-DD form.
        #[arg(long)]
        date: chrono::NaiveDate,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = utsav_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&config.log_level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    tracing::debug!(env = %config.env, config = ?config, "configuration loaded");

    let client = utsav_api::MarketClient::from_config(&config)?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Explore(args) => explore::run_explore(&client, &config, &args).await,
        Commands::Businesses => explore::run_businesses(&client, &config).await,
        Commands::Notifications { mark_read } => {
            notify::run_notifications(&client, mark_read).await
        }
        Commands::Availability { business, date } => {
            notify::run_availability(&client, business, date).await
        }
    }
}
