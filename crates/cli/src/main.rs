//! Retail Ops CLI - operator tools for the catalog/ordering platform.
//!
//! # Usage
//!
//! ```bash
//! # Missing-inventory report for every location of an account
//! rops missing-inventory -a <account-id> -o report.csv
//!
//! # Missing-inventory report for one location
//! rops missing-inventory -a <account-id> -l <location-id>
//!
//! # List an account's locations
//! rops locations -a <account-id>
//!
//! # Close or reopen every store (or one channel's links)
//! rops stores close -a <account-id>
//! rops stores open -a <account-id> --channel 6007
//!
//! # Snooze history for one PLU
//! rops snooze-history -a <account-id> -l <location-id> -p <plu> --weeks 2
//!
//! # Count items in a menu
//! rops menu count -a <account-id> -m <menu-id> -l <location-id>
//! ```
//!
//! # Environment Variables
//!
//! - `DELIVERECT_CLIENT_ID` - OAuth client ID
//! - `DELIVERECT_CLIENT_SECRET` - OAuth client secret
//! - `DELIVERECT_BASE_URL` - API base URL (optional)
//! - `DELIVERECT_AUDIENCE` - OAuth audience (optional)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use retail_ops_client::{ApiClient, ApiConfig, StoreMode};

mod commands;
mod export;

#[derive(Parser)]
#[command(name = "rops")]
#[command(author, version, about = "Retail Ops operator tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report catalog items with no inventory record, per location
    MissingInventory {
        /// Account ID
        #[arg(short, long)]
        account: String,

        /// Restrict the report to one location ID
        #[arg(short, long)]
        location: Option<String>,

        /// CSV output path (default: missing_inventory_<account>_<scope>.csv)
        #[arg(short, long)]
        out: Option<String>,
    },
    /// List an account's locations
    Locations {
        /// Account ID
        #[arg(short, long)]
        account: String,
    },
    /// Open or close stores account-wide
    Stores {
        #[command(subcommand)]
        action: StoresAction,
    },
    /// Show snooze history for one PLU at one location
    SnoozeHistory {
        /// Account ID
        #[arg(short, long)]
        account: String,

        /// Location ID
        #[arg(short, long)]
        location: String,

        /// Product lookup unit identifier
        #[arg(short, long)]
        plu: String,

        /// How many weeks back to search
        #[arg(long, default_value_t = 1)]
        weeks: i64,
    },
    /// Menu reporting
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum StoresAction {
    /// Close stores (busy-mode delay 999)
    Close {
        /// Account ID
        #[arg(short, long)]
        account: String,

        /// Restrict to one channel's links (backend ID)
        #[arg(long)]
        channel: Option<i64>,
    },
    /// Reopen stores (busy-mode delay 0)
    Open {
        /// Account ID
        #[arg(short, long)]
        account: String,

        /// Restrict to one channel's links (backend ID)
        #[arg(long)]
        channel: Option<i64>,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// Count categories and active/snoozed items in a menu
    Count {
        /// Account ID
        #[arg(short, long)]
        account: String,

        /// Menu (catalog) ID
        #[arg(short, long)]
        menu: String,

        /// Location ID to preview the menu at
        #[arg(short, long)]
        location: String,

        /// Channel backend ID (-1 for the internal preview channel)
        #[arg(long, default_value_t = -1)]
        channel: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ApiConfig::from_env()?;
    let client = ApiClient::new(&config)?;

    match cli.command {
        Commands::MissingInventory {
            account,
            location,
            out,
        } => {
            commands::missing::run(&client, &account, location.as_deref(), out.as_deref()).await?;
        }
        Commands::Locations { account } => {
            commands::locations::run(&client, &account).await?;
        }
        Commands::Stores { action } => match action {
            StoresAction::Close { account, channel } => {
                commands::stores::run(&client, &account, StoreMode::Closed, channel).await?;
            }
            StoresAction::Open { account, channel } => {
                commands::stores::run(&client, &account, StoreMode::Open, channel).await?;
            }
        },
        Commands::SnoozeHistory {
            account,
            location,
            plu,
            weeks,
        } => {
            commands::snooze::run(&client, &account, &location, &plu, weeks).await?;
        }
        Commands::Menu { action } => match action {
            MenuAction::Count {
                account,
                menu,
                location,
                channel,
            } => {
                commands::menu::run(&client, &account, &menu, &location, channel).await?;
            }
        },
    }
    Ok(())
}
