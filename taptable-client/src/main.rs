use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use shared::models::{AnalyticsQuery, OrderStatus, TimeRange};
use taptable_client::logger::{default_filter, init_logger};
use taptable_client::{ApiClient, ClientConfig, FileTokenStore, ImageFile};

/// Command-line access to the TapTable backend
#[derive(Debug, Parser)]
#[command(name = "taptable", version, about)]
struct Cli {
    /// Directory holding the persisted session token
    #[arg(long, env = "TAPTABLE_TOKEN_DIR", default_value = ".taptable")]
    token_dir: PathBuf,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check that the backend is up
    Health,
    /// Log in and store the session token
    Login { email: String, password: String },
    /// Create a restaurant account and store the session token
    Register {
        name: String,
        email: String,
        password: String,
    },
    /// Forget the stored session token
    Logout,
    /// List the restaurant's tables
    Tables,
    /// Show a restaurant's public menu
    Menu { restaurant_id: i64 },
    /// List the restaurant's orders
    Orders,
    /// Show dashboard analytics
    Analytics {
        restaurant_id: i64,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
        /// 7days, 30days or custom
        #[arg(long)]
        range: Option<TimeRange>,
    },
    /// Move an order to a new status
    SetStatus { order_id: i64, status: OrderStatus },
    /// Upload an image
    Upload {
        path: PathBuf,
        #[arg(long, default_value = "menu")]
        kind: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    init_logger(default_filter(config.debug()), cli.json_logs)?;

    let client = ApiClient::builder()
        .config(config)
        .token_store(Arc::new(FileTokenStore::new(&cli.token_dir)))
        .build()
        .context("Failed to build API client")?;

    tracing::debug!(base_url = %client.base_url(), "Using backend");

    match cli.command {
        Command::Health => print_json(&client.health_check().await?)?,
        Command::Login { email, password } => {
            let auth = client.login(&email, &password).await?;
            print_json(&auth.restaurant)?;
        }
        Command::Register {
            name,
            email,
            password,
        } => {
            let auth = client.register(&name, &email, &password).await?;
            print_json(&auth.restaurant)?;
        }
        Command::Logout => {
            client.logout()?;
            tracing::info!("Session token removed");
        }
        Command::Tables => print_json(&client.get_tables().await?)?,
        Command::Menu { restaurant_id } => {
            print_json(&client.get_public_menu(restaurant_id).await?)?
        }
        Command::Orders => print_json(&client.get_orders().await?)?,
        Command::Analytics {
            restaurant_id,
            from,
            to,
            range,
        } => {
            let query = AnalyticsQuery {
                time_range: range,
                from,
                to,
            };
            print_json(&client.get_analytics(restaurant_id, &query).await?)?;
        }
        Command::SetStatus { order_id, status } => {
            print_json(&client.update_order_status(order_id, status).await?)?
        }
        Command::Upload { path, kind } => {
            let image = ImageFile::from_path(&path).await?;
            print_json(&client.upload_image(image, &kind).await?)?;
        }
    }

    Ok(())
}
