//! RocketShoes CLI - Browse the catalogue and manage the cart.
//!
//! # Usage
//!
//! ```bash
//! # List products with prices and how many of each are in the cart
//! rs-cli products
//!
//! # Show the cart with subtotals and total
//! rs-cli cart show
//!
//! # Add one unit of product 3
//! rs-cli cart add 3
//!
//! # Set product 3 to exactly 2 units
//! rs-cli cart update 3 2
//!
//! # Remove product 3 from the cart
//! rs-cli cart remove 3
//! ```
//!
//! Configuration comes from the environment (see
//! `rocketshoes_storefront::config`). The cart persists between runs in the
//! storage file.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};
use rocketshoes_core::ProductId;
use rocketshoes_storefront::config::StorefrontConfig;
use rocketshoes_storefront::notify::TracingNotifier;
use rocketshoes_storefront::state::AppState;

mod commands;

#[derive(Parser)]
#[command(name = "rs-cli")]
#[command(author, version, about = "RocketShoes cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the product catalogue
    Products,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Add one unit of a product
    Add {
        /// Product ID
        product_id: ProductId,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: ProductId,
    },
    /// Set a product's quantity
    Update {
        /// Product ID
        product_id: ProductId,

        /// New quantity (values below 1 are ignored)
        #[arg(allow_negative_numbers = true)]
        amount: i32,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "rocketshoes=info,rocketshoes_cli=info,rocketshoes_storefront=error".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let state = AppState::new(config, Arc::new(TracingNotifier))?;

    match cli.command {
        Commands::Products => commands::products::list(&state).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add { product_id } => commands::cart::add(&state, product_id).await?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&state, product_id).await?;
            }
            CartAction::Update { product_id, amount } => {
                commands::cart::update(&state, product_id, amount).await?;
            }
        },
    }
    Ok(())
}
