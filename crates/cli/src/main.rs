//! Corner Shop CLI - Drive the cart from a terminal.
//!
//! Each invocation is one page view: the cart is loaded from durable storage,
//! one action runs against it, and the updated cart is shown.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (repeat to increase its quantity)
//! shop-cart add "Rooibos Tea" 45.50
//!
//! # Set an exact quantity (0 or below removes the line)
//! shop-cart set "Rooibos Tea" 3
//!
//! # Show the cart as text or as the HTML fragment
//! shop-cart show
//! shop-cart show --html
//!
//! # Check out, skipping the confirmation prompt
//! shop-cart checkout --yes
//! ```
//!
//! Configuration comes from `CART_*` environment variables (see
//! `corner_shop_storefront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use corner_shop_core::Price;
use corner_shop_storefront::CartStore;
use corner_shop_storefront::config::{CartConfig, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shop-cart")]
#[command(author, version, about = "Corner Shop cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product
    Add {
        /// Product name
        name: String,

        /// Unit price (ignored if the product is already in the cart)
        price: Price,
    },
    /// Remove a product entirely
    Remove {
        /// Product name
        name: String,
    },
    /// Set a product's quantity
    Set {
        /// Product name
        name: String,

        /// New quantity; 0 or below removes the product
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Show the cart
    Show {
        /// Render the HTML fragment instead of text
        #[arg(long)]
        html: bool,
    },
    /// Print the badge count
    Count,
    /// Check out (simulated, no payment is taken)
    Checkout {
        /// Confirm without prompting
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_tracing(format: LogFormat) {
    // Defaults to warnings from the library and info from the CLI if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "corner_shop_storefront=warn,shop_cart=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match CartConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogFormat::Pretty);
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &CartConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = CartStore::open_with_key(config.file_store(), &config.storage_key);
    let symbol = config.currency_symbol.as_str();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Add { name, price } => {
            commands::cart::add(&mut cart, &mut out, symbol, &name, price)?;
        }
        Commands::Remove { name } => commands::cart::remove(&mut cart, &mut out, symbol, &name)?,
        Commands::Set { name, quantity } => {
            commands::cart::set_quantity(&mut cart, &mut out, symbol, &name, quantity)?;
        }
        Commands::Clear => commands::cart::clear(&mut cart, &mut out, symbol)?,
        Commands::Show { html } => commands::cart::show(&cart, &mut out, symbol, html)?,
        Commands::Count => commands::cart::count(&cart, &mut out)?,
        Commands::Checkout { yes } => {
            let mut input = std::io::stdin().lock();
            commands::checkout::run(&mut cart, &mut out, &mut input, symbol, yes)?;
        }
    }
    Ok(())
}
