//! Juniper Row CLI - Cart inspection and manipulation tools.
//!
//! # Usage
//!
//! ```bash
//! # Add two size-M "Clay" dresses to the cart
//! jr-cli cart add -p prod_123 -n "Linen Wrap Dress" --price 128.00 \
//!     -q 2 --size M --color Clay --hex "#b45309"
//!
//! # Set the quantity for every variant of a product
//! jr-cli cart update -p prod_123 -q 4
//!
//! # Remove every variant of a product
//! jr-cli cart remove -p prod_123
//!
//! # Show line items and totals
//! jr-cli cart show
//!
//! # Empty the cart
//! jr-cli cart clear
//! ```
//!
//! # Environment Variables
//!
//! - `JR_CART_PATH` - Snapshot file location (default:
//!   `<data dir>/juniper-row/cart.json`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "jr-cli")]
#[command(author, version, about = "Juniper Row CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and manipulate the on-device cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product variant to the cart
    Add {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// Product display name
        #[arg(short, long)]
        name: String,

        /// Unit price in the standard currency unit (e.g., 128.00)
        #[arg(long)]
        price: String,

        /// URL handle (defaults to a slug of the name)
        #[arg(long)]
        handle: Option<String>,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Size variant (e.g., M)
        #[arg(long)]
        size: Option<String>,

        /// Color variant name (e.g., Clay)
        #[arg(long)]
        color: Option<String>,

        /// Color hex for swatch display (requires --color)
        #[arg(long, requires = "color", default_value = "#000000")]
        hex: String,
    },
    /// Remove every variant of a product from the cart
    Remove {
        /// Product ID
        #[arg(short, long)]
        product: String,
    },
    /// Set the quantity for every variant of a product (0 removes)
    Update {
        /// Product ID
        #[arg(short, long)]
        product: String,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Show line items and totals
    Show,
    /// Empty the cart
    Clear,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add {
                product,
                name,
                price,
                handle,
                quantity,
                size,
                color,
                hex,
            } => commands::cart::add(&commands::cart::AddArgs {
                product_id: product,
                name,
                price,
                handle,
                quantity,
                size,
                color,
                hex,
            })?,
            CartAction::Remove { product } => commands::cart::remove(&product)?,
            CartAction::Update { product, quantity } => {
                commands::cart::update(&product, quantity)?;
            }
            CartAction::Show => commands::cart::show()?,
            CartAction::Clear => commands::cart::clear()?,
        },
    }
    Ok(())
}
