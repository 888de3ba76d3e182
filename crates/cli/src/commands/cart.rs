//! Cart manipulation commands.
//!
//! Every command opens the cart over the snapshot file, applies one
//! mutation, and lets the aggregate persist the result. Two concurrent
//! invocations against the same file are last-write-wins, same as two
//! storefront tabs sharing one origin.
//!
//! # Environment Variables
//!
//! - `JR_CART_PATH` - Snapshot file location (default:
//!   `<data dir>/juniper-row/cart.json`)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use juniper_row_cart::{Cart, JsonFileStore};
use juniper_row_core::{ColorChoice, CurrencyCode, Price, Product, ProductId};

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCliError {
    /// Price argument is not a decimal number.
    #[error("Invalid price: {0}. Expected a decimal amount like 128.00")]
    InvalidPrice(String),

    /// No cart path was configured and no platform data directory exists.
    #[error("No data directory available; set JR_CART_PATH")]
    NoDataDir,
}

/// Arguments for the `cart add` command.
pub struct AddArgs {
    pub product_id: String,
    pub name: String,
    pub price: String,
    pub handle: Option<String>,
    pub quantity: u32,
    pub size: Option<String>,
    pub color: Option<String>,
    pub hex: String,
}

/// Resolve the snapshot file path from the environment.
fn cart_path() -> Result<PathBuf, CartCliError> {
    dotenvy::dotenv().ok();

    if let Ok(path) = std::env::var("JR_CART_PATH") {
        return Ok(PathBuf::from(path));
    }
    dirs::data_dir()
        .map(|dir| dir.join("juniper-row").join("cart.json"))
        .ok_or(CartCliError::NoDataDir)
}

/// Open the cart over the configured snapshot file.
fn open_cart() -> Result<Cart<JsonFileStore>, CartCliError> {
    let path = cart_path()?;
    tracing::debug!(path = %path.display(), "opening cart");
    Ok(Cart::open(JsonFileStore::new(path)))
}

/// Add a product variant to the cart.
pub fn add(args: &AddArgs) -> Result<(), CartCliError> {
    let amount = Decimal::from_str(&args.price)
        .map_err(|_| CartCliError::InvalidPrice(args.price.clone()))?;

    let handle = args
        .handle
        .clone()
        .unwrap_or_else(|| args.name.to_lowercase().replace(' ', "-"));

    let product = Product::new(
        args.product_id.as_str(),
        args.name.clone(),
        handle,
        Price::new(amount, CurrencyCode::USD),
    );

    let color = args
        .color
        .as_ref()
        .map(|name| ColorChoice::new(name.clone(), args.hex.clone()));

    let mut cart = open_cart()?;
    cart.add(product, args.quantity, args.size.clone(), color);

    tracing::info!(
        "Cart now holds {} item(s), total {}",
        cart.total_items(),
        cart.total_price()
    );
    Ok(())
}

/// Remove every variant of a product.
pub fn remove(product_id: &str) -> Result<(), CartCliError> {
    let mut cart = open_cart()?;
    cart.remove(&ProductId::new(product_id));

    tracing::info!(
        "Removed {product_id}; {} item(s) remain",
        cart.total_items()
    );
    Ok(())
}

/// Set the quantity for every variant of a product.
pub fn update(product_id: &str, quantity: u32) -> Result<(), CartCliError> {
    let mut cart = open_cart()?;
    cart.update_quantity(&ProductId::new(product_id), quantity);

    tracing::info!(
        "Updated {product_id}; {} item(s), total {}",
        cart.total_items(),
        cart.total_price()
    );
    Ok(())
}

/// Show line items and totals.
pub fn show() -> Result<(), CartCliError> {
    let cart = open_cart()?;

    if cart.items().is_empty() {
        tracing::info!("Cart is empty");
        return Ok(());
    }

    for line in cart.items() {
        let variant = match (line.selected_size.as_deref(), &line.selected_color) {
            (Some(size), Some(color)) => format!(" ({size} / {})", color.name),
            (Some(size), None) => format!(" ({size})"),
            (None, Some(color)) => format!(" ({})", color.name),
            (None, None) => String::new(),
        };
        tracing::info!(
            "{} x{} {}{variant} @ {}",
            line.product.id,
            line.quantity,
            line.product.name,
            line.product.price
        );
    }
    tracing::info!(
        "Total: {} item(s), {}",
        cart.total_items(),
        cart.total_price()
    );
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<(), CartCliError> {
    let mut cart = open_cart()?;
    cart.clear();

    tracing::info!("Cart cleared");
    Ok(())
}
