//! End-to-end persistence tests over the JSON file store.

use rust_decimal::Decimal;
use tempfile::tempdir;

use juniper_row_cart::{Cart, JsonFileStore, Snapshot, SnapshotStore};
use juniper_row_core::{ColorChoice, CurrencyCode, Price, Product, ProductId};

fn product(id: &str, minor_units: i64) -> Product {
    Product::new(
        id,
        format!("Product {id}"),
        format!("product-{id}"),
        Price::from_minor_units(minor_units, CurrencyCode::USD),
    )
}

#[test]
fn cart_round_trips_through_a_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut cart = Cart::open(JsonFileStore::new(&path));
    cart.add(
        product("p1", 12_800),
        2,
        Some("M".into()),
        Some(ColorChoice::new("Clay", "#b45309")),
    );
    cart.add(product("p2", 4_200), 1, None, None);
    let saved = cart.items().to_vec();
    drop(cart);

    let reopened = Cart::open(JsonFileStore::new(&path));
    assert_eq!(reopened.items(), saved.as_slice());
    assert_eq!(reopened.total_items(), 3);
    assert_eq!(reopened.total_price(), Decimal::new(29_800, 2));
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempdir().expect("tempdir");
    let cart = Cart::open(JsonFileStore::new(dir.path().join("nope.json")));
    assert!(cart.items().is_empty());
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");
    std::fs::write(&path, "][ not a snapshot").expect("write");

    let cart = Cart::open(JsonFileStore::new(&path));
    assert!(cart.items().is_empty());
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested/deeper/cart.json");

    let mut cart = Cart::open(JsonFileStore::new(&path));
    cart.add(product("p1", 1_000), 1, None, None);

    assert!(path.exists());
}

#[test]
fn clear_persists_the_empty_state() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut cart = Cart::open(JsonFileStore::new(&path));
    cart.add(product("p1", 1_000), 3, None, None);
    cart.clear();
    drop(cart);

    let store = JsonFileStore::new(&path);
    assert_eq!(store.load().expect("load"), Some(Snapshot::empty()));
}

#[test]
fn last_writer_wins_across_independent_carts() {
    // Two carts over the same path model two tabs of the same origin:
    // each holds an independent in-memory copy and there is no merge.
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cart.json");

    let mut first = Cart::open(JsonFileStore::new(&path));
    let mut second = Cart::open(JsonFileStore::new(&path));

    first.add(product("p1", 1_000), 1, None, None);
    second.add(product("p2", 2_000), 5, None, None);

    let reopened = Cart::open(JsonFileStore::new(&path));
    assert_eq!(reopened.items().len(), 1);
    assert_eq!(
        reopened.items().first().map(|line| line.product.id.clone()),
        Some(ProductId::new("p2"))
    );
}
