//! End-to-end scenarios over a fixture catalog (no network).

use arcano_catalog::{CATEGORY_ALL, parse_catalog};
use arcano_checkout::message::GENERIC_INQUIRY;
use arcano_core::{CartError, ProductId};
use arcano_storefront::{Storefront, StorefrontConfig};

const FIXTURE: &str = r#"[
    {"id":"a","name":"Skull","price":150,"category":"figuras-3d"},
    {"id":"b","name":"Candle","price":80,"category":"velas-rituales","size":"10 cm"},
    {"id":"c","name":"Ouija","price":420,"category":"tablas-tableros","tag":"Nuevo"}
]"#;

fn storefront() -> Storefront {
    arcano_observability::init();
    let mut storefront = Storefront::new(StorefrontConfig::default());
    storefront
        .cart_mut()
        .replace_catalog(parse_catalog(FIXTURE).unwrap());
    storefront
}

fn id(s: &str) -> ProductId {
    ProductId::new(s)
}

#[test]
fn order_flow_from_catalog_to_deep_link() {
    let mut storefront = storefront();
    storefront.cart_mut().add_item(&id("a")).unwrap();
    storefront.cart_mut().add_item(&id("a")).unwrap();
    storefront.cart_mut().add_item(&id("b")).unwrap();

    let summary = storefront.cart().summarize();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total, 38_000);

    let url = storefront.checkout_url();
    assert!(url.starts_with("https://wa.me/525630902942?text="));
    // Skull x 2 at $300.00, Candle x 1 at $80.00, total $380.00.
    assert!(url.contains("Skull"));
    assert!(url.contains("300.00"));
    assert!(url.contains("80.00"));
    assert!(url.contains("380.00"));
    // Line breaks travel as %0A, never raw.
    assert!(url.contains("%0A"));
    assert!(!url.contains('\n'));
    assert!(!url.contains(' '));
}

#[test]
fn empty_cart_checkout_is_the_generic_inquiry() {
    let storefront = storefront();
    let url = storefront.checkout_url();
    let query = url.split("?text=").nth(1).unwrap();
    assert_eq!(
        query,
        urlencoding::encode(GENERIC_INQUIRY).into_owned()
    );
}

#[test]
fn missing_product_is_recoverable_and_leaves_the_cart_alone() {
    let mut storefront = storefront();
    storefront.cart_mut().add_item(&id("a")).unwrap();
    let before = storefront.cart().summarize();

    let err = storefront
        .cart_mut()
        .add_item(&id("missing-id"))
        .unwrap_err();
    assert!(matches!(err, CartError::ProductNotFound(_)));
    assert_eq!(storefront.cart().summarize(), before);
}

#[test]
fn filtering_serves_the_view_layer() {
    let storefront = storefront();
    assert_eq!(storefront.filtered(CATEGORY_ALL).len(), 3);

    let candles = storefront.filtered("velas-rituales");
    assert_eq!(candles.len(), 1);
    assert_eq!(candles[0].name, "Candle");

    assert!(storefront.filtered("decoracion").is_empty());
}

#[test]
fn reload_reprices_survivors_and_drops_vanished_entries() {
    let mut storefront = storefront();
    storefront.cart_mut().add_item(&id("a")).unwrap();
    storefront.cart_mut().add_item(&id("c")).unwrap();

    let reloaded = parse_catalog(
        r#"[{"id":"a","name":"Skull","price":175,"category":"figuras-3d"}]"#,
    )
    .unwrap();
    storefront.cart_mut().replace_catalog(reloaded);

    let summary = storefront.cart().summarize();
    assert_eq!(summary.item_count, 1);
    assert_eq!(summary.total, 17_500);
}

#[tokio::test]
async fn failed_load_leaves_the_existing_catalog_in_place() {
    let mut storefront = Storefront::new(StorefrontConfig::new(
        "http://127.0.0.1:1/products.json",
    ));
    storefront
        .cart_mut()
        .replace_catalog(parse_catalog(FIXTURE).unwrap());
    storefront.cart_mut().add_item(&id("a")).unwrap();

    assert!(storefront.load_catalog().await.is_err());
    assert_eq!(storefront.cart().catalog().len(), 3);
    assert_eq!(storefront.cart().summarize().item_count, 1);
}
