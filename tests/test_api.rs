//! API-surface tests that must not touch the network.
//!
//! The SDK is pointed at an unroutable address, so any accidental request
//! would come back as `CraftshopError::Http`. Seeing `InvalidArgument`
//! instead proves the call was rejected locally.

mod common;

use std::time::Duration;

use craftshop_sdk::models::CustomItemDraft;
use craftshop_sdk::{CraftshopError, CraftshopSdk, SaleBasket};

fn offline_sdk() -> CraftshopSdk {
    CraftshopSdk::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn builder_rejects_empty_base_url() {
    assert!(matches!(
        CraftshopSdk::builder().base_url("  ").build(),
        Err(CraftshopError::InvalidArgument(_))
    ));
}

#[test]
fn builder_defaults_to_the_production_backend() {
    let sdk = CraftshopSdk::builder().build().unwrap();
    assert!(sdk.transport().base_url().starts_with("https://"));
}

// ---------------------------------------------------------------------------
// Local validation happens before any request
// ---------------------------------------------------------------------------

#[test]
fn submitting_an_empty_basket_never_reaches_the_network() {
    let sdk = offline_sdk();
    let basket = SaleBasket::new();

    let err = sdk.sales().submit(&basket).unwrap_err();
    assert!(matches!(err, CraftshopError::InvalidArgument(_)));
}

#[test]
fn blank_category_name_is_rejected_locally() {
    let sdk = offline_sdk();

    assert!(matches!(
        sdk.categories().create(""),
        Err(CraftshopError::InvalidArgument(_))
    ));
    assert!(matches!(
        sdk.categories().update(3, "   "),
        Err(CraftshopError::InvalidArgument(_))
    ));
}

#[test]
fn invalid_custom_item_draft_is_rejected_locally() {
    let sdk = offline_sdk();

    let blank = CustomItemDraft {
        name: "Cartel".into(),
        description: " ".into(),
        measurements: "60x20".into(),
        price: 800.0,
    };
    assert!(matches!(
        sdk.custom_orders().create(&blank),
        Err(CraftshopError::InvalidArgument(_))
    ));

    let free = CustomItemDraft {
        name: "Cartel".into(),
        description: "Tallado".into(),
        measurements: "60x20".into(),
        price: 0.0,
    };
    assert!(matches!(
        sdk.custom_orders().create(&free),
        Err(CraftshopError::InvalidArgument(_))
    ));
}

#[test]
fn custom_item_draft_validate_accepts_complete_drafts() {
    let draft = CustomItemDraft {
        name: "Cartel".into(),
        description: "Tallado".into(),
        measurements: "60x20".into(),
        price: 800.0,
    };
    assert!(draft.validate().is_ok());
}

// ---------------------------------------------------------------------------
// Network failures surface as Http, not panics
// ---------------------------------------------------------------------------

#[test]
fn unreachable_backend_yields_http_error() {
    let sdk = offline_sdk();
    assert!(matches!(
        sdk.products().list(),
        Err(CraftshopError::Http(_))
    ));
}

#[test]
fn failed_submit_leaves_the_basket_untouched() {
    let sdk = offline_sdk();
    let mut basket = SaleBasket::with_catalog(vec![common::product(1, "Mesa", 100.0, 5)]);
    basket.add_product(1, 2).unwrap();

    let err = sdk.sales().submit(&basket).unwrap_err();
    assert!(matches!(err, CraftshopError::Http(_)));

    // Nothing was persisted, so nothing is rolled back either.
    assert_eq!(basket.len(), 1);
    assert_eq!(basket.total(), 200.0);
    assert_eq!(basket.displayed_stock(1), Some(3));
}
