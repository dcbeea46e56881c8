//! CraftShop SDK for Rust.
//!
//! Provides a high-level client for the CraftShop inventory/point-of-sale
//! REST backend: catalog product and category CRUD, custom-order
//! registration, sale submission, and sales-report aggregation. The
//! pending-sale bookkeeping ([`SaleBasket`]) and report math
//! ([`report::SalesReport`]) are pure in-memory logic; everything else is a
//! thin JSON round-trip.
//!
//! # Quick start
//!
//! ```no_run
//! use craftshop_sdk::CraftshopSdk;
//!
//! let sdk = CraftshopSdk::builder().build().unwrap();
//!
//! // Assemble and submit a sale
//! let catalog = sdk.products().list_in_stock().unwrap();
//! let mut basket = craftshop_sdk::SaleBasket::with_catalog(catalog);
//! basket.add_product(7, 2).unwrap();
//! sdk.sales().submit(&basket).unwrap();
//! basket.clear();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod api;
pub mod basket;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod report;

#[cfg(feature = "async")]
pub use async_client::AsyncCraftshopSdk;
pub use basket::SaleBasket;
pub use error::{CraftshopError, Result};
pub use http::HttpClient;
pub use report::{ReportRange, SalesReport};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CraftshopSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CraftshopSdk`] instance.
///
/// Use [`CraftshopSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](CraftshopSdkBuilder::build) to create the SDK.
pub struct CraftshopSdkBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for CraftshopSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::default_timeout(),
        }
    }
}

impl CraftshopSdkBuilder {
    /// Point the SDK at a different backend, e.g. a staging deployment.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the SDK. No request is made until the first operation.
    pub fn build(self) -> Result<CraftshopSdk> {
        if self.base_url.trim().is_empty() {
            return Err(CraftshopError::InvalidArgument(
                "base URL must not be empty".into(),
            ));
        }
        Ok(CraftshopSdk {
            http: HttpClient::new(self.base_url, self.timeout),
        })
    }
}

// ---------------------------------------------------------------------------
// CraftshopSdk
// ---------------------------------------------------------------------------

/// The main entry point for the CraftShop SDK.
///
/// Wraps an [`HttpClient`] bound to one backend and exposes the resource
/// interfaces as lightweight borrowing wrappers.
///
/// Created via [`CraftshopSdk::builder()`].
pub struct CraftshopSdk {
    http: HttpClient,
}

impl CraftshopSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> CraftshopSdkBuilder {
        CraftshopSdkBuilder::default()
    }

    // -- Resource accessors ------------------------------------------------

    /// Catalog product CRUD.
    pub fn products(&self) -> api::ProductsApi<'_> {
        api::ProductsApi::new(&self.http)
    }

    /// Category CRUD.
    pub fn categories(&self) -> api::CategoriesApi<'_> {
        api::CategoriesApi::new(&self.http)
    }

    /// Custom-order listing and creation.
    pub fn custom_orders(&self) -> api::CustomOrdersApi<'_> {
        api::CustomOrdersApi::new(&self.http)
    }

    /// Sale submission and reporting reads.
    pub fn sales(&self) -> api::SalesApi<'_> {
        api::SalesApi::new(&self.http)
    }

    // -- Utility -----------------------------------------------------------

    /// Return a reference to the underlying transport for advanced usage,
    /// e.g. an endpoint not covered by the resource interfaces.
    pub fn transport(&self) -> &HttpClient {
        &self.http
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for CraftshopSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CraftshopSdk(base_url={})", self.http.base_url())
    }
}
