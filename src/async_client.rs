//! Async wrapper around [`CraftshopSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the backend.
//!
//! # Example
//!
//! ```no_run
//! use craftshop_sdk::AsyncCraftshopSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncCraftshopSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let products = sdk.run(|s| s.products().list_in_stock()).await.unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::basket::SaleBasket;
use crate::error::{CraftshopError, Result};
use crate::models::{Category, Product, Sale};
use crate::report::{ReportRange, SalesReport};
use crate::CraftshopSdk;

// ---------------------------------------------------------------------------
// AsyncCraftshopSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCraftshopSdk`] instance.
pub struct AsyncCraftshopSdkBuilder {
    base_url: Option<String>,
    timeout: Duration,
}

impl Default for AsyncCraftshopSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: crate::config::default_timeout(),
        }
    }
}

impl AsyncCraftshopSdkBuilder {
    /// Point the SDK at a different backend.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncCraftshopSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CraftshopSdk::builder();
            if let Some(url) = self.base_url {
                builder = builder.base_url(url);
            }
            let sdk = builder.timeout(self.timeout).build()?;
            Ok(AsyncCraftshopSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CraftshopError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCraftshopSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CraftshopSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`CraftshopSdk`] is
/// protected by a [`Mutex`] since its transport uses `RefCell` internally.
pub struct AsyncCraftshopSdk {
    inner: Arc<Mutex<CraftshopSdk>>,
}

impl AsyncCraftshopSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCraftshopSdkBuilder {
        AsyncCraftshopSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&CraftshopSdk` reference and should return a
    /// `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use craftshop_sdk::AsyncCraftshopSdk;
    /// # async fn example() -> craftshop_sdk::Result<()> {
    /// # let sdk = AsyncCraftshopSdk::builder().build().await?;
    /// let categories = sdk.run(|s| s.categories().list()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CraftshopSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CraftshopError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CraftshopError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// List the products eligible for a sale.
    pub async fn products_in_stock(&self) -> Result<Vec<Product>> {
        self.run(|s| s.products().list_in_stock()).await
    }

    /// List every category.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.run(|s| s.categories().list()).await
    }

    /// List every recorded sale.
    pub async fn sales(&self) -> Result<Vec<Sale>> {
        self.run(|s| s.sales().list()).await
    }

    /// Submit an assembled basket as one sale.
    pub async fn submit(&self, basket: SaleBasket) -> Result<serde_json::Value> {
        self.run(move |s| s.sales().submit(&basket)).await
    }

    /// Fetch and aggregate a sales report for the given range.
    pub async fn report(&self, range: ReportRange) -> Result<SalesReport> {
        self.run(move |s| s.sales().report(range)).await
    }
}
