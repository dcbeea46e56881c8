//! Product CRUD against `/api/articulos`.

use crate::config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Product, ProductDraft};

/// Catalog product operations, borrowing the SDK's transport.
pub struct ProductsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ProductsApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// All catalog products.
    pub fn list(&self) -> Result<Vec<Product>> {
        self.http.get(config::PRODUCTS_PATH)
    }

    /// Products eligible for a sale (`stock > 0`), the filter the sale
    /// screen applies to its candidate list.
    pub fn list_in_stock(&self) -> Result<Vec<Product>> {
        let products = self.list()?;
        Ok(products.into_iter().filter(Product::in_stock).collect())
    }

    /// A single product by id.
    pub fn get(&self, id: i64) -> Result<Product> {
        self.http.get(&config::product_path(id))
    }

    /// Create a product. Returns the server's representation of it.
    pub fn create(&self, draft: &ProductDraft) -> Result<serde_json::Value> {
        self.http.post(config::PRODUCTS_PATH, draft)
    }

    /// Update a product in place.
    pub fn update(&self, id: i64, draft: &ProductDraft) -> Result<serde_json::Value> {
        self.http.put(&config::product_path(id), draft)
    }

    /// Delete a product.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&config::product_path(id))?;
        Ok(())
    }
}
