//! Custom-order listing and creation against `/pedidos_personalizados`.

use crate::config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{CustomItem, CustomItemDraft};

pub struct CustomOrdersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CustomOrdersApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Every registered custom item, sold or not.
    pub fn list(&self) -> Result<Vec<CustomItem>> {
        self.http.get(config::CUSTOM_ORDERS_PATH)
    }

    /// Custom items still available for a sale. The backend owns this
    /// filter; the client applies no heuristic of its own.
    pub fn available(&self) -> Result<Vec<CustomItem>> {
        self.http.get(config::CUSTOM_ORDERS_AVAILABLE_PATH)
    }

    /// Register a new custom item after local validation (non-blank fields,
    /// positive price).
    pub fn create(&self, draft: &CustomItemDraft) -> Result<serde_json::Value> {
        draft.validate()?;
        self.http.post(config::CUSTOM_ORDERS_PATH, draft)
    }
}
