//! Pending-sale accumulator.
//!
//! Assembles a multi-line sale in memory before it is submitted as a single
//! `POST /ventas` request. The basket owns a snapshot of the candidate
//! catalog and keeps its "displayed stock" figures consistent with the lines
//! added so far. Nothing here touches the network or persists anything: the
//! displayed stock is a UI hint, and the server re-validates quantities when
//! the sale is submitted.

use crate::error::{CraftshopError, Result};
use crate::models::{CustomItem, LineKind, Product, SaleLine, SaleRequest};

/// In-memory accumulator for a sale under assembly.
///
/// # Bookkeeping rules
///
/// * A catalog line with quantity `q` is accepted iff `0 < q <= displayed
///   stock`; acceptance decrements the displayed stock by `q`.
/// * A custom item always contributes exactly one unit.
/// * Removing a catalog line restores its quantity to the displayed stock.
/// * The total is recomputed from the current lines on every call.
#[derive(Debug, Clone, Default)]
pub struct SaleBasket {
    catalog: Vec<Product>,
    lines: Vec<SaleLine>,
}

impl SaleBasket {
    /// An empty basket with no catalog. Catalog lines cannot be added until
    /// a catalog is supplied via [`set_catalog`](Self::set_catalog).
    pub fn new() -> Self {
        Self::default()
    }

    /// A basket seeded with the candidate catalog. The products' stock
    /// counts become the basket's displayed-stock figures.
    pub fn with_catalog(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            lines: Vec::new(),
        }
    }

    /// Replace the catalog snapshot, e.g. after a successful submit
    /// triggered a refresh. Existing lines are kept untouched.
    pub fn set_catalog(&mut self, catalog: Vec<Product>) {
        self.catalog = catalog;
    }

    /// The catalog snapshot with its current displayed-stock figures.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// Displayed stock for a catalog product, or `None` if unknown.
    pub fn displayed_stock(&self, product_id: i64) -> Option<i64> {
        self.catalog
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.stock)
    }

    // -- Adding lines ------------------------------------------------------

    /// Add a catalog-product line.
    ///
    /// Accepted iff the product is in the catalog and `0 < quantity <=`
    /// its displayed stock. On acceptance the line is appended at the
    /// product's current price and the displayed stock is decremented.
    /// On rejection neither lines nor stock change.
    pub fn add_product(&mut self, product_id: i64, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(CraftshopError::InvalidArgument(
                "quantity must be positive".into(),
            ));
        }
        let product = self
            .catalog
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| CraftshopError::NotFound(format!("product {}", product_id)))?;
        if quantity > product.stock {
            return Err(CraftshopError::InvalidArgument(format!(
                "quantity {} exceeds available stock {}",
                quantity, product.stock
            )));
        }

        self.lines.push(SaleLine {
            kind: LineKind::Catalog,
            product_id: Some(product.id),
            custom_id: None,
            name: None,
            description: None,
            quantity,
            unit_price: product.price,
        });
        product.stock -= quantity;
        Ok(())
    }

    /// Add a custom-item line. Custom items are unique one-off orders, so
    /// the quantity is always 1. Name and description are denormalized onto
    /// the line since the item is consumed by the sale.
    pub fn add_custom(&mut self, item: &CustomItem) {
        self.lines.push(SaleLine {
            kind: LineKind::Custom,
            product_id: None,
            custom_id: Some(item.id),
            name: Some(item.name.clone()),
            description: Some(item.description.clone()),
            quantity: 1,
            unit_price: item.price,
        });
    }

    /// Like [`add_custom`](Self::add_custom), but for callers that carry a
    /// quantity field. Any quantity other than 1 is rejected.
    pub fn add_custom_with_quantity(&mut self, item: &CustomItem, quantity: i64) -> Result<()> {
        if quantity != 1 {
            return Err(CraftshopError::InvalidArgument(
                "custom items are sold one at a time".into(),
            ));
        }
        self.add_custom(item);
        Ok(())
    }

    // -- Removing lines ----------------------------------------------------

    /// Remove a line by position and return it.
    ///
    /// A catalog line restores its quantity to the product's displayed
    /// stock; a custom line has no stock to restore.
    pub fn remove_line(&mut self, index: usize) -> Result<SaleLine> {
        if index >= self.lines.len() {
            return Err(CraftshopError::NotFound(format!("line {}", index)));
        }
        let line = self.lines.remove(index);
        if line.kind == LineKind::Catalog {
            if let Some(id) = line.product_id {
                if let Some(product) = self.catalog.iter_mut().find(|p| p.id == id) {
                    product.stock += line.quantity;
                }
            }
        }
        Ok(line)
    }

    /// Drop all lines without restoring displayed stock. Used after a
    /// successful submit, where the caller re-fetches the catalog anyway.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    // -- Inspection --------------------------------------------------------

    pub fn lines(&self) -> &[SaleLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `quantity * unit_price` over the current lines.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(SaleLine::subtotal).sum()
    }

    /// Build the submission envelope. An empty basket is rejected here,
    /// before any request is constructed.
    pub fn to_request(&self) -> Result<SaleRequest> {
        if self.lines.is_empty() {
            return Err(CraftshopError::InvalidArgument(
                "sale has no line items".into(),
            ));
        }
        Ok(SaleRequest {
            lines: self.lines.clone(),
        })
    }
}
