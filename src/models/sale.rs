use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::flexible_datetime;

// ---------------------------------------------------------------------------
// LineKind — catalog product vs. custom item
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    #[serde(rename = "articulo")]
    Catalog,
    #[serde(rename = "personalizado")]
    Custom,
}

// ---------------------------------------------------------------------------
// SaleLine — one line of a pending or submitted sale
// ---------------------------------------------------------------------------

/// A line item as posted to `POST /ventas`.
///
/// Catalog lines reference the product by id; custom lines additionally
/// denormalize name and description, since the custom item is consumed by
/// the sale and may no longer be fetchable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleLine {
    #[serde(rename = "tipo")]
    pub kind: LineKind,
    #[serde(rename = "articulo_id", skip_serializing_if = "Option::is_none", default)]
    pub product_id: Option<i64>,
    #[serde(
        rename = "personalizado_id",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub custom_id: Option<i64>,
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
}

impl SaleLine {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

// ---------------------------------------------------------------------------
// SaleRequest — submission envelope
// ---------------------------------------------------------------------------

/// Body of `POST /ventas`: `{ "articulos": [ ... ] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRequest {
    #[serde(rename = "articulos")]
    pub lines: Vec<SaleLine>,
}

// ---------------------------------------------------------------------------
// Sale / SaleDetail — reporting reads
// ---------------------------------------------------------------------------

/// A recorded sale as returned by `GET /ventas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: i64,
    #[serde(rename = "fecha", with = "flexible_datetime")]
    pub date: NaiveDateTime,
    #[serde(default)]
    pub total: f64,
}

/// One line of a recorded sale, from `GET /ventas/:id/detalle`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleDetail {
    #[serde(rename = "detalle_id")]
    pub id: i64,
    #[serde(rename = "venta_id", default)]
    pub sale_id: Option<i64>,
    #[serde(rename = "tipo", default)]
    pub kind: Option<LineKind>,
    #[serde(rename = "cantidad")]
    pub quantity: i64,
    #[serde(rename = "precio_unitario")]
    pub unit_price: f64,
    #[serde(rename = "articulo_nombre", default)]
    pub product_name: Option<String>,
    #[serde(rename = "nombre_personalizado", default)]
    pub custom_name: Option<String>,
}

impl SaleDetail {
    pub fn is_custom(&self) -> bool {
        matches!(self.kind, Some(LineKind::Custom))
    }

    /// Name to show for this line: the custom item's name when present,
    /// otherwise the catalog product's, otherwise a placeholder.
    pub fn display_name(&self) -> &str {
        self.custom_name
            .as_deref()
            .or(self.product_name.as_deref())
            .unwrap_or("Sin nombre")
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}
