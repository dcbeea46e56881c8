use serde::{Deserialize, Serialize};

use super::int_bool;

// ---------------------------------------------------------------------------
// Product — a stocked catalog item (`articulo`)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "medidas", default)]
    pub measurements: String,
    #[serde(rename = "en_oferta", with = "int_bool", default)]
    pub on_offer: bool,
    #[serde(rename = "destacado", with = "int_bool", default)]
    pub featured: bool,
    /// Denormalized category name as the list endpoint returns it.
    #[serde(rename = "categoria", default)]
    pub category: Option<String>,
    #[serde(rename = "imagenes", default)]
    pub images: Vec<String>,
}

impl Product {
    /// Whether the product can appear in a sale (`stock > 0`).
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// ---------------------------------------------------------------------------
// ProductDraft — create/update payload
// ---------------------------------------------------------------------------

/// Payload for `POST`/`PUT /api/articulos`. Unlike [`Product`], the category
/// is referenced by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
    pub stock: i64,
    #[serde(rename = "medidas", default)]
    pub measurements: String,
    #[serde(rename = "en_oferta", with = "int_bool", default)]
    pub on_offer: bool,
    #[serde(rename = "destacado", with = "int_bool", default)]
    pub featured: bool,
    #[serde(rename = "categoria_id")]
    pub category_id: Option<i64>,
    #[serde(rename = "imagenes", default)]
    pub images: Vec<String>,
}
