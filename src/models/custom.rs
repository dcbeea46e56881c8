use serde::{Deserialize, Serialize};

use crate::error::{CraftshopError, Result};

// ---------------------------------------------------------------------------
// CustomItem — a one-off made-to-order item (`personalizado`)
// ---------------------------------------------------------------------------

/// A custom order item. Unlike catalog products it carries no stock count:
/// each custom item exists exactly once and is consumed by the sale that
/// includes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomItem {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "medidas", default)]
    pub measurements: String,
    #[serde(rename = "precio", default)]
    pub price: f64,
}

// ---------------------------------------------------------------------------
// CustomItemDraft — creation payload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomItemDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "medidas")]
    pub measurements: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl CustomItemDraft {
    /// Local validation applied before the create request: every text field
    /// must be non-blank and the price strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty()
            || self.description.trim().is_empty()
            || self.measurements.trim().is_empty()
        {
            return Err(CraftshopError::InvalidArgument(
                "custom item fields must not be blank".into(),
            ));
        }
        if !(self.price > 0.0) {
            return Err(CraftshopError::InvalidArgument(
                "custom item price must be positive".into(),
            ));
        }
        Ok(())
    }
}
