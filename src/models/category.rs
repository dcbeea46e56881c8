use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Payload for category creation and renames: `{ "nombre": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDraft {
    #[serde(rename = "nombre")]
    pub name: String,
}
