//! Category CRUD against `/api/categorias`.

use crate::config;
use crate::error::{CraftshopError, Result};
use crate::http::HttpClient;
use crate::models::{Category, CategoryDraft};

pub struct CategoriesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> CategoriesApi<'a> {
    pub fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub fn list(&self) -> Result<Vec<Category>> {
        self.http.get(config::CATEGORIES_PATH)
    }

    /// Create a category. The name must be non-blank.
    pub fn create(&self, name: &str) -> Result<Category> {
        self.http.post(config::CATEGORIES_PATH, &draft(name)?)
    }

    /// Rename a category. Returns the updated record.
    pub fn update(&self, id: i64, name: &str) -> Result<Category> {
        self.http.put(&config::category_path(id), &draft(name)?)
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.http.delete(&config::category_path(id))?;
        Ok(())
    }
}

fn draft(name: &str) -> Result<CategoryDraft> {
    if name.trim().is_empty() {
        return Err(CraftshopError::InvalidArgument(
            "category name must not be blank".into(),
        ));
    }
    Ok(CategoryDraft {
        name: name.to_string(),
    })
}
