use std::collections::HashSet;

use crate::error::{MenuError, Result};
use crate::models::{Catalog, Category, MealType};

/// Owns the ingredient catalog and keeps it consistent.
///
/// Categories are unique by case-insensitive name (last occurrence wins on
/// construction, matching load semantics); items are unique within their
/// category (first occurrence wins). Generation assumes both.
pub struct CatalogManager {
    catalog: Catalog,
}

impl CatalogManager {
    pub fn new(catalog: Catalog) -> Self {
        let mut deduped: Vec<Category> = Vec::new();
        for mut category in catalog.categories().to_vec() {
            if !category.is_valid() {
                continue;
            }
            dedupe_items(&mut category.items);
            match deduped.iter_mut().find(|c| c.key() == category.key()) {
                Some(existing) => *existing = category,
                None => deduped.push(category),
            }
        }
        Self {
            catalog: Catalog::new(deduped),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Get a category by name (case-insensitive).
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.catalog.get(name)
    }

    pub fn add_category(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MenuError::InvalidInput(
                "Category name cannot be blank".to_string(),
            ));
        }
        if self.catalog.get(name).is_some() {
            return Err(MenuError::InvalidInput(format!(
                "Category '{}' already exists",
                name
            )));
        }

        self.catalog.categories_mut().push(Category::new(name));
        Ok(())
    }

    pub fn remove_category(&mut self, name: &str) -> Result<()> {
        let key = name.trim().to_lowercase();
        let categories = self.catalog.categories_mut();
        let before = categories.len();
        categories.retain(|c| c.key() != key);

        if categories.len() == before {
            return Err(MenuError::CategoryNotFound(name.to_string()));
        }
        Ok(())
    }

    pub fn add_item(&mut self, category: &str, item: &str) -> Result<()> {
        let item = item.trim();
        if item.is_empty() {
            return Err(MenuError::InvalidInput(
                "Item name cannot be blank".to_string(),
            ));
        }

        let entry = self
            .catalog
            .get_mut(category)
            .ok_or_else(|| MenuError::CategoryNotFound(category.to_string()))?;

        let duplicate = entry
            .items
            .iter()
            .any(|existing| existing.to_lowercase() == item.to_lowercase());
        if duplicate {
            return Err(MenuError::InvalidInput(format!(
                "'{}' is already in {}",
                item, entry.name
            )));
        }

        entry.items.push(item.to_string());
        Ok(())
    }

    pub fn remove_item(&mut self, category: &str, item: &str) -> Result<()> {
        let entry = self
            .catalog
            .get_mut(category)
            .ok_or_else(|| MenuError::CategoryNotFound(category.to_string()))?;

        let key = item.trim().to_lowercase();
        let before = entry.items.len();
        entry.items.retain(|existing| existing.to_lowercase() != key);

        if entry.items.len() == before {
            return Err(MenuError::InvalidInput(format!(
                "'{}' is not in {}",
                item, entry.name
            )));
        }
        Ok(())
    }

    pub fn set_meal_enabled(&mut self, category: &str, meal: MealType, enabled: bool) -> Result<()> {
        let entry = self
            .catalog
            .get_mut(category)
            .ok_or_else(|| MenuError::CategoryNotFound(category.to_string()))?;

        entry.set_enabled(meal, enabled);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

fn dedupe_items(items: &mut Vec<String>) {
    let mut seen = HashSet::new();
    items.retain(|item| seen.insert(item.trim().to_lowercase()));
}
