use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// One of the two meal slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MealType {
    Midi,
    Soir,
}

impl MealType {
    pub const ALL: [MealType; 2] = [MealType::Midi, MealType::Soir];
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Midi => write!(f, "midi"),
            MealType::Soir => write!(f, "soir"),
        }
    }
}

impl FromStr for MealType {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "midi" => Ok(MealType::Midi),
            "soir" => Ok(MealType::Soir),
            other => Err(MenuError::InvalidInput(format!(
                "Unknown meal slot '{}' (expected midi or soir)",
                other
            ))),
        }
    }
}

/// Per-slot enable flags for a category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MealToggles {
    #[serde(default)]
    pub midi: bool,

    #[serde(default)]
    pub soir: bool,
}

/// A named group of interchangeable ingredients.
///
/// Items are expected to be unique within a category; `CatalogManager`
/// de-duplicates on construction and load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,

    #[serde(default)]
    pub meals: MealToggles,

    #[serde(default)]
    pub items: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meals: MealToggles::default(),
            items: Vec::new(),
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn enabled_for(&self, meal: MealType) -> bool {
        match meal {
            MealType::Midi => self.meals.midi,
            MealType::Soir => self.meals.soir,
        }
    }

    pub fn set_enabled(&mut self, meal: MealType, enabled: bool) {
        match meal {
            MealType::Midi => self.meals.midi = enabled,
            MealType::Soir => self.meals.soir = enabled,
        }
    }

    /// Basic validation: a category needs a non-blank name.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// The full ingredient catalog, in user-defined order.
///
/// Order matters: generation draws categories for a slot in catalog order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut Vec<Category> {
        &mut self.categories
    }

    /// Get a category by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Category> {
        let key = name.to_lowercase();
        self.categories.iter().find(|c| c.key() == key)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Category> {
        let key = name.to_lowercase();
        self.categories.iter_mut().find(|c| c.key() == key)
    }

    /// True iff at least one category has a non-empty item list.
    ///
    /// Precondition for generation; callers must refuse to generate when
    /// this is false.
    pub fn has_plannable_items(&self) -> bool {
        self.categories.iter().any(|c| !c.items.is_empty())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_category() -> Category {
        Category {
            name: "Légumes".to_string(),
            meals: MealToggles {
                midi: true,
                soir: false,
            },
            items: vec!["Carotte".to_string(), "Brocoli".to_string()],
        }
    }

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!("midi".parse::<MealType>().unwrap(), MealType::Midi);
        assert_eq!(" Soir ".parse::<MealType>().unwrap(), MealType::Soir);
        assert!("matin".parse::<MealType>().is_err());
    }

    #[test]
    fn test_enabled_for() {
        let category = sample_category();
        assert!(category.enabled_for(MealType::Midi));
        assert!(!category.enabled_for(MealType::Soir));
    }

    #[test]
    fn test_set_enabled() {
        let mut category = sample_category();
        category.set_enabled(MealType::Soir, true);
        assert!(category.enabled_for(MealType::Soir));
    }

    #[test]
    fn test_catalog_lookup_case_insensitive() {
        let catalog = Catalog::new(vec![sample_category()]);
        assert!(catalog.get("légumes").is_some());
        assert!(catalog.get("LÉGUMES").is_some());
        assert!(catalog.get("fruits").is_none());
    }

    #[test]
    fn test_has_plannable_items() {
        assert!(!Catalog::default().has_plannable_items());

        let mut empty_items = sample_category();
        empty_items.items.clear();
        assert!(!Catalog::new(vec![empty_items]).has_plannable_items());

        assert!(Catalog::new(vec![sample_category()]).has_plannable_items());
    }
}
