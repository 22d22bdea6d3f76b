use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::MealType;

/// The two meals of one day. Blank strings mean "nothing planned".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    #[serde(default)]
    pub midi: String,

    #[serde(default)]
    pub soir: String,
}

impl DayMeals {
    pub fn get(&self, meal: MealType) -> &str {
        match meal {
            MealType::Midi => &self.midi,
            MealType::Soir => &self.soir,
        }
    }

    pub fn set(&mut self, meal: MealType, value: String) {
        match meal {
            MealType::Midi => self.midi = value,
            MealType::Soir => self.soir = value,
        }
    }

    /// A slot counts as empty when it is blank after trimming.
    pub fn is_blank(&self, meal: MealType) -> bool {
        self.get(meal).trim().is_empty()
    }
}

/// A plan maps day-of-month (1-based) to the meals of that day.
pub type Plan = BTreeMap<u32, DayMeals>;

/// How generated content is merged into an existing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Keep every non-blank slot the user already has; fill the rest.
    FillEmpty,
    /// Overwrite every day present in the generated plan.
    ReplaceAll,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_access() {
        let mut meals = DayMeals::default();
        meals.set(MealType::Midi, "Riz avec Poulet".to_string());

        assert_eq!(meals.get(MealType::Midi), "Riz avec Poulet");
        assert_eq!(meals.get(MealType::Soir), "");
    }

    #[test]
    fn test_is_blank_ignores_whitespace() {
        let meals = DayMeals {
            midi: "  ".to_string(),
            soir: "Soupe".to_string(),
        };

        assert!(meals.is_blank(MealType::Midi));
        assert!(!meals.is_blank(MealType::Soir));
    }
}
