use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::planner::rotation::RotationState;

/// Join selected ingredients into one meal phrase.
///
/// `["Riz"]` → `Riz`; `["Riz", "Poulet"]` → `Riz avec Poulet`;
/// `["Riz", "Poulet", "Brocoli"]` → `Riz, Poulet et Brocoli`.
pub fn compose(parts: &[String]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{} avec {}", first, second),
        [head @ .., last] => format!("{} et {}", head.join(", "), last),
    }
}

/// Canonical form for duplicate detection: trimmed, inner whitespace runs
/// collapsed, lowercased.
pub fn normalize_meal(meal: &str) -> String {
    meal.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Outcome of a bounded-retry suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealSuggestion {
    /// Not seen before (after normalization).
    Unique(String),
    /// Every attempt collided; carries the last composition tried.
    Duplicate(String),
}

impl MealSuggestion {
    pub fn into_inner(self) -> String {
        match self {
            MealSuggestion::Unique(meal) | MealSuggestion::Duplicate(meal) => meal,
        }
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, MealSuggestion::Unique(_))
    }
}

/// Compose a meal from the active categories, retrying up to `max_attempts`
/// times for one whose normalized form is not in `already_used`.
///
/// Exhausting the budget returns `Duplicate` with the last composition.
/// Whether that is acceptable is the caller's policy: week filling takes it
/// as-is, the interactive single-slot path refuses it.
pub fn suggest_meal<R: Rng>(
    rotations: &mut HashMap<String, RotationState>,
    categories: &[&str],
    already_used: &HashSet<String>,
    max_attempts: u32,
    rng: &mut R,
) -> MealSuggestion {
    let mut last_attempt = String::new();

    for _ in 0..max_attempts {
        let mut parts = Vec::with_capacity(categories.len());
        for name in categories {
            if let Some(state) = rotations.get_mut(*name) {
                if let Some(item) = state.next_item(rng) {
                    parts.push(item);
                }
            }
        }

        let meal = compose(&parts);
        if !already_used.contains(&normalize_meal(&meal)) {
            return MealSuggestion::Unique(meal);
        }
        last_attempt = meal;
    }

    MealSuggestion::Duplicate(last_attempt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rotations_for(items: &[&str]) -> HashMap<String, RotationState> {
        let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        let mut rng = StdRng::seed_from_u64(5);
        let mut map = HashMap::new();
        map.insert("Féculents".to_string(), RotationState::new(&items, &mut rng));
        map
    }

    #[test]
    fn test_compose_formatting() {
        assert_eq!(compose(&[]), "");
        assert_eq!(compose(&["Riz".to_string()]), "Riz");
        assert_eq!(
            compose(&["Riz".to_string(), "Poulet".to_string()]),
            "Riz avec Poulet"
        );
        assert_eq!(
            compose(&[
                "Riz".to_string(),
                "Poulet".to_string(),
                "Brocoli".to_string()
            ]),
            "Riz, Poulet et Brocoli"
        );
        assert_eq!(
            compose(&[
                "Riz".to_string(),
                "Poulet".to_string(),
                "Brocoli".to_string(),
                "Salade".to_string()
            ]),
            "Riz, Poulet, Brocoli et Salade"
        );
    }

    #[test]
    fn test_normalize_meal() {
        assert_eq!(normalize_meal("  Riz  avec   Poulet "), "riz avec poulet");
        assert_eq!(normalize_meal("PÂTES"), "pâtes");
        assert_eq!(normalize_meal("   "), "");
    }

    #[test]
    fn test_suggest_meal_returns_unique_when_possible() {
        let mut rotations = rotations_for(&["Riz", "Pâtes"]);
        let mut rng = StdRng::seed_from_u64(9);
        let used: HashSet<String> = ["riz".to_string()].into_iter().collect();

        let suggestion = suggest_meal(&mut rotations, &["Féculents"], &used, 10, &mut rng);

        assert_eq!(suggestion, MealSuggestion::Unique("Pâtes".to_string()));
    }

    #[test]
    fn test_suggest_meal_soft_accepts_after_exhaustion() {
        let mut rotations = rotations_for(&["Riz"]);
        let mut rng = StdRng::seed_from_u64(9);
        let used: HashSet<String> = ["riz".to_string()].into_iter().collect();

        let suggestion = suggest_meal(&mut rotations, &["Féculents"], &used, 10, &mut rng);

        assert_eq!(suggestion, MealSuggestion::Duplicate("Riz".to_string()));
        assert!(!suggestion.is_unique());
    }

    #[test]
    fn test_suggest_meal_without_categories_is_blank() {
        let mut rotations = HashMap::new();
        let mut rng = StdRng::seed_from_u64(9);

        let suggestion = suggest_meal(&mut rotations, &[], &HashSet::new(), 10, &mut rng);

        assert_eq!(suggestion, MealSuggestion::Unique(String::new()));
    }
}
