use std::collections::{BTreeMap, HashMap, HashSet};

use rand::Rng;

use crate::error::{MenuError, Result};
use crate::models::{Catalog, DayMeals, MealType, MergeMode, Plan};
use crate::planner::composer::{MealSuggestion, normalize_meal, suggest_meal};
use crate::planner::constants::{SINGLE_SUGGESTION_ATTEMPTS, WEEK_FILL_ATTEMPTS};
use crate::planner::rotation::{RotationState, active_categories};
use crate::planner::weeks::{WeekRange, partition};

/// Fresh per-category rotation state for one generation run.
pub fn build_rotations<R: Rng>(catalog: &Catalog, rng: &mut R) -> HashMap<String, RotationState> {
    catalog
        .categories()
        .iter()
        .map(|c| (c.name.clone(), RotationState::new(&c.items, rng)))
        .collect()
}

/// Fill both slots of every listed day.
///
/// One used set spans the whole call, so meals stay distinct across the
/// week being generated, not merely within a day. A slot that exhausts its
/// retry budget keeps the duplicate rather than failing.
pub fn generate_week<R: Rng>(catalog: &Catalog, days: &[u32], rng: &mut R) -> Plan {
    let mut rotations = build_rotations(catalog, rng);
    let mut already_used: HashSet<String> = HashSet::new();
    let mut plan = Plan::new();

    for &day in days {
        let mut meals = DayMeals::default();
        for meal_type in MealType::ALL {
            let categories = active_categories(catalog, meal_type);
            let suggestion = suggest_meal(
                &mut rotations,
                &categories,
                &already_used,
                WEEK_FILL_ATTEMPTS,
                rng,
            );
            let meal = suggestion.into_inner();
            already_used.insert(normalize_meal(&meal));
            meals.set(meal_type, meal);
        }
        plan.insert(day, meals);
    }

    plan
}

/// Generate every week of the month independently.
///
/// Each week gets fresh rotation state and a fresh used set: uniqueness is
/// only attempted within a week, and cross-week repetition is allowed.
pub fn generate_all_weeks<R: Rng>(
    catalog: &Catalog,
    ranges: &[WeekRange],
    rng: &mut R,
) -> BTreeMap<u32, Plan> {
    ranges
        .iter()
        .map(|range| (range.week_number, generate_week(catalog, &range.days, rng)))
        .collect()
}

/// Partition the month, fill every week, and flatten into one plan.
pub fn generate_month<R: Rng>(
    catalog: &Catalog,
    total_days: u32,
    week_count: u32,
    rng: &mut R,
) -> Result<Plan> {
    let ranges = partition(total_days, week_count)?;
    let weeks = generate_all_weeks(catalog, &ranges, rng);
    Ok(weeks.into_values().flatten().collect())
}

/// One-slot regeneration for an interactive caller.
///
/// Stricter than week filling: when every attempt collides with
/// `used_meals`, this reports `NoSuggestion` instead of accepting a repeat.
pub fn generate_single_meal<R: Rng>(
    catalog: &Catalog,
    meal: MealType,
    used_meals: &HashSet<String>,
    rng: &mut R,
) -> Result<String> {
    let mut rotations = build_rotations(catalog, rng);
    let categories = active_categories(catalog, meal);
    let already_used: HashSet<String> = used_meals.iter().map(|m| normalize_meal(m)).collect();

    match suggest_meal(
        &mut rotations,
        &categories,
        &already_used,
        SINGLE_SUGGESTION_ATTEMPTS,
        rng,
    ) {
        MealSuggestion::Unique(meal) => Ok(meal),
        MealSuggestion::Duplicate(_) => Err(MenuError::NoSuggestion),
    }
}

/// Merge generated content into an existing plan.
///
/// `ReplaceAll` overwrites every day present in `generated`; days present
/// only in `existing` are preserved. `FillEmpty` keeps any slot that is
/// non-blank after trimming and fills the rest.
pub fn merge_plans(existing: &Plan, generated: &Plan, mode: MergeMode) -> Plan {
    let mut result = existing.clone();

    match mode {
        MergeMode::ReplaceAll => {
            for (day, meals) in generated {
                result.insert(*day, meals.clone());
            }
        }
        MergeMode::FillEmpty => {
            for (day, generated_meals) in generated {
                let entry = result.entry(*day).or_default();
                for meal_type in MealType::ALL {
                    if entry.is_blank(meal_type) {
                        entry.set(meal_type, generated_meals.get(meal_type).to_string());
                    }
                }
            }
        }
    }

    result
}
