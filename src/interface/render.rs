use std::collections::HashSet;

use crate::models::{Catalog, MealType, Plan};
use crate::planner::weeks::WeekRange;

const EMPTY_SLOT: &str = "—";

/// Display a plan grouped by its week buckets.
pub fn display_month_plan(plan: &Plan, ranges: &[WeekRange]) {
    if plan.is_empty() {
        println!("No plan to display.");
        return;
    }

    // Align the soir column on the widest midi entry
    let midi_width = plan
        .values()
        .map(|m| m.midi.chars().count())
        .max()
        .unwrap_or(0)
        .max(EMPTY_SLOT.chars().count());

    for range in ranges {
        if range.is_empty() {
            continue;
        }

        println!();
        println!(
            "=== Week {} (days {}-{}) ===",
            range.week_number, range.start_day, range.end_day
        );
        println!();

        for day in &range.days {
            let Some(meals) = plan.get(day) else {
                continue;
            };
            println!(
                "{:>3}. midi: {:<width$}  soir: {}",
                day,
                slot_text(meals.get(MealType::Midi)),
                slot_text(meals.get(MealType::Soir)),
                width = midi_width
            );
        }
    }

    let covered: HashSet<u32> = ranges.iter().flat_map(|r| r.days.iter().copied()).collect();
    let leftovers: Vec<u32> = plan.keys().copied().filter(|d| !covered.contains(d)).collect();

    if !leftovers.is_empty() {
        println!();
        println!("--- Days outside the week split ---");
        for day in leftovers {
            let meals = &plan[&day];
            println!(
                "{:>3}. midi: {:<width$}  soir: {}",
                day,
                slot_text(meals.get(MealType::Midi)),
                slot_text(meals.get(MealType::Soir)),
                width = midi_width
            );
        }
    }

    println!();
}

/// Display the catalog with slot markers and item lists.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The catalog is empty.");
        return;
    }

    println!();
    println!("=== Catalog ({} categories) ===", catalog.len());
    println!();

    for category in catalog.categories() {
        let slots = match (category.meals.midi, category.meals.soir) {
            (true, true) => "midi+soir",
            (true, false) => "midi",
            (false, true) => "soir",
            (false, false) => "disabled",
        };

        println!(
            "  {} [{}] - {} items",
            category.name,
            slots,
            category.items.len()
        );

        if !category.items.is_empty() {
            println!("      {}", category.items.join(", "));
        }
    }

    println!();
}

fn slot_text(meal: &str) -> &str {
    if meal.trim().is_empty() { EMPTY_SLOT } else { meal }
}
