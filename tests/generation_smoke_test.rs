use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand::rngs::StdRng;

use menu_maker_rs::models::{Catalog, Category, MealToggles, MealType};
use menu_maker_rs::planner::{
    RotationState, generate_all_weeks, generate_month, generate_single_meal, normalize_meal,
    partition,
};

fn both_slots() -> MealToggles {
    MealToggles {
        midi: true,
        soir: true,
    }
}

fn category(name: &str, items: &[&str]) -> Category {
    Category {
        name: name.to_string(),
        meals: both_slots(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        category(
            "Féculents",
            &[
                "Riz",
                "Pâtes",
                "Semoule",
                "Pommes de terre",
                "Lentilles",
                "Quinoa",
                "Boulgour",
            ],
        ),
        category(
            "Protéines",
            &[
                "Poulet", "Boeuf", "Saumon", "Tofu", "Oeufs", "Porc", "Cabillaud",
            ],
        ),
        category(
            "Légumes",
            &[
                "Brocoli",
                "Carotte",
                "Courgette",
                "Haricots verts",
                "Épinards",
                "Poireaux",
                "Chou-fleur",
            ],
        ),
    ])
}

#[test]
fn test_rotation_fairness_over_three_cycles() {
    let items: Vec<String> = ["Riz", "Pâtes", "Semoule", "Quinoa", "Boulgour"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rng = StdRng::seed_from_u64(17);
    let mut state = RotationState::new(&items, &mut rng);

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut previous: Option<String> = None;

    for _ in 0..items.len() * 3 {
        let item = state.next_item(&mut rng).unwrap();
        assert_ne!(
            previous.as_ref(),
            Some(&item),
            "same item on consecutive draws"
        );
        *counts.entry(item.clone()).or_insert(0) += 1;
        previous = Some(item);
    }

    for item in &items {
        assert_eq!(
            counts.get(item).copied().unwrap_or(0),
            3,
            "'{}' did not appear once per cycle",
            item
        );
    }
}

#[test]
fn test_month_generation_fills_every_slot() {
    let catalog = sample_catalog();
    let mut rng = StdRng::seed_from_u64(99);

    let plan = generate_month(&catalog, 31, 4, &mut rng).unwrap();

    assert_eq!(plan.len(), 31);
    for (day, meals) in &plan {
        for meal_type in MealType::ALL {
            assert!(
                !meals.is_blank(meal_type),
                "day {} has a blank {} slot",
                day,
                meal_type
            );
        }
    }
}

#[test]
fn test_weeks_are_generated_independently() {
    let catalog = sample_catalog();
    let mut rng = StdRng::seed_from_u64(3);
    let ranges = partition(30, 4).unwrap();

    let weeks = generate_all_weeks(&catalog, &ranges, &mut rng);

    assert_eq!(weeks.len(), 4);
    for range in &ranges {
        let plan = &weeks[&range.week_number];
        let plan_days: Vec<u32> = plan.keys().copied().collect();
        assert_eq!(plan_days, range.days, "week {} days mismatch", range.week_number);
    }
}

#[test]
fn test_meals_unique_within_each_week() {
    let catalog = sample_catalog();
    let mut rng = StdRng::seed_from_u64(21);
    let ranges = partition(28, 4).unwrap();

    let weeks = generate_all_weeks(&catalog, &ranges, &mut rng);

    // 14 slots per week against a 7x7x7 combination space: no repeats expected
    for (week_number, plan) in &weeks {
        let mut seen = HashSet::new();
        for meals in plan.values() {
            for meal_type in MealType::ALL {
                assert!(
                    seen.insert(normalize_meal(meals.get(meal_type))),
                    "week {} repeats '{}'",
                    week_number,
                    meals.get(meal_type)
                );
            }
        }
    }
}

#[test]
fn test_single_meal_strict_when_used_set_saturates() {
    // Two categories of two items: exactly four possible compositions
    let catalog = Catalog::new(vec![
        category("Féculents", &["Riz", "Pâtes"]),
        category("Protéines", &["Poulet", "Tofu"]),
    ]);

    let used: HashSet<String> = [
        "Riz avec Poulet",
        "Riz avec Tofu",
        "Pâtes avec Poulet",
        "Pâtes avec Tofu",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let result = generate_single_meal(&catalog, MealType::Midi, &used, &mut rng);
        assert!(
            result.is_err(),
            "seed {} returned a duplicate instead of failing",
            seed
        );
    }
}

#[test]
fn test_single_meal_finds_the_remaining_item() {
    let catalog = Catalog::new(vec![category("Féculents", &["Riz", "Pâtes", "Semoule"])]);

    // Leave exactly one item free; the rotation must reach it within one cycle
    let used: HashSet<String> = ["Riz", "semoule "].iter().map(|s| s.to_string()).collect();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let meal = generate_single_meal(&catalog, MealType::Midi, &used, &mut rng).unwrap();
        assert_eq!(meal, "Pâtes", "seed {} picked a used item", seed);
    }
}

#[test]
fn test_slot_disabled_everywhere_stays_blank() {
    let catalog = Catalog::new(vec![Category {
        name: "Féculents".to_string(),
        meals: MealToggles {
            midi: true,
            soir: false,
        },
        items: vec!["Riz".to_string(), "Pâtes".to_string()],
    }]);

    let mut rng = StdRng::seed_from_u64(12);
    let plan = generate_month(&catalog, 28, 4, &mut rng).unwrap();

    for meals in plan.values() {
        assert!(!meals.is_blank(MealType::Midi));
        assert!(meals.is_blank(MealType::Soir));
    }
}
