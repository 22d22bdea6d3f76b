use clap::Parser;
use std::collections::HashSet;
use std::path::Path;

use menu_maker_rs::cli::{CatalogAction, Cli, Command};
use menu_maker_rs::error::{MenuError, Result};
use menu_maker_rs::interface::{
    display_catalog, display_month_plan, prompt_merge_mode, prompt_total_days, prompt_week_count,
    prompt_yes_no, resolve_category_name,
};
use menu_maker_rs::models::{Catalog, MealType, Plan};
use menu_maker_rs::planner::constants::{MAX_MONTH_DAYS, MAX_WEEKS, MIN_WEEKS};
use menu_maker_rs::planner::{generate_all_weeks, generate_single_meal, merge_plans, partition};
use menu_maker_rs::state::{CatalogManager, load_catalog, load_plan, save_catalog, save_plan};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.catalog, &cli.plan),
        Command::Suggest { day, slot } => cmd_suggest(&cli.catalog, &cli.plan, day, &slot),
        Command::Show { weeks } => cmd_show(&cli.plan, weeks),
        Command::Catalog { action } => cmd_catalog(&cli.catalog, action),
        Command::Export { output } => cmd_export(&cli.plan, &output),
    }
}

/// Generate a month plan and merge it into the saved one.
fn cmd_plan(catalog_path: &str, plan_path: &str) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path);
        eprintln!("Create one with 'catalog add-category' and 'catalog add-item'.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;

    if !catalog.has_plannable_items() {
        println!("The catalog has no ingredients to plan with. Add items first.");
        return Ok(());
    }

    println!("Loaded {} categories", catalog.len());
    println!();

    // Collect planning inputs
    let total_days = prompt_total_days()?;
    let week_count = prompt_week_count()?;
    let mode = prompt_merge_mode()?;

    println!();
    println!(
        "Planning {} days across {} week buckets...",
        total_days, week_count
    );

    let ranges = partition(total_days, week_count)?;
    let mut rng = rand::thread_rng();
    let weeks = generate_all_weeks(&catalog, &ranges, &mut rng);
    let generated: Plan = weeks.into_values().flatten().collect();

    let existing = if Path::new(plan_path).exists() {
        load_plan(plan_path)?
    } else {
        Plan::new()
    };
    let merged = merge_plans(&existing, &generated, mode);

    display_month_plan(&merged, &ranges);

    let save = prompt_yes_no("Save this plan?", true)?;
    if save {
        save_plan(plan_path, &merged)?;
        println!("Plan saved to {}.", plan_path);
    }

    Ok(())
}

/// Suggest a replacement meal for one slot of one day.
fn cmd_suggest(catalog_path: &str, plan_path: &str, day: u32, slot: &str) -> Result<()> {
    let meal_type: MealType = slot.parse()?;

    if day == 0 || day > MAX_MONTH_DAYS {
        return Err(MenuError::InvalidInput(format!(
            "Day {} is out of range (1-{})",
            day, MAX_MONTH_DAYS
        )));
    }

    let path = Path::new(catalog_path);
    if !path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path);
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    if !catalog.has_plannable_items() {
        println!("The catalog has no ingredients to plan with. Add items first.");
        return Ok(());
    }

    let mut plan = if Path::new(plan_path).exists() {
        load_plan(plan_path)?
    } else {
        Plan::new()
    };

    // Everything already visible on the plan counts as taken
    let used: HashSet<String> = plan
        .values()
        .flat_map(|meals| MealType::ALL.map(|mt| meals.get(mt).to_string()))
        .filter(|meal| !meal.trim().is_empty())
        .collect();

    let mut rng = rand::thread_rng();

    match generate_single_meal(&catalog, meal_type, &used, &mut rng) {
        Ok(meal) => {
            println!("Suggestion for day {} ({}): {}", day, meal_type, meal);

            let apply = prompt_yes_no("Apply this suggestion?", true)?;
            if apply {
                plan.entry(day).or_default().set(meal_type, meal);
                save_plan(plan_path, &plan)?;
                println!("Plan saved to {}.", plan_path);
            }
        }
        Err(MenuError::NoSuggestion) => {
            println!("No suggestion available: every combination is already on the menu.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}

/// Display the saved plan grouped by week buckets.
fn cmd_show(plan_path: &str, weeks: u32) -> Result<()> {
    if !(MIN_WEEKS..=MAX_WEEKS).contains(&weeks) {
        return Err(MenuError::InvalidInput(format!(
            "Week count must be between {} and {}",
            MIN_WEEKS, MAX_WEEKS
        )));
    }

    let path = Path::new(plan_path);
    if !path.exists() {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    }

    let plan = load_plan(path)?;
    if plan.is_empty() {
        println!("The plan is empty.");
        return Ok(());
    }

    let total_days = *plan.keys().last().unwrap_or(&1);
    let ranges = partition(total_days, weeks)?;

    display_month_plan(&plan, &ranges);
    Ok(())
}

/// Inspect or edit the ingredient catalog.
fn cmd_catalog(catalog_path: &str, action: CatalogAction) -> Result<()> {
    let path = Path::new(catalog_path);
    let catalog = if path.exists() {
        load_catalog(path)?
    } else {
        Catalog::default()
    };
    let mut manager = CatalogManager::new(catalog);

    match action {
        CatalogAction::List => {
            display_catalog(manager.catalog());
            return Ok(());
        }
        CatalogAction::AddCategory { name } => {
            manager.add_category(&name)?;
            println!("Added category '{}'.", name.trim());
        }
        CatalogAction::RemoveCategory { name } => {
            let Some(resolved) = resolve_category_name(manager.catalog(), &name)? else {
                println!("No category matching '{}'.", name);
                return Ok(());
            };
            manager.remove_category(&resolved)?;
            println!("Removed category '{}'.", resolved);
        }
        CatalogAction::AddItem { category, item } => {
            let Some(resolved) = resolve_category_name(manager.catalog(), &category)? else {
                println!("No category matching '{}'.", category);
                return Ok(());
            };
            manager.add_item(&resolved, &item)?;
            println!("Added '{}' to {}.", item.trim(), resolved);
        }
        CatalogAction::RemoveItem { category, item } => {
            let Some(resolved) = resolve_category_name(manager.catalog(), &category)? else {
                println!("No category matching '{}'.", category);
                return Ok(());
            };
            manager.remove_item(&resolved, &item)?;
            println!("Removed '{}' from {}.", item.trim(), resolved);
        }
        CatalogAction::Toggle {
            category,
            slot,
            off,
        } => {
            let meal_type: MealType = slot.parse()?;
            let Some(resolved) = resolve_category_name(manager.catalog(), &category)? else {
                println!("No category matching '{}'.", category);
                return Ok(());
            };
            manager.set_meal_enabled(&resolved, meal_type, !off)?;
            println!(
                "{} '{}' for {}.",
                if off { "Disabled" } else { "Enabled" },
                resolved,
                meal_type
            );
        }
    }

    save_catalog(path, manager.catalog())?;
    println!("Catalog saved to {}.", catalog_path);

    Ok(())
}

/// Export the saved plan as CSV.
fn cmd_export(plan_path: &str, output: &str) -> Result<()> {
    let path = Path::new(plan_path);
    if !path.exists() {
        eprintln!("Plan file not found: {}", plan_path);
        return Ok(());
    }

    let plan = load_plan(path)?;
    if plan.is_empty() {
        println!("The plan is empty; nothing to export.");
        return Ok(());
    }

    let mut wtr = csv::Writer::from_path(output)?;
    wtr.write_record(["day", "midi", "soir"])?;

    for (day, meals) in &plan {
        wtr.write_record([day.to_string(), meals.midi.clone(), meals.soir.clone()])?;
    }

    wtr.flush()?;
    println!("Exported {} days to {}.", plan.len(), output);

    Ok(())
}
