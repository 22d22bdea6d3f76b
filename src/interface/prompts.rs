use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MenuError, Result};
use crate::models::{Catalog, MergeMode};
use crate::planner::constants::{MAX_MONTH_DAYS, MAX_WEEKS, MIN_MONTH_DAYS, MIN_WEEKS};

/// Prompt for the number of days in the month being planned.
pub fn prompt_total_days() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "How many days does the month have? ({}-{})",
            MIN_MONTH_DAYS, MAX_MONTH_DAYS
        ))
        .default("30".to_string())
        .interact_text()?;

    let days: u32 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_MONTH_DAYS..=MAX_MONTH_DAYS).contains(&days) {
        return Err(MenuError::InvalidInput(format!(
            "Month length must be between {} and {}",
            MIN_MONTH_DAYS, MAX_MONTH_DAYS
        )));
    }

    Ok(days)
}

/// Prompt for the number of week buckets to split the month into.
pub fn prompt_week_count() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "How many week buckets? ({}-{})",
            MIN_WEEKS, MAX_WEEKS
        ))
        .default("4".to_string())
        .interact_text()?;

    let weeks: u32 = input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput("Invalid number".to_string()))?;

    if !(MIN_WEEKS..=MAX_WEEKS).contains(&weeks) {
        return Err(MenuError::InvalidInput(format!(
            "Week count must be between {} and {}",
            MIN_WEEKS, MAX_WEEKS
        )));
    }

    Ok(weeks)
}

/// Prompt for how generated meals should be merged into an existing plan.
pub fn prompt_merge_mode() -> Result<MergeMode> {
    let options = ["Fill empty slots only", "Replace the whole plan"];

    let selection = Select::new()
        .with_prompt("How should generated meals be merged?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => MergeMode::ReplaceAll,
        _ => MergeMode::FillEmpty,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a user-typed category name against the catalog.
///
/// Exact match (case-insensitive) first, then fuzzy candidates to confirm
/// or pick from. Returns `None` when nothing matches or the user declines
/// every candidate.
pub fn resolve_category_name(catalog: &Catalog, input: &str) -> Result<Option<String>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(category) = catalog.get(input) {
        return Ok(Some(category.name.clone()));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&str, f64)> = catalog
        .categories()
        .iter()
        .map(|c| {
            (
                c.name.as_str(),
                jaro_winkler(&c.name.to_lowercase(), &input.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let name = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", name))
            .default(true)
            .interact()?;

        return Ok(if confirm { Some(name.to_string()) } else { None });
    }

    // Multiple matches - let the user select
    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(name, _)| name.to_string())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which category did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}
