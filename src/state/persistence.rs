use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Catalog, Plan};
use crate::state::CatalogManager;

/// Load the ingredient catalog from a JSON file.
///
/// The file holds an ordered array of categories; duplicates are resolved
/// through `CatalogManager` (categories last-wins, items first-wins).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    Ok(CatalogManager::new(catalog).into_catalog())
}

/// Save the ingredient catalog to a JSON file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a plan from a JSON file.
///
/// Plans are keyed by day-of-month number. Files keyed by weekday names
/// (an older layout) are not recognized and fail to deserialize.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan> {
    let content = fs::read_to_string(path)?;
    let plan: Plan = serde_json::from_str(&content)?;
    Ok(plan)
}

/// Save a plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
