pub mod composer;
pub mod constants;
pub mod generator;
pub mod rotation;
pub mod weeks;

pub use composer::{MealSuggestion, compose, normalize_meal, suggest_meal};
pub use constants::*;
pub use generator::{
    build_rotations, generate_all_weeks, generate_month, generate_single_meal, generate_week,
    merge_plans,
};
pub use rotation::{RotationState, active_categories};
pub use weeks::{WeekRange, partition, week_for_day};
