mod category;
mod plan;

pub use category::{Catalog, Category, MealToggles, MealType};
pub use plan::{DayMeals, MergeMode, Plan};
