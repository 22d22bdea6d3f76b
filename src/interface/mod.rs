pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_merge_mode, prompt_total_days, prompt_week_count, prompt_yes_no, resolve_category_name,
};
pub use render::{display_catalog, display_month_plan};
