/// Retry budget per slot when filling a week before a repeat is accepted.
pub const WEEK_FILL_ATTEMPTS: u32 = 10;

/// Retry budget for an interactive single-slot suggestion, which refuses
/// to repeat instead of accepting a duplicate.
pub const SINGLE_SUGGESTION_ATTEMPTS: u32 = 20;

/// Week-bucket bounds for a month plan.
pub const MIN_WEEKS: u32 = 1;
pub const MAX_WEEKS: u32 = 4;

/// Calendar month length bounds.
pub const MIN_MONTH_DAYS: u32 = 28;
pub const MAX_MONTH_DAYS: u32 = 31;
