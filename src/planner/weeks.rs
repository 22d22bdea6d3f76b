use crate::error::{MenuError, Result};

/// A contiguous span of calendar days assigned to one week bucket.
///
/// An empty range (possible when there are more weeks than days) has no
/// days and an `end_day` below its `start_day`; `contains` never matches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRange {
    pub week_number: u32,
    pub start_day: u32,
    pub end_day: u32,
    pub days: Vec<u32>,
}

impl WeekRange {
    pub fn contains(&self, day: u32) -> bool {
        day >= self.start_day && day <= self.end_day
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Split `total_days` contiguous days (numbered from 1) into `week_count`
/// near-equal ranges.
///
/// With `base = total_days / week_count` and `extra = total_days %
/// week_count`, the first `extra` weeks get `base + 1` days and the rest get
/// `base`. The longer weeks always come first; callers rely on that, it is
/// not incidental rounding.
///
/// More weeks than days leaves the trailing ranges empty; callers must
/// tolerate them. Input collection keeps `week_count` within
/// `[MIN_WEEKS, MAX_WEEKS]` upstream.
pub fn partition(total_days: u32, week_count: u32) -> Result<Vec<WeekRange>> {
    if week_count == 0 {
        return Err(MenuError::InvalidInput(
            "Week count must be at least 1".to_string(),
        ));
    }
    if total_days == 0 {
        return Err(MenuError::InvalidInput(
            "A month needs at least one day".to_string(),
        ));
    }

    let base = total_days / week_count;
    let extra = total_days % week_count;

    let mut ranges = Vec::with_capacity(week_count as usize);
    let mut current_day = 1u32;

    for week_number in 1..=week_count {
        let length = if week_number <= extra { base + 1 } else { base };
        let days: Vec<u32> = (current_day..current_day + length).collect();

        ranges.push(WeekRange {
            week_number,
            start_day: current_day,
            end_day: current_day + length - 1,
            days,
        });

        current_day += length;
    }

    Ok(ranges)
}

/// Find the week bucket containing `day`.
///
/// Ranges produced by `partition` cover their month exactly, so a miss
/// means the inputs are inconsistent with each other, not a user mistake.
pub fn week_for_day(day: u32, ranges: &[WeekRange]) -> Result<u32> {
    ranges
        .iter()
        .find(|range| range.contains(day))
        .map(|range| range.week_number)
        .ok_or(MenuError::DayOutOfRange(day))
}
