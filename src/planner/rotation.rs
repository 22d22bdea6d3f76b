use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{Catalog, MealType};

/// Per-category selection state for one generation run.
///
/// Yields each item exactly once per cycle in shuffled order, then
/// reshuffles and starts the next cycle. Built fresh for every generation
/// call and never persisted.
#[derive(Debug, Clone)]
pub struct RotationState {
    items: Vec<String>,
    cursor: usize,
    used_this_cycle: HashSet<String>,
    cycle_count: u32,
    last_yielded: Option<String>,
}

impl RotationState {
    pub fn new<R: Rng>(items: &[String], rng: &mut R) -> Self {
        let mut items = items.to_vec();
        items.shuffle(rng);
        Self {
            items,
            cursor: 0,
            used_this_cycle: HashSet::new(),
            cycle_count: 0,
            last_yielded: None,
        }
    }

    /// Number of completed shuffle cycles.
    pub fn cycle_count(&self) -> u32 {
        self.cycle_count
    }

    /// Items already yielded in the current cycle.
    pub fn used_count(&self) -> usize {
        self.used_this_cycle.len()
    }

    /// Yield the next item, or `None` for an empty category.
    pub fn next_item<R: Rng>(&mut self, rng: &mut R) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }

        if self.used_this_cycle.len() >= self.items.len() {
            self.start_new_cycle(rng);
        }

        // The item at the cursor is normally unused here; the bounded probe
        // keeps a corrupted used-set from looping forever.
        for probe in 0..self.items.len() {
            let index = (self.cursor + probe) % self.items.len();
            if !self.used_this_cycle.contains(&self.items[index]) {
                let item = self.items[index].clone();
                self.used_this_cycle.insert(item.clone());
                self.cursor = (index + 1) % self.items.len();
                self.last_yielded = Some(item.clone());
                return Some(item);
            }
        }

        None
    }

    fn start_new_cycle<R: Rng>(&mut self, rng: &mut R) {
        self.used_this_cycle.clear();
        self.items.shuffle(rng);
        self.cursor = 0;
        self.cycle_count += 1;

        // The new cycle must not open with the item that closed the previous
        // one: move a colliding head to the back.
        if self.items.len() > 1 {
            if let Some(last) = &self.last_yielded {
                if self.items[0] == *last {
                    let tail = self.items.len() - 1;
                    self.items.swap(0, tail);
                }
            }
        }
    }
}

/// Category names that apply to `meal`: enabled for the slot and holding at
/// least one item, in catalog order.
pub fn active_categories(catalog: &Catalog, meal: MealType) -> Vec<&str> {
    catalog
        .categories()
        .iter()
        .filter(|c| c.enabled_for(meal) && !c.items.is_empty())
        .map(|c| c.name.as_str())
        .collect()
}
