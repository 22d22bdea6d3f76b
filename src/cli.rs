use clap::{Parser, Subcommand};

/// MenuMaker — A household meal planning CLI that fills monthly menus from
/// categorized ingredients.
#[derive(Parser, Debug)]
#[command(name = "menu_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the ingredient catalog JSON file.
    #[arg(short, long, default_value = "catalog.json")]
    pub catalog: String,

    /// Path to the saved plan JSON file.
    #[arg(short, long, default_value = "plan.json")]
    pub plan: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a month plan from the ingredient catalog.
    Plan,

    /// Suggest a replacement meal for one day slot.
    Suggest {
        /// Day of the month (1-31).
        #[arg(long)]
        day: u32,

        /// Meal slot: midi or soir.
        #[arg(long)]
        slot: String,
    },

    /// Display the saved plan.
    Show {
        /// Week buckets to group the display by (1-4).
        #[arg(long, default_value_t = 4)]
        weeks: u32,
    },

    /// Inspect and edit the ingredient catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Export the saved plan to CSV.
    Export {
        /// Output CSV path.
        #[arg(short, long, default_value = "plan.csv")]
        output: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List categories and their items.
    List,

    /// Add an empty category.
    AddCategory { name: String },

    /// Remove a category and its items.
    RemoveCategory { name: String },

    /// Add an item to a category.
    AddItem { category: String, item: String },

    /// Remove an item from a category.
    RemoveItem { category: String, item: String },

    /// Enable or disable a category for a meal slot.
    Toggle {
        category: String,

        /// Meal slot: midi or soir.
        slot: String,

        /// Disable instead of enable.
        #[arg(long)]
        off: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
