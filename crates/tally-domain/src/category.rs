//! The closed set of transaction categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Categorises ledger activity for filtering and reporting.
///
/// The set is closed and not extensible at runtime. Reports iterate
/// [`Category::ALL`]; breakdown sorting breaks amount ties by this
/// declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Shopping,
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Utilities,
        Category::Shopping,
        Category::Other,
    ];

    /// Display-icon name associated with the category.
    ///
    /// Inert metadata for presentation layers; the core never interprets it.
    pub fn icon(self) -> &'static str {
        match self {
            Category::Food => "fork.knife",
            Category::Transport => "car.fill",
            Category::Entertainment => "tv.fill",
            Category::Utilities => "bolt.fill",
            Category::Shopping => "cart.fill",
            Category::Other => "square.fill",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        };
        f.write_str(label)
    }
}
