//! Expense categories
//!
//! The category set is fixed. Each variant carries its display name and the
//! colour token the dashboard paints it with; there is no string-keyed lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// One of the nine fixed spending classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    RoomRent,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Shopping,
        Category::Healthcare,
        Category::Education,
        Category::RoomRent,
        Category::Other,
    ];

    /// Display name, also the persisted form
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::RoomRent => "Room Rent",
            Self::Other => "Other",
        }
    }

    /// Theme colour token for charts and badges
    pub const fn color_token(&self) -> &'static str {
        match self {
            Self::Food => "expense-food",
            Self::Transportation => "expense-transport",
            Self::Utilities => "expense-utilities",
            Self::Entertainment => "expense-entertainment",
            Self::Shopping => "expense-shopping",
            Self::Healthcare => "expense-healthcare",
            Self::Education => "expense-education",
            Self::RoomRent => "expense-roomrent",
            Self::Other => "expense-other",
        }
    }

    /// Map a stored name back to a category, falling back to `Other` for
    /// names this version does not know
    pub fn from_stored(name: &str) -> Self {
        name.parse().unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parse used for user input. Case and surrounding whitespace are
/// ignored; anything outside the fixed set is rejected.
impl FromStr for Category {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BudgetError::unknown_category(wanted))
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::from_stored(&name)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}
