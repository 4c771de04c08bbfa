//! Vibe categories.
//!
//! The seven mood groupings are a closed set. Every ordering, boost map and
//! highlight list in this crate is built from [`Category::ALL`], so adding or
//! renaming a vibe only ever touches this file.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of vibe categories.
pub const CATEGORY_COUNT: usize = 7;

/// A full ordering of every category, most preferred first.
pub type CategoryOrder = [Category; CATEGORY_COUNT];

/// Mood-based recommendation grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Refuel,
    Discover,
    Chill,
    Comfort,
    Work,
    Shop,
    Quick,
}

impl Category {
    /// Every category, in canonical declaration order.
    pub const ALL: CategoryOrder = [
        Category::Refuel,
        Category::Discover,
        Category::Chill,
        Category::Comfort,
        Category::Work,
        Category::Shop,
        Category::Quick,
    ];

    /// Lowercase identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Refuel => "refuel",
            Category::Discover => "discover",
            Category::Chill => "chill",
            Category::Comfort => "comfort",
            Category::Work => "work",
            Category::Shop => "shop",
            Category::Quick => "quick",
        }
    }

    /// Display label for headings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Refuel => "Refuel",
            Category::Discover => "Discover",
            Category::Chill => "Chill",
            Category::Comfort => "Comfort",
            Category::Work => "Work",
            Category::Shop => "Shop",
            Category::Quick => "Quick",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refuel" => Ok(Category::Refuel),
            "discover" => Ok(Category::Discover),
            "chill" => Ok(Category::Chill),
            "comfort" => Ok(Category::Comfort),
            "work" => Ok(Category::Work),
            "shop" => Ok(Category::Shop),
            "quick" => Ok(Category::Quick),
            _ => Err(format!("Unknown vibe category: {}", s)),
        }
    }
}

/// Position of `category` within `order`.
///
/// Every [`CategoryOrder`] built in this crate is a permutation, so the
/// fallback past the end is only reachable for hand-built arrays with
/// duplicates.
pub fn position_in(order: &CategoryOrder, category: Category) -> usize {
    order
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_COUNT)
}

/// True when `order` contains each category exactly once.
pub fn is_permutation(order: &[Category]) -> bool {
    if order.len() != CATEGORY_COUNT {
        return false;
    }
    let mut seen = [false; CATEGORY_COUNT];
    for c in order {
        if seen[c.index()] {
            return false;
        }
        seen[c.index()] = true;
    }
    true
}
