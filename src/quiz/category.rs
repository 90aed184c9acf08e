//! Question categories offered to the player.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topic a challenge is researched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    /// Customs and celebrations.
    #[default]
    Traditions,
    /// Festive food and drink.
    Food,
    /// Costumes and festive wear.
    Clothing,
    /// Folklore and legends.
    Myths,
    /// Carols and songs.
    Music,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Traditions,
        Category::Food,
        Category::Clothing,
        Category::Myths,
        Category::Music,
    ];

    /// Display name used in prompts and menus.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Traditions => "Traditions",
            Category::Food => "Food",
            Category::Clothing => "Clothing",
            Category::Myths => "Myths",
            Category::Music => "Music",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                format!("unknown category '{wanted}' (expected one of: {})", names.join(", "))
            })
    }
}
