//! Fixed category catalogue and the personal/office division tag.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::common::ParseEnumError;

/// Classifies the purpose of an income or expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Freelance,
    Investment,
    Food,
    Fuel,
    Transport,
    Entertainment,
    Movie,
    Shopping,
    Medical,
    Loan,
    Rent,
    Utilities,
    Education,
    Travel,
    Gifts,
    #[default]
    Other,
}

impl Category {
    /// Every category in catalogue order.
    pub const ALL: [Category; 17] = [
        Category::Salary,
        Category::Freelance,
        Category::Investment,
        Category::Food,
        Category::Fuel,
        Category::Transport,
        Category::Entertainment,
        Category::Movie,
        Category::Shopping,
        Category::Medical,
        Category::Loan,
        Category::Rent,
        Category::Utilities,
        Category::Education,
        Category::Travel,
        Category::Gifts,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Freelance => "freelance",
            Category::Investment => "investment",
            Category::Food => "food",
            Category::Fuel => "fuel",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Movie => "movie",
            Category::Shopping => "shopping",
            Category::Medical => "medical",
            Category::Loan => "loan",
            Category::Rent => "rent",
            Category::Utilities => "utilities",
            Category::Education => "education",
            Category::Travel => "travel",
            Category::Gifts => "gifts",
            Category::Other => "other",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Salary => "💰",
            Category::Freelance => "💼",
            Category::Investment => "📈",
            Category::Food => "🍔",
            Category::Fuel => "⛽",
            Category::Transport => "🚗",
            Category::Entertainment => "🎮",
            Category::Movie => "🎬",
            Category::Shopping => "🛍️",
            Category::Medical => "🏥",
            Category::Loan => "🏦",
            Category::Rent => "🏠",
            Category::Utilities => "💡",
            Category::Education => "📚",
            Category::Travel => "✈️",
            Category::Gifts => "🎁",
            Category::Other => "📋",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| ParseEnumError::new("category", s.trim()))
    }
}

/// User-chosen segment for a transaction, orthogonal to its category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    #[default]
    Personal,
    Office,
}

impl Division {
    pub const ALL: [Division; 2] = [Division::Personal, Division::Office];

    pub fn as_str(self) -> &'static str {
        match self {
            Division::Personal => "personal",
            Division::Office => "office",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Division::Personal => "🏠",
            Division::Office => "🏢",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "personal" => Ok(Division::Personal),
            "office" => Ok(Division::Office),
            other => Err(ParseEnumError::new("division", other)),
        }
    }
}
