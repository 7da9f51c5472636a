//! Expense categories
//!
//! A small suggested set (food, travel, utilities) plus free-text categories
//! for everything else. Parsing never fails: unknown names become `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category an expense is filed under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Travel,
    Utilities,
    /// Free-text category for anything outside the suggested set
    Other(String),
}

impl Category {
    /// The suggested category names, for prompts and help text
    pub const SUGGESTED: [&'static str; 4] = ["food", "travel", "utilities", "other"];

    /// Canonical display name
    pub fn name(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::Travel => "travel",
            Self::Utilities => "utilities",
            Self::Other(name) => name,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other("other".to_string())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Ok(match trimmed.to_lowercase().as_str() {
            "food" => Self::Food,
            "travel" => Self::Travel,
            "utilities" => Self::Utilities,
            "" | "other" => Self::default(),
            _ => Self::Other(trimmed.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suggested() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("Travel".parse::<Category>().unwrap(), Category::Travel);
        assert_eq!(
            "UTILITIES".parse::<Category>().unwrap(),
            Category::Utilities
        );
    }

    #[test]
    fn test_parse_free_text() {
        assert_eq!(
            "coffee".parse::<Category>().unwrap(),
            Category::Other("coffee".to_string())
        );
        // Surrounding whitespace is trimmed, inner case preserved
        assert_eq!(
            "  Vet Bills ".parse::<Category>().unwrap(),
            Category::Other("Vet Bills".to_string())
        );
    }

    #[test]
    fn test_parse_empty_defaults_to_other() {
        assert_eq!("".parse::<Category>().unwrap(), Category::default());
        assert_eq!("other".parse::<Category>().unwrap(), Category::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Food.to_string(), "food");
        assert_eq!(Category::Other("coffee".into()).to_string(), "coffee");
    }

    #[test]
    fn test_suggested_names_all_parse_to_non_free_text() {
        assert_eq!(Category::SUGGESTED.join("/"), "food/travel/utilities/other");
        for name in Category::SUGGESTED {
            let parsed = name.parse::<Category>().unwrap();
            assert_eq!(parsed.name(), name);
        }
    }
}
