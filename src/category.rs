use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed expense vocabulary. The backend stores free text, so anything
/// outside the list decodes as `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Grocery,
    Fuel,
    Medical,
    Household,
    Dining,
    Transport,
    Entertainment,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Grocery,
        Category::Fuel,
        Category::Medical,
        Category::Household,
        Category::Dining,
        Category::Transport,
        Category::Entertainment,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Grocery => "Grocery",
            Self::Fuel => "Fuel",
            Self::Medical => "Medical",
            Self::Household => "Household",
            Self::Dining => "Dining",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Other => "Other",
        }
    }

    /// Badge color shared by every screen that shows a category.
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Grocery => "bg-green-500",
            Self::Fuel => "bg-orange-500",
            Self::Medical => "bg-red-500",
            Self::Household => "bg-purple-500",
            Self::Dining => "bg-yellow-500",
            Self::Transport => "bg-blue-500",
            Self::Entertainment => "bg-pink-500",
            Self::Other => "bg-gray-500",
        }
    }

    pub fn initial(self) -> char {
        self.label().chars().next().unwrap_or('?')
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == raw)
            .unwrap_or(Self::Other)
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_parse() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), category);
        }
    }

    #[test]
    fn unknown_labels_become_other() {
        assert_eq!(Category::parse("Rent"), Category::Other);
        let decoded: Category = serde_json::from_str("\"Travel\"").unwrap();
        assert_eq!(decoded, Category::Other);
    }

    #[test]
    fn labels_match_exactly() {
        assert_eq!(Category::parse("Fuel"), Category::Fuel);
        assert_eq!(Category::parse("fuel"), Category::Other);
        assert_eq!(Category::parse("Fuel "), Category::Other);
    }

    #[test]
    fn serializes_as_plain_label() {
        assert_eq!(serde_json::to_string(&Category::Fuel).unwrap(), "\"Fuel\"");
    }

    #[test]
    fn every_category_has_a_background_color() {
        for category in Category::ALL {
            assert!(category.color_class().starts_with("bg-"));
        }
    }
}
