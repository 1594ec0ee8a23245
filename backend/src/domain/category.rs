//! Grocery Category
//!
//! A fixed set of well-known categories, open to custom labels.

use serde::{Deserialize, Serialize};

/// Category of a grocery item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Dairy,
    #[default]
    Produce,
    Meat,
    Snacks,
    Beverages,
    Pantry,
    Frozen,
    Other,
    /// Any label outside the known set, kept verbatim
    Custom(String),
}

impl Category {
    /// Known categories in display order
    pub const KNOWN: [Category; 8] = [
        Category::Dairy,
        Category::Produce,
        Category::Meat,
        Category::Snacks,
        Category::Beverages,
        Category::Pantry,
        Category::Frozen,
        Category::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Dairy => "Dairy",
            Category::Produce => "Produce",
            Category::Meat => "Meat",
            Category::Snacks => "Snacks",
            Category::Beverages => "Beverages",
            Category::Pantry => "Pantry",
            Category::Frozen => "Frozen",
            Category::Other => "Other",
            Category::Custom(label) => label,
        }
    }

    /// Parse a label; known names match case-insensitively, blank falls back to the default
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() {
            return Category::default();
        }
        Category::KNOWN
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .cloned()
            .unwrap_or_else(|| Category::Custom(label.to_string()))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}
