use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed cosmetic slots on a player's character.
///
/// At most one value can be equipped per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CosmeticCategory {
    /// Facial expression.
    Expression,
    /// Shirt pattern.
    Pattern,
    /// Shoe color.
    Shoe,
    /// Hat type.
    Hat,
    /// Accessory.
    Accessory,
}

impl CosmeticCategory {
    /// All categories, in shop display order.
    pub const ALL: [Self; 5] = [
        Self::Expression,
        Self::Pattern,
        Self::Shoe,
        Self::Hat,
        Self::Accessory,
    ];
}

impl fmt::Display for CosmeticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Expression => "expression",
            Self::Pattern => "pattern",
            Self::Shoe => "shoe",
            Self::Hat => "hat",
            Self::Accessory => "accessory",
        };
        f.write_str(name)
    }
}

/// A purchasable cosmetic item from the static shop catalog.
///
/// Catalog entries are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopItem {
    /// Stable catalog id, e.g. `"hat_crown"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// The cosmetic slot this item occupies when equipped.
    pub category: CosmeticCategory,

    /// Price in coins.
    pub cost: u32,

    /// The value written into the slot on purchase (a token or color).
    pub value: String,

    /// Short display description.
    pub description: String,

    /// Display emoji.
    pub emoji: String,
}

/// A shop category filter; `All` matches every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Match every item.
    #[default]
    All,
    /// Match only items in one category.
    Only(CosmeticCategory),
}

impl CategoryFilter {
    /// Check if an item passes this filter.
    pub fn matches(&self, item: &ShopItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => item.category == *category,
        }
    }
}

impl From<CosmeticCategory> for CategoryFilter {
    fn from(category: CosmeticCategory) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crown() -> ShopItem {
        ShopItem {
            id: "hat_crown".to_string(),
            name: "Crown".to_string(),
            category: CosmeticCategory::Hat,
            cost: 500,
            value: "crown".to_string(),
            description: "Royal crown for VIPs".to_string(),
            emoji: "\u{1f451}".to_string(),
        }
    }

    #[test]
    fn all_filter_matches_everything() {
        assert!(CategoryFilter::All.matches(&crown()));
    }

    #[test]
    fn category_filter_matches_own_category_only() {
        assert!(CategoryFilter::Only(CosmeticCategory::Hat).matches(&crown()));
        assert!(!CategoryFilter::Only(CosmeticCategory::Shoe).matches(&crown()));
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_value(CosmeticCategory::Expression).unwrap();
        assert_eq!(json, "expression");
    }
}
