/// One row of a fixed ingredient table (staples, cuisine bundles, the
/// diet-driven extras). Category, cost and versatility ride along into the
/// final grocery list untouched.
#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub estimated_cost: f64,
    pub versatility: u8,
}

/// Near-universal cooking staples, suggested unless already in the pantry.
/// Order matters: the output list starts with these, in this order.
pub const BASE_STAPLES: [TableEntry; 5] = [
    TableEntry { name: "Onions", category: "Produce", estimated_cost: 1.99, versatility: 9 },
    TableEntry { name: "Garlic", category: "Produce", estimated_cost: 0.99, versatility: 9 },
    TableEntry { name: "Salt", category: "Spices & Herbs", estimated_cost: 1.49, versatility: 10 },
    TableEntry { name: "Pepper", category: "Spices & Herbs", estimated_cost: 2.99, versatility: 10 },
    TableEntry { name: "Olive Oil", category: "Pantry", estimated_cost: 5.99, versatility: 8 },
];

const ITALIAN_BUNDLE: [TableEntry; 4] = [
    TableEntry { name: "Pasta", category: "Grains & Pasta", estimated_cost: 1.99, versatility: 7 },
    TableEntry { name: "Tomatoes", category: "Produce", estimated_cost: 2.99, versatility: 7 },
    TableEntry { name: "Basil", category: "Produce", estimated_cost: 1.99, versatility: 5 },
    TableEntry { name: "Parmesan Cheese", category: "Dairy", estimated_cost: 3.99, versatility: 6 },
];

const MEXICAN_BUNDLE: [TableEntry; 4] = [
    TableEntry { name: "Tortillas", category: "Grains & Pasta", estimated_cost: 2.49, versatility: 7 },
    TableEntry { name: "Beans", category: "Canned Goods", estimated_cost: 0.99, versatility: 6 },
    TableEntry { name: "Avocado", category: "Produce", estimated_cost: 1.49, versatility: 5 },
    TableEntry { name: "Cilantro", category: "Produce", estimated_cost: 1.29, versatility: 6 },
];

const CHINESE_BUNDLE: [TableEntry; 4] = [
    TableEntry { name: "Rice", category: "Grains & Pasta", estimated_cost: 3.99, versatility: 8 },
    TableEntry { name: "Soy Sauce", category: "Pantry", estimated_cost: 2.99, versatility: 7 },
    TableEntry { name: "Ginger", category: "Produce", estimated_cost: 1.99, versatility: 6 },
    TableEntry { name: "Green Onions", category: "Produce", estimated_cost: 0.99, versatility: 7 },
];

const INDIAN_BUNDLE: [TableEntry; 4] = [
    TableEntry { name: "Rice", category: "Grains & Pasta", estimated_cost: 3.99, versatility: 8 },
    TableEntry { name: "Curry Powder", category: "Spices & Herbs", estimated_cost: 3.49, versatility: 6 },
    TableEntry { name: "Lentils", category: "Pantry", estimated_cost: 1.99, versatility: 5 },
    TableEntry { name: "Yogurt", category: "Dairy", estimated_cost: 2.49, versatility: 5 },
];

const JAPANESE_BUNDLE: [TableEntry; 4] = [
    TableEntry { name: "Rice", category: "Grains & Pasta", estimated_cost: 3.99, versatility: 8 },
    TableEntry { name: "Soy Sauce", category: "Pantry", estimated_cost: 2.99, versatility: 7 },
    TableEntry { name: "Miso Paste", category: "Pantry", estimated_cost: 4.99, versatility: 5 },
    TableEntry { name: "Nori", category: "Pantry", estimated_cost: 3.49, versatility: 4 },
];

const THAI_BUNDLE: [TableEntry; 4] = [
    TableEntry { name: "Rice", category: "Grains & Pasta", estimated_cost: 3.99, versatility: 8 },
    TableEntry { name: "Coconut Milk", category: "Pantry", estimated_cost: 1.99, versatility: 6 },
    TableEntry { name: "Lemongrass", category: "Produce", estimated_cost: 2.49, versatility: 5 },
    TableEntry { name: "Thai Curry Paste", category: "Pantry", estimated_cost: 3.49, versatility: 5 },
];

/// Characteristic ingredients for a cuisine tag. Unknown cuisines
/// contribute nothing.
pub fn cuisine_bundle(cuisine: &str) -> &'static [TableEntry] {
    match cuisine.to_lowercase().as_str() {
        "italian" => &ITALIAN_BUNDLE,
        "mexican" => &MEXICAN_BUNDLE,
        "chinese" => &CHINESE_BUNDLE,
        "indian" => &INDIAN_BUNDLE,
        "japanese" => &JAPANESE_BUNDLE,
        "thai" => &THAI_BUNDLE,
        _ => &[],
    }
}

/// Appended when the Vegetarian tag is active and tofu is not already on
/// hand.
pub const TOFU_ENTRY: TableEntry = TableEntry {
    name: "Tofu",
    category: "Produce",
    estimated_cost: 2.49,
    versatility: 7,
};

pub const CATALOG_SUGGESTION_CATEGORY: &str = "Catalog Suggestion";
pub const CATALOG_SUGGESTION_COST: f64 = 2.99;
pub const CATALOG_SUGGESTION_VERSATILITY: u8 = 6;

/// Shelf-layout ordering used when grouping the list for display. Any
/// category not listed here sorts last.
pub const CATEGORY_SHELF_ORDER: [&str; 11] = [
    "Produce",
    "Meat & Seafood",
    "Dairy",
    "Grains & Pasta",
    "Canned Goods",
    "Spices & Herbs",
    "Pantry",
    "Bakery",
    "Frozen",
    "Catalog Suggestion",
    "Other",
];

pub fn shelf_position(category: &str) -> usize {
    CATEGORY_SHELF_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(CATEGORY_SHELF_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staple_costs_sum() {
        let total: f64 = BASE_STAPLES.iter().map(|s| s.estimated_cost).sum();
        assert!((total - 13.45).abs() < 1e-9);
    }

    #[test]
    fn test_known_cuisine_bundles_have_four_entries() {
        for cuisine in ["italian", "mexican", "chinese", "indian", "japanese", "thai"] {
            assert_eq!(cuisine_bundle(cuisine).len(), 4, "bundle for {}", cuisine);
        }
    }

    #[test]
    fn test_cuisine_lookup_is_case_insensitive() {
        assert_eq!(cuisine_bundle("Italian")[0].name, "Pasta");
        assert_eq!(cuisine_bundle("MEXICAN")[0].name, "Tortillas");
    }

    #[test]
    fn test_unknown_cuisine_contributes_nothing() {
        assert!(cuisine_bundle("martian").is_empty());
    }

    #[test]
    fn test_unknown_category_sorts_last() {
        assert_eq!(shelf_position("Produce"), 0);
        assert!(shelf_position("Mystery Aisle") > shelf_position("Other"));
    }
}
