use serde::{Deserialize, Serialize};

use crate::api_connection::endpoints::RecipeSummary;
use crate::grocery::tables::{
    cuisine_bundle, shelf_position, TableEntry, BASE_STAPLES, CATALOG_SUGGESTION_CATEGORY,
    CATALOG_SUGGESTION_COST, CATALOG_SUGGESTION_VERSATILITY, TOFU_ENTRY,
};
use crate::pantry::{pantry_contains, same_ingredient, PantryItem};

/// One line of the optimized shopping list.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub estimated_cost: f64,
    pub versatility: u8,
}

impl GroceryItem {
    fn from_table(entry: &TableEntry) -> Self {
        GroceryItem {
            name: entry.name.to_string(),
            quantity: "1".to_string(),
            category: entry.category.to_string(),
            estimated_cost: entry.estimated_cost,
            versatility: entry.versatility,
        }
    }
}

fn already_listed(items: &[GroceryItem], name: &str) -> bool {
    items.iter().any(|item| same_ingredient(&item.name, name))
}

/// Builds the raw candidate item list: staples first, then the bundle for
/// each selected cuisine, then title-derived catalog suggestions, then
/// diet-driven extras. Anything already in the pantry, or already written to
/// the list by an earlier table, is suppressed (first writer wins).
pub fn aggregate_grocery_items(
    pantry: &[PantryItem],
    selected_cuisines: &[String],
    dietary_preferences: &[String],
    catalog_recipes: &[RecipeSummary],
) -> Vec<GroceryItem> {
    let mut items: Vec<GroceryItem> = Vec::new();

    for staple in &BASE_STAPLES {
        if !pantry_contains(pantry, staple.name) {
            items.push(GroceryItem::from_table(staple));
        }
    }

    for cuisine in selected_cuisines {
        for entry in cuisine_bundle(cuisine) {
            if !pantry_contains(pantry, entry.name) && !already_listed(&items, entry.name) {
                items.push(GroceryItem::from_table(entry));
            }
        }
    }

    for suggestion in suggested_ingredients_from_titles(catalog_recipes) {
        if !pantry_contains(pantry, &suggestion) && !already_listed(&items, &suggestion) {
            items.push(GroceryItem {
                name: capitalize_first(&suggestion),
                quantity: "1".to_string(),
                category: CATALOG_SUGGESTION_CATEGORY.to_string(),
                estimated_cost: CATALOG_SUGGESTION_COST,
                versatility: CATALOG_SUGGESTION_VERSATILITY,
            });
        }
    }

    if dietary_preferences.iter().any(|p| p == "Vegetarian")
        && !pantry_contains(pantry, TOFU_ENTRY.name)
        && !already_listed(&items, TOFU_ENTRY.name)
    {
        items.push(GroceryItem::from_table(&TOFU_ENTRY));
    }

    items
}

pub fn total_cost(items: &[GroceryItem]) -> f64 {
    items.iter().map(|item| item.estimated_cost).sum()
}

/// Approximates extra ingredient names from catalog recipe titles: words
/// longer than 4 characters, lower-cased, deduplicated in first-seen order,
/// capped at 5.
pub fn suggested_ingredients_from_titles(recipes: &[RecipeSummary]) -> Vec<String> {
    let mut words: Vec<String> = Vec::new();
    for recipe in recipes {
        for word in recipe.title.split(' ') {
            if word.len() > 4 {
                let word = word.to_lowercase();
                if !words.contains(&word) {
                    words.push(word);
                }
            }
        }
    }
    words.truncate(5);
    words
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Groups a final list by category in shelf order, for display. Relative
/// item order within a category is preserved.
pub fn group_by_shelf_order(items: &[GroceryItem]) -> Vec<(String, Vec<&GroceryItem>)> {
    let mut groups: Vec<(String, Vec<&GroceryItem>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category.clone(), vec![item])),
        }
    }
    groups.sort_by_key(|(category, _)| shelf_position(category));
    groups
}
