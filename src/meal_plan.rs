use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::api_connection::connection::RecipeCatalog;
use crate::api_connection::endpoints::SearchRecipesParams;
use crate::local_recipes::{LocalRecipe, LOCAL_RECIPES};
use crate::pantry::PantryItem;

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

pub const MEAL_TYPES: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MealSource {
    Catalog,
    Local,
}

/// One filled slot of the weekly plan.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub day: String,
    pub meal_type: MealType,
    pub recipe_id: String,
    pub recipe_name: String,
    pub source: MealSource,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub meals: Vec<PlannedMeal>,
}

/// Fills 7 days x 3 meal slots, one sequential catalog call per slot.
/// A failed or empty search falls back to the local recipe table; either
/// way each slot prefers recipes not already used elsewhere in the plan.
pub async fn generate_weekly_meal_plan<C: RecipeCatalog>(
    pantry: &[PantryItem],
    dietary_preferences: &[String],
    selected_cuisines: &[String],
    catalog: &C,
) -> WeeklyMealPlan {
    let mut used_ids: HashSet<String> = HashSet::new();
    let mut meals = Vec::with_capacity(DAYS_OF_WEEK.len() * MEAL_TYPES.len());

    let include_hint = pantry_include_hint(pantry);
    let diet = join_nonempty(dietary_preferences);
    let cuisine = join_nonempty(selected_cuisines);

    for day in DAYS_OF_WEEK {
        for meal_type in MEAL_TYPES {
            let params = SearchRecipesParams {
                cuisine: cuisine.clone(),
                diet: diet.clone(),
                meal_type: Some(meal_type.as_str().to_string()),
                include_ingredients: include_hint.clone(),
                number: Some(5),
                ..Default::default()
            };

            let catalog_pick = match catalog.search_recipes(&params).await {
                Ok(response) => {
                    let unused: Vec<_> = response
                        .results
                        .iter()
                        .filter(|r| !used_ids.contains(&r.id.to_string()))
                        .collect();
                    unused
                        .choose(&mut rand::thread_rng())
                        .map(|r| (r.id.to_string(), r.title.clone()))
                }
                Err(e) => {
                    eprintln!(
                        "Catalog search for {} {} failed ({}); using local recipes.",
                        day,
                        meal_type.as_str(),
                        e
                    );
                    None
                }
            };

            let meal = match catalog_pick {
                Some((recipe_id, recipe_name)) => PlannedMeal {
                    day: day.to_string(),
                    meal_type,
                    recipe_id,
                    recipe_name,
                    source: MealSource::Catalog,
                },
                None => {
                    let recipe = pick_local_recipe(meal_type, &used_ids);
                    PlannedMeal {
                        day: day.to_string(),
                        meal_type,
                        recipe_id: recipe.id.to_string(),
                        recipe_name: recipe.name.to_string(),
                        source: MealSource::Local,
                    }
                }
            };

            used_ids.insert(meal.recipe_id.clone());
            meals.push(meal);
        }
    }

    WeeklyMealPlan { meals }
}

/// Up to 3 pantry ingredient names, comma-joined, as the search's
/// includeIngredients hint.
fn pantry_include_hint(pantry: &[PantryItem]) -> Option<String> {
    if pantry.is_empty() {
        return None;
    }
    let names: Vec<&str> = pantry.iter().take(3).map(|i| i.name.as_str()).collect();
    Some(names.join(","))
}

fn join_nonempty(values: &[String]) -> Option<String> {
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

const BREAKFAST_KEYWORDS: [&str; 7] = [
    "omelette",
    "oatmeal",
    "toast",
    "pancake",
    "breakfast",
    "smoothie",
    "egg",
];
const LUNCH_KEYWORDS: [&str; 6] = ["salad", "soup", "bowl", "sandwich", "wrap", "stir fry"];

/// Keyword heuristic over a recipe's name and description; dinner admits
/// anything that isn't breakfast fare.
fn matches_meal_type(recipe: &LocalRecipe, meal_type: MealType) -> bool {
    let text = format!("{} {}", recipe.name, recipe.description).to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));
    match meal_type {
        MealType::Breakfast => has_any(&BREAKFAST_KEYWORDS),
        MealType::Lunch => has_any(&LUNCH_KEYWORDS) || recipe.prep_minutes <= 20,
        MealType::Dinner => !has_any(&BREAKFAST_KEYWORDS),
    }
}

/// Local fallback selection for one slot. Filters by meal-type keywords and
/// excludes already-used ids; relaxes the exclusion when that empties the
/// pool, and finally allows any recipe at all once the table is exhausted.
pub fn local_candidates(meal_type: MealType, used_ids: &HashSet<String>) -> Vec<&'static LocalRecipe> {
    let fresh: Vec<&'static LocalRecipe> = LOCAL_RECIPES
        .iter()
        .filter(|r| matches_meal_type(r, meal_type) && !used_ids.contains(r.id))
        .collect();
    if !fresh.is_empty() {
        return fresh;
    }

    let matching: Vec<&'static LocalRecipe> = LOCAL_RECIPES
        .iter()
        .filter(|r| matches_meal_type(r, meal_type))
        .collect();
    if !matching.is_empty() {
        return matching;
    }

    let unused: Vec<&'static LocalRecipe> = LOCAL_RECIPES
        .iter()
        .filter(|r| !used_ids.contains(r.id))
        .collect();
    if !unused.is_empty() {
        return unused;
    }

    LOCAL_RECIPES.iter().collect()
}

fn pick_local_recipe(meal_type: MealType, used_ids: &HashSet<String>) -> &'static LocalRecipe {
    let candidates = local_candidates(meal_type, used_ids);
    // Candidate pools are never empty: the last relaxation step returns the
    // whole table.
    candidates
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(&LOCAL_RECIPES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakfast_candidates_match_keywords() {
        let candidates = local_candidates(MealType::Breakfast, &HashSet::new());
        assert!(!candidates.is_empty());
        for recipe in &candidates {
            assert!(matches_meal_type(recipe, MealType::Breakfast), "{}", recipe.name);
        }
        let names: Vec<&str> = candidates.iter().map(|r| r.name).collect();
        assert!(names.contains(&"Spinach and Feta Omelette"));
        assert!(!names.contains(&"Sheet Pan Chicken Fajitas"));
    }

    #[test]
    fn test_used_ids_are_excluded_until_pool_empties() {
        let mut used = HashSet::new();
        // Exhaust all but one breakfast candidate.
        let all: Vec<String> = local_candidates(MealType::Breakfast, &HashSet::new())
            .iter()
            .map(|r| r.id.to_string())
            .collect();
        for id in &all[..all.len() - 1] {
            used.insert(id.clone());
        }
        let remaining = local_candidates(MealType::Breakfast, &used);
        assert_eq!(remaining.len(), 1);

        // Exhausting the whole pool relaxes the exclusion back to every
        // matching recipe.
        used.insert(all[all.len() - 1].clone());
        let relaxed = local_candidates(MealType::Breakfast, &used);
        assert_eq!(relaxed.len(), all.len());
    }

    #[test]
    fn test_fully_exhausted_table_allows_reuse() {
        let used: HashSet<String> = LOCAL_RECIPES.iter().map(|r| r.id.to_string()).collect();
        let candidates = local_candidates(MealType::Dinner, &used);
        assert!(!candidates.is_empty());
    }

    #[test]
    fn test_pick_returns_member_of_candidate_set() {
        // Selection is random by design; assert membership, not identity.
        let used = HashSet::new();
        for _ in 0..20 {
            let picked = pick_local_recipe(MealType::Lunch, &used);
            let pool = local_candidates(MealType::Lunch, &used);
            assert!(pool.iter().any(|r| r.id == picked.id));
        }
    }

    #[test]
    fn test_pantry_include_hint_caps_at_three() {
        let pantry: Vec<PantryItem> = ["Rice", "Eggs", "Tomatoes", "Basil"]
            .iter()
            .map(|n| PantryItem::new(n, 1.0, 0.0))
            .collect();
        assert_eq!(
            pantry_include_hint(&pantry),
            Some("Rice,Eggs,Tomatoes".to_string())
        );
        assert_eq!(pantry_include_hint(&[]), None);
    }
}
