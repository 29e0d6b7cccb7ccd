use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::api_connection::connection::RecipeCatalog;
use crate::api_connection::endpoints::{RecipeSummary, SearchRecipesParams};
use crate::grocery::aggregator::{aggregate_grocery_items, total_cost, GroceryItem};
use crate::grocery::meal_ideas::{generate_meal_ideas, MealIdea};
use crate::pantry::PantryItem;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeGroceryRequest {
    pub dietary_preferences: Vec<String>,
    pub current_ingredients: Vec<PantryItem>,
    pub selected_cuisines: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedGroceryResponse {
    pub grocery_list: Vec<GroceryItem>,
    pub total_cost: f64,
    pub meal_ideas: Vec<MealIdea>,
}

/// Engine entry point. A pure function of the request plus the catalog
/// collaborator: no ambient state, and every catalog failure degrades to
/// local heuristic data, so under normal operation this always resolves to a
/// well-formed response.
pub async fn generate_optimized_grocery_list<C: RecipeCatalog>(
    request: &OptimizeGroceryRequest,
    catalog: &C,
) -> Result<OptimizedGroceryResponse> {
    let catalog_recipes = fetch_catalog_recipes(
        catalog,
        &request.selected_cuisines,
        &request.dietary_preferences,
    )
    .await;

    let grocery_list = aggregate_grocery_items(
        &request.current_ingredients,
        &request.selected_cuisines,
        &request.dietary_preferences,
        &catalog_recipes,
    );
    let total_cost = total_cost(&grocery_list);

    let meal_ideas = generate_meal_ideas(
        &request.selected_cuisines,
        &request.dietary_preferences,
        &catalog_recipes,
    );

    Ok(OptimizedGroceryResponse {
        grocery_list,
        total_cost,
        meal_ideas,
    })
}

/// One catalog search per selected cuisine, 3 candidates each, awaited
/// sequentially. A failed search is reported and skipped; the rest of the
/// pipeline runs on whatever came back.
async fn fetch_catalog_recipes<C: RecipeCatalog>(
    catalog: &C,
    selected_cuisines: &[String],
    dietary_preferences: &[String],
) -> Vec<RecipeSummary> {
    let diet = if dietary_preferences.is_empty() {
        None
    } else {
        Some(dietary_preferences.join(","))
    };

    let mut recipes = Vec::new();
    for cuisine in selected_cuisines {
        let params = SearchRecipesParams {
            cuisine: Some(cuisine.clone()),
            diet: diet.clone(),
            number: Some(3),
            ..Default::default()
        };
        match catalog.search_recipes(&params).await {
            Ok(response) => recipes.extend(response.results),
            Err(e) => {
                eprintln!(
                    "Catalog search for cuisine '{}' failed ({}); continuing with local data.",
                    cuisine, e
                );
            }
        }
    }
    recipes
}
