use anyhow::Result;
use std::path::Path;

use grocery_optim::api_connection::connection::SpoonacularCatalog;
use grocery_optim::cli::{parse_args, split_tags};
use grocery_optim::grocery::aggregator::group_by_shelf_order;
use grocery_optim::grocery::{generate_optimized_grocery_list, OptimizeGroceryRequest};
use grocery_optim::meal_plan::generate_weekly_meal_plan;
use grocery_optim::pantry::{load_pantry_file, scan_receipt, Pantry};

// Environment variable holding the recipe catalog API key. A missing key is
// not fatal: every catalog call falls back to local data.
const API_KEY_ENV_VAR: &str = "SPOONACULAR_API_KEY";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli_args = parse_args();
    let cuisines = split_tags(&cli_args.cuisines);
    let diets = split_tags(&cli_args.diets);

    let mut pantry = Pantry::new();
    if let Some(path) = &cli_args.pantry_file {
        let items = load_pantry_file(Path::new(path)).await?;
        println!("Loaded {} pantry item(s) from {}", items.len(), path);
        pantry.add_items(items);
    }
    if cli_args.scan_receipt {
        let scanned = scan_receipt();
        println!("Receipt scan added {} item(s) to the pantry.", scanned.len());
        pantry.add_items(scanned);
    }

    let catalog = SpoonacularCatalog::new(API_KEY_ENV_VAR);
    let request = OptimizeGroceryRequest {
        dietary_preferences: diets.clone(),
        current_ingredients: pantry.items().to_vec(),
        selected_cuisines: cuisines.clone(),
    };

    println!("\nGenerating optimized grocery list...");
    let response = generate_optimized_grocery_list(&request, &catalog).await?;

    println!("\nShopping list ({} items):", response.grocery_list.len());
    for (category, items) in group_by_shelf_order(&response.grocery_list) {
        println!("  [{}]", category);
        for item in items {
            println!(
                "    {} x{}  (${:.2}, versatility {})",
                item.name, item.quantity, item.estimated_cost, item.versatility
            );
        }
    }
    println!("Estimated total: ${:.2}", response.total_cost);

    println!("\nMeal ideas:");
    for meal in &response.meal_ideas {
        println!(
            "  {} ({}, {}) - {}",
            meal.name,
            meal.cuisine_type,
            meal.meal_type,
            meal.ingredients.join(", ")
        );
    }

    if cli_args.week_plan {
        println!("\nGenerating 7-day meal plan...");
        let plan = generate_weekly_meal_plan(pantry.items(), &diets, &cuisines, &catalog).await;
        let mut current_day = "";
        for meal in &plan.meals {
            if meal.day != current_day {
                println!("  {}:", meal.day);
            }
            println!("    {}: {}", meal.meal_type.as_str(), meal.recipe_name);
            current_day = &meal.day;
        }
    }

    Ok(())
}
