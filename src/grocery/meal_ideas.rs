use serde::{Deserialize, Serialize};

use crate::api_connection::endpoints::RecipeSummary;
use crate::grocery::dietary_filter::{backfill_meal_ideas, filter_meal_ideas, DietaryFlags};

/// A proposed meal. Ingredient names are suggestions, not guaranteed to all
/// appear on the shopping list.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MealIdea {
    pub name: String,
    pub ingredients: Vec<String>,
    pub cuisine_type: String,
    /// One of breakfast, lunch, dinner.
    pub meal_type: String,
}

/// Proposes meals for the selected cuisines: catalog results first, then the
/// fixed per-cuisine rule table unless the catalog alone already supplied 3
/// or more candidates. The dietary filter and backfill always run over the
/// combined list.
pub fn generate_meal_ideas(
    selected_cuisines: &[String],
    dietary_preferences: &[String],
    catalog_recipes: &[RecipeSummary],
) -> Vec<MealIdea> {
    let flags = DietaryFlags::from_tags(dietary_preferences);

    let mut meals: Vec<MealIdea> = catalog_recipes.iter().map(catalog_meal_idea).collect();

    if meals.len() < 3 {
        meals.extend(rule_table_ideas(selected_cuisines, flags));
    }

    let mut meals = filter_meal_ideas(meals, flags);
    backfill_meal_ideas(&mut meals, flags);
    meals
}

/// Maps a catalog search result directly to a meal idea. The catalog's
/// summary payload carries no ingredient list, so diet labels stand in for
/// one; prep time under 20 minutes reads as a lunch, anything else a dinner.
fn catalog_meal_idea(recipe: &RecipeSummary) -> MealIdea {
    MealIdea {
        name: recipe.title.clone(),
        ingredients: recipe.diets.clone(),
        cuisine_type: recipe
            .cuisines
            .first()
            .cloned()
            .unwrap_or_else(|| "Various".to_string()),
        meal_type: if recipe.ready_in_minutes < 20 {
            "lunch".to_string()
        } else {
            "dinner".to_string()
        },
    }
}

fn rule_table_ideas(selected_cuisines: &[String], flags: DietaryFlags) -> Vec<MealIdea> {
    let mut meals = Vec::new();
    let has_cuisine =
        |name: &str| selected_cuisines.iter().any(|c| c.to_lowercase() == name);

    if has_cuisine("italian") {
        if !flags.vegetarian {
            meals.push(idea(
                "Spaghetti Bolognese",
                &["Pasta", "Ground Beef", "Tomatoes", "Onions", "Garlic", "Olive Oil"],
                "Italian",
                "dinner",
            ));
        }
        meals.push(idea(
            "Tomato Basil Pasta",
            &["Pasta", "Tomatoes", "Basil", "Garlic", "Olive Oil"],
            "Italian",
            "lunch",
        ));
    }

    if has_cuisine("mexican") {
        if !flags.vegetarian {
            meals.push(idea(
                "Beef Tacos",
                &["Tortillas", "Ground Beef", "Onions", "Tomatoes", "Avocado", "Cilantro"],
                "Mexican",
                "dinner",
            ));
        }
        meals.push(idea(
            "Bean Burritos",
            &["Tortillas", "Beans", "Rice", "Avocado", "Cilantro"],
            "Mexican",
            "lunch",
        ));
    }

    if has_cuisine("chinese") {
        if !flags.vegetarian {
            meals.push(idea(
                "Chicken Fried Rice",
                &["Rice", "Chicken", "Eggs", "Green Onions", "Soy Sauce", "Garlic"],
                "Chinese",
                "dinner",
            ));
        }
        meals.push(idea(
            "Vegetable Stir Fry",
            &["Rice", "Bell Peppers", "Broccoli", "Carrots", "Ginger", "Garlic", "Soy Sauce"],
            "Chinese",
            "lunch",
        ));
    }

    meals
}

fn idea(name: &str, ingredients: &[&str], cuisine_type: &str, meal_type: &str) -> MealIdea {
    MealIdea {
        name: name.to_string(),
        ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
        cuisine_type: cuisine_type.to_string(),
        meal_type: meal_type.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u64, title: &str, minutes: u32, cuisines: &[&str], diets: &[&str]) -> RecipeSummary {
        RecipeSummary {
            id,
            title: title.to_string(),
            image: String::new(),
            image_type: String::new(),
            servings: 2,
            ready_in_minutes: minutes,
            cuisines: cuisines.iter().map(|s| s.to_string()).collect(),
            diets: diets.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_rule_table_without_vegetarian_flag() {
        let cuisines = vec!["italian".to_string(), "chinese".to_string()];
        let meals = generate_meal_ideas(&cuisines, &[], &[]);
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert!(names.contains(&"Spaghetti Bolognese"));
        assert!(names.contains(&"Tomato Basil Pasta"));
        assert!(names.contains(&"Chicken Fried Rice"));
        assert!(names.contains(&"Vegetable Stir Fry"));
    }

    #[test]
    fn test_vegetarian_skips_meat_variants() {
        let cuisines = vec!["mexican".to_string()];
        let diets = vec!["Vegetarian".to_string()];
        let meals = generate_meal_ideas(&cuisines, &diets, &[]);
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert!(!names.contains(&"Beef Tacos"));
        assert!(names.contains(&"Bean Burritos"));
    }

    #[test]
    fn test_catalog_results_preferred_when_plentiful() {
        let cuisines = vec!["italian".to_string()];
        let recipes = vec![
            recipe(1, "Quick Caprese Salad", 10, &["Italian"], &[]),
            recipe(2, "Mushroom Risotto", 40, &["Italian"], &[]),
            recipe(3, "Minestrone", 35, &["Italian"], &[]),
        ];
        let meals = generate_meal_ideas(&cuisines, &[], &recipes);
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        // Three catalog candidates mean the rule table stays out.
        assert!(!names.contains(&"Spaghetti Bolognese"));
        assert!(names.contains(&"Quick Caprese Salad"));
        assert_eq!(meals.len(), 3);
    }

    #[test]
    fn test_rule_table_augments_sparse_catalog_results() {
        let cuisines = vec!["italian".to_string()];
        let recipes = vec![recipe(1, "Mushroom Risotto", 40, &["Italian"], &[])];
        let meals = generate_meal_ideas(&cuisines, &[], &recipes);
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert!(names.contains(&"Mushroom Risotto"));
        assert!(names.contains(&"Spaghetti Bolognese"));
    }

    #[test]
    fn test_catalog_meal_type_derived_from_prep_time() {
        let recipes = vec![
            recipe(1, "Quick Salad", 15, &[], &[]),
            recipe(2, "Braised Stew", 90, &[], &[]),
            recipe(3, "Borderline Bowl", 20, &[], &[]),
        ];
        let meals = generate_meal_ideas(&[], &[], &recipes);
        assert_eq!(meals[0].meal_type, "lunch");
        assert_eq!(meals[1].meal_type, "dinner");
        assert_eq!(meals[2].meal_type, "dinner");
    }

    #[test]
    fn test_catalog_cuisine_defaults_to_various() {
        let recipes = vec![
            recipe(1, "A", 30, &[], &[]),
            recipe(2, "B", 30, &["Thai"], &[]),
            recipe(3, "C", 30, &[], &[]),
        ];
        let meals = generate_meal_ideas(&[], &[], &recipes);
        assert_eq!(meals[0].cuisine_type, "Various");
        assert_eq!(meals[1].cuisine_type, "Thai");
    }

    #[test]
    fn test_catalog_ideas_are_still_filtered() {
        // A catalog result whose stand-in ingredient list trips an
        // exclusion is dropped like any rule-table meal.
        let diets = vec!["Low Carb".to_string()];
        let recipes = vec![
            recipe(1, "Pasta Night", 30, &[], &["Pasta"]),
            recipe(2, "Steak Salad", 30, &[], &[]),
            recipe(3, "Zoodle Bowl", 15, &[], &[]),
        ];
        let meals = generate_meal_ideas(&[], &diets, &recipes);
        let names: Vec<&str> = meals.iter().map(|m| m.name.as_str()).collect();
        assert!(!names.contains(&"Pasta Night"));
        assert!(names.contains(&"Steak Salad"));
    }

    #[test]
    fn test_no_cuisines_no_catalog_yields_backfill_only() {
        let meals = generate_meal_ideas(&[], &[], &[]);
        assert!(!meals.is_empty());
        assert!(meals.iter().all(|m| m.cuisine_type == "Fusion"
            || m.cuisine_type == "Breakfast"));
    }
}
