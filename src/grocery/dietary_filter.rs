use crate::grocery::meal_ideas::MealIdea;

/// Fixed exclusion vocabularies. Matching is exact and case-sensitive
/// against a meal's ingredient entries; "Chicken Breast" is not "Chicken".
pub const VEGETARIAN_EXCLUSIONS: [&str; 6] =
    ["Beef", "Chicken", "Pork", "Fish", "Shrimp", "Ground Beef"];
pub const DAIRY_FREE_EXCLUSIONS: [&str; 6] =
    ["Milk", "Cheese", "Butter", "Cream", "Yogurt", "Parmesan Cheese"];
pub const LOW_CARB_EXCLUSIONS: [&str; 4] = ["Pasta", "Rice", "Bread", "Tortillas"];

/// The three dietary tags with built-in filtering semantics. Any other tag
/// is accepted but has no effect here.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DietaryFlags {
    pub vegetarian: bool,
    pub dairy_free: bool,
    pub low_carb: bool,
}

impl DietaryFlags {
    pub fn from_tags(tags: &[String]) -> Self {
        DietaryFlags {
            vegetarian: tags.iter().any(|t| t == "Vegetarian"),
            dairy_free: tags.iter().any(|t| t == "Dairy Free"),
            low_carb: tags.iter().any(|t| t == "Low Carb"),
        }
    }
}

fn contains_excluded(ingredients: &[String], exclusions: &[&str]) -> bool {
    ingredients
        .iter()
        .any(|ingredient| exclusions.contains(&ingredient.as_str()))
}

/// Active filters compose with AND: a meal survives only if it passes every
/// one of them.
pub fn meal_passes(meal: &MealIdea, flags: DietaryFlags) -> bool {
    if flags.vegetarian && contains_excluded(&meal.ingredients, &VEGETARIAN_EXCLUSIONS) {
        return false;
    }
    if flags.dairy_free && contains_excluded(&meal.ingredients, &DAIRY_FREE_EXCLUSIONS) {
        return false;
    }
    if flags.low_carb && contains_excluded(&meal.ingredients, &LOW_CARB_EXCLUSIONS) {
        return false;
    }
    true
}

pub fn filter_meal_ideas(meals: Vec<MealIdea>, flags: DietaryFlags) -> Vec<MealIdea> {
    meals
        .into_iter()
        .filter(|meal| meal_passes(meal, flags))
        .collect()
}

/// Tops a filtered list back up toward 3 entries with generic meals chosen
/// to already satisfy whichever filters are active.
pub fn backfill_meal_ideas(meals: &mut Vec<MealIdea>, flags: DietaryFlags) {
    if meals.len() >= 3 {
        return;
    }

    if flags.vegetarian && !flags.low_carb {
        meals.push(MealIdea {
            name: "Vegetable Stir Fry".to_string(),
            ingredients: string_vec(&[
                "Bell Peppers",
                "Broccoli",
                "Carrots",
                "Ginger",
                "Garlic",
                "Soy Sauce",
            ]),
            cuisine_type: "Fusion".to_string(),
            meal_type: "dinner".to_string(),
        });
    }

    if !flags.dairy_free && !flags.low_carb {
        meals.push(MealIdea {
            name: "Veggie Omelette".to_string(),
            ingredients: string_vec(&["Eggs", "Bell Peppers", "Onions", "Cheese", "Spinach"]),
            cuisine_type: "Breakfast".to_string(),
            meal_type: "breakfast".to_string(),
        });
    }

    if flags.low_carb {
        meals.push(MealIdea {
            name: "Cauliflower Rice Bowl".to_string(),
            ingredients: string_vec(&["Cauliflower", "Bell Peppers", "Avocado", "Cilantro", "Lime"]),
            cuisine_type: "Fusion".to_string(),
            meal_type: "lunch".to_string(),
        });
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
