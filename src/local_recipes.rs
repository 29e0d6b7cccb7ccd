/// Built-in recipe used when the external catalog is unavailable or returns
/// nothing usable for a meal-plan slot.
#[derive(Debug, Clone, Copy)]
pub struct LocalRecipe {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prep_minutes: u32,
    pub servings: u32,
    pub ingredients: &'static [&'static str],
    pub dietary_info: &'static [&'static str],
    pub cuisine_type: &'static str,
}

pub static LOCAL_RECIPES: &[LocalRecipe] = &[
    LocalRecipe {
        id: "1",
        name: "Creamy Garlic Butter Tuscan Salmon",
        description: "Pan-seared salmon in a creamy garlic butter sauce with spinach and sun-dried tomatoes.",
        prep_minutes: 25,
        servings: 4,
        ingredients: &[
            "Salmon Fillets",
            "Olive Oil",
            "Butter",
            "Garlic",
            "Onions",
            "Sun-Dried Tomatoes",
            "Half and Half",
            "Baby Spinach",
            "Parmesan Cheese",
        ],
        dietary_info: &["High Protein"],
        cuisine_type: "italian",
    },
    LocalRecipe {
        id: "2",
        name: "Quick Veggie Stir Fry",
        description: "A colorful, nutritious vegetable stir-fry that comes together in minutes.",
        prep_minutes: 15,
        servings: 2,
        ingredients: &[
            "Sesame Oil",
            "Garlic",
            "Ginger",
            "Bell Peppers",
            "Carrots",
            "Broccoli",
            "Snow Peas",
            "Soy Sauce",
            "Green Onions",
        ],
        dietary_info: &["Vegetarian", "Low Calorie"],
        cuisine_type: "chinese",
    },
    LocalRecipe {
        id: "3",
        name: "Homestyle Chicken Noodle Soup",
        description: "Classic comfort food with tender chicken, vegetables, and noodles in a flavorful broth.",
        prep_minutes: 45,
        servings: 6,
        ingredients: &[
            "Olive Oil",
            "Onions",
            "Carrots",
            "Celery",
            "Garlic",
            "Chicken Broth",
            "Shredded Chicken",
            "Egg Noodles",
        ],
        dietary_info: &["High Protein"],
        cuisine_type: "american",
    },
    LocalRecipe {
        id: "4",
        name: "Rainbow Buddha Bowl",
        description: "A vibrant, nutrient-packed lunch bowl with quinoa, roasted vegetables, and tahini dressing.",
        prep_minutes: 30,
        servings: 2,
        ingredients: &[
            "Quinoa",
            "Sweet Potato",
            "Chickpeas",
            "Purple Cabbage",
            "Avocado",
            "Carrots",
            "Cucumber",
            "Tahini",
        ],
        dietary_info: &["Vegan", "Gluten-Free"],
        cuisine_type: "mediterranean",
    },
    LocalRecipe {
        id: "5",
        name: "Spinach and Feta Omelette",
        description: "A fluffy three-egg breakfast omelette folded over wilted spinach and feta.",
        prep_minutes: 10,
        servings: 1,
        ingredients: &["Eggs", "Baby Spinach", "Feta Cheese", "Butter", "Chives"],
        dietary_info: &["Vegetarian", "High Protein"],
        cuisine_type: "american",
    },
    LocalRecipe {
        id: "6",
        name: "Berry Overnight Oatmeal",
        description: "Make-ahead breakfast oatmeal soaked overnight with mixed berries and chia seeds.",
        prep_minutes: 5,
        servings: 1,
        ingredients: &["Rolled Oats", "Mixed Berries", "Chia Seeds", "Almond Milk", "Honey"],
        dietary_info: &["Vegetarian", "Dairy Free"],
        cuisine_type: "american",
    },
    LocalRecipe {
        id: "7",
        name: "Avocado Toast with Poached Egg",
        description: "Sourdough toast topped with smashed avocado, a poached egg, and chili flakes for breakfast.",
        prep_minutes: 12,
        servings: 1,
        ingredients: &["Sourdough Bread", "Avocado", "Eggs", "Lemon", "Chili Flakes"],
        dietary_info: &["Vegetarian"],
        cuisine_type: "american",
    },
    LocalRecipe {
        id: "8",
        name: "Sheet Pan Chicken Fajitas",
        description: "Seasoned chicken strips roasted with peppers and onions, served in warm tortillas.",
        prep_minutes: 35,
        servings: 4,
        ingredients: &[
            "Chicken Breast",
            "Bell Peppers",
            "Onions",
            "Tortillas",
            "Cumin",
            "Lime",
        ],
        dietary_info: &["High Protein"],
        cuisine_type: "mexican",
    },
];

pub fn local_recipe_by_id(id: &str) -> Option<&'static LocalRecipe> {
    LOCAL_RECIPES.iter().find(|r| r.id == id)
}
