pub mod aggregator;
pub mod dietary_filter;
pub mod meal_ideas;
pub mod optimizer;
pub mod tables;

pub use aggregator::GroceryItem;
pub use meal_ideas::MealIdea;
pub use optimizer::{
    generate_optimized_grocery_list, OptimizeGroceryRequest, OptimizedGroceryResponse,
};
