pub mod api_connection;
pub mod cli;
pub mod grocery;
pub mod local_recipes;
pub mod meal_plan;
pub mod pantry;
