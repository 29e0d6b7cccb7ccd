use serde::{Deserialize, Serialize};

pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// One recipe as returned by the catalog's complexSearch endpoint. Fields
/// the catalog omits for some recipes default rather than failing the whole
/// payload.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub image_type: String,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub ready_in_minutes: u32,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub diets: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedIngredient {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub original: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub summary: RecipeSummary,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SearchRecipesParams {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub intolerances: Option<String>,
    pub include_ingredients: Option<String>,
    pub exclude_ingredients: Option<String>,
    pub meal_type: Option<String>,
    pub max_ready_time: Option<u32>,
    pub number: Option<u32>,
}

impl SearchRecipesParams {
    /// Flattens the set parameters into the catalog's query-string pairs.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        pairs.push(("number", self.number.unwrap_or(10).to_string()));
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(cuisine) = &self.cuisine {
            pairs.push(("cuisine", cuisine.clone()));
        }
        if let Some(diet) = &self.diet {
            pairs.push(("diet", diet.clone()));
        }
        if let Some(intolerances) = &self.intolerances {
            pairs.push(("intolerances", intolerances.clone()));
        }
        if let Some(include) = &self.include_ingredients {
            pairs.push(("includeIngredients", include.clone()));
        }
        if let Some(exclude) = &self.exclude_ingredients {
            pairs.push(("excludeIngredients", exclude.clone()));
        }
        if let Some(meal_type) = &self.meal_type {
            pairs.push(("type", meal_type.clone()));
        }
        if let Some(max_ready_time) = &self.max_ready_time {
            pairs.push(("maxReadyTime", max_ready_time.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecipesResponse {
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
    #[serde(default)]
    pub total_results: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_query_pairs() {
        let params = SearchRecipesParams {
            cuisine: Some("italian".to_string()),
            diet: Some("Vegetarian,Dairy Free".to_string()),
            meal_type: Some("dinner".to_string()),
            number: Some(3),
            ..Default::default()
        };
        let pairs = params.to_query_pairs();
        assert!(pairs.contains(&("number", "3".to_string())));
        assert!(pairs.contains(&("cuisine", "italian".to_string())));
        assert!(pairs.contains(&("type", "dinner".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "query"));
    }

    #[test]
    fn test_recipe_summary_tolerates_missing_fields() {
        let json = r#"{"id": 715415, "title": "Red Lentil Soup with Chicken and Turnips"}"#;
        let recipe: RecipeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 715415);
        assert_eq!(recipe.ready_in_minutes, 0);
        assert!(recipe.cuisines.is_empty());
    }

    #[test]
    fn test_search_response_deserializes() {
        let json = r#"{
            "results": [
                {"id": 1, "title": "Pasta Primavera", "readyInMinutes": 25,
                 "cuisines": ["Italian"], "diets": ["vegetarian"], "servings": 2,
                 "image": "x.jpg", "imageType": "jpg"}
            ],
            "totalResults": 1
        }"#;
        let response: SearchRecipesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_results, 1);
        assert_eq!(response.results[0].ready_in_minutes, 25);
        assert_eq!(response.results[0].cuisines, vec!["Italian"]);
    }

    #[test]
    fn test_recipe_detail_flattens_summary() {
        let json = r#"{
            "id": 2, "title": "Miso Soup", "readyInMinutes": 15,
            "instructions": "Simmer.",
            "extendedIngredients": [
                {"id": 10, "name": "miso paste", "amount": 2.0, "unit": "tbsp",
                 "original": "2 tbsp miso paste"}
            ]
        }"#;
        let detail: RecipeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.summary.title, "Miso Soup");
        assert_eq!(detail.extended_ingredients[0].name, "miso paste");
    }
}
