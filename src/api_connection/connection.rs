use dotenv::dotenv;
use reqwest::Client;
use std::env;
use std::error::Error;
use std::fmt;

use super::endpoints::{
    RecipeDetail, SearchRecipesParams, SearchRecipesResponse, SPOONACULAR_BASE_URL,
};

#[derive(Debug)]
pub enum CatalogError {
    MissingApiKey(String),
    NetworkError(reqwest::Error),
    DeserializationError(serde_json::Error),
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    Disabled,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::MissingApiKey(key_name) => {
                write!(f, "Catalog API key not found in environment: {}", key_name)
            }
            CatalogError::NetworkError(err) => write!(f, "Network error: {}", err),
            CatalogError::DeserializationError(err) => {
                write!(f, "Deserialization error: {}", err)
            }
            CatalogError::ApiError { status, error_body } => {
                write!(f, "Catalog API error {}: {}", status, error_body)
            }
            CatalogError::Disabled => write!(f, "Recipe catalog is disabled"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::NetworkError(err) => Some(err),
            CatalogError::DeserializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::NetworkError(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::DeserializationError(err)
    }
}

/// External recipe catalog. Both operations are fallible by contract; every
/// caller in this crate absorbs failure and falls back to local data, so a
/// stub implementation can force any single call to fail.
#[allow(async_fn_in_trait)]
pub trait RecipeCatalog {
    async fn search_recipes(
        &self,
        params: &SearchRecipesParams,
    ) -> Result<SearchRecipesResponse, CatalogError>;

    async fn recipe_detail(&self, id: u64) -> Result<Option<RecipeDetail>, CatalogError>;
}

/// Spoonacular-backed catalog. The API key is resolved from the environment
/// at call time, so a missing key surfaces as a per-call error the fallback
/// chain handles like any other failure.
pub struct SpoonacularCatalog {
    api_key_env_var: String,
    base_url: String,
    client: Client,
}

impl SpoonacularCatalog {
    pub fn new(api_key_env_var: &str) -> Self {
        dotenv().ok();
        SpoonacularCatalog {
            api_key_env_var: api_key_env_var.to_string(),
            base_url: SPOONACULAR_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(api_key_env_var: &str, base_url: &str) -> Self {
        SpoonacularCatalog {
            api_key_env_var: api_key_env_var.to_string(),
            base_url: base_url.to_string(),
            client: Client::new(),
        }
    }

    fn api_key(&self) -> Result<String, CatalogError> {
        env::var(&self.api_key_env_var)
            .map_err(|_| CatalogError::MissingApiKey(self.api_key_env_var.clone()))
    }
}

impl RecipeCatalog for SpoonacularCatalog {
    async fn search_recipes(
        &self,
        params: &SearchRecipesParams,
    ) -> Result<SearchRecipesResponse, CatalogError> {
        let api_key = self.api_key()?;
        let url = format!("{}/recipes/complexSearch", self.base_url);

        let mut query = params.to_query_pairs();
        query.push(("apiKey", api_key));

        let response = self.client.get(&url).query(&query).send().await?;

        if response.status().is_success() {
            let search_response = response.json::<SearchRecipesResponse>().await?;
            Ok(search_response)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(CatalogError::ApiError { status, error_body })
        }
    }

    async fn recipe_detail(&self, id: u64) -> Result<Option<RecipeDetail>, CatalogError> {
        let api_key = self.api_key()?;
        let url = format!("{}/recipes/{}/information", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", api_key.as_str()), ("includeNutrition", "false")])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if response.status().is_success() {
            let detail = response.json::<RecipeDetail>().await?;
            Ok(Some(detail))
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(CatalogError::ApiError { status, error_body })
        }
    }
}

/// Catalog stand-in for offline operation: every call fails with
/// `CatalogError::Disabled`, which callers translate into their local
/// fallback path.
pub struct DisabledCatalog;

impl RecipeCatalog for DisabledCatalog {
    async fn search_recipes(
        &self,
        _params: &SearchRecipesParams,
    ) -> Result<SearchRecipesResponse, CatalogError> {
        Err(CatalogError::Disabled)
    }

    async fn recipe_detail(&self, _id: u64) -> Result<Option<RecipeDetail>, CatalogError> {
        Err(CatalogError::Disabled)
    }
}
