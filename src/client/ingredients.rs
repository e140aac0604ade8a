use anyhow::Result;
use reqwest::Method;

use crate::client::{
    api::ApiClient,
    response::ApiResponse,
    types::{Ingredient, IngredientsResponse},
};

const INGREDIENTS_PATH: &str = "/ingredients";

/// Read-only access to the ingredient catalogue.
#[derive(Debug, Clone)]
pub struct IngredientsClient {
    api: ApiClient,
}

impl IngredientsClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch_ingredients(&self) -> Result<ApiResponse> {
        let request = self.api.request(Method::GET, INGREDIENTS_PATH, None);
        self.api.execute(request).await
    }

    /// The `data` array of the catalogue response.
    pub async fn get_ingredients(&self) -> Result<Vec<Ingredient>> {
        let response = self.fetch_ingredients().await?;
        let ingredients: IngredientsResponse = response.json()?;

        tracing::debug!("Retrieved {} ingredients", ingredients.data.len());
        Ok(ingredients.data)
    }
}
