use anyhow::Result;

use crate::client::{
    api::ApiClient, ingredients::IngredientsClient, orders::OrderClient, users::UserClient,
};
use crate::config::ClientConfig;

/// All Stellar Burgers endpoints behind one HTTP client.
#[derive(Debug, Clone)]
pub struct StellarBurgersClient {
    api: ApiClient,
    users: UserClient,
    orders: OrderClient,
    ingredients: IngredientsClient,
}

impl StellarBurgersClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let api = ApiClient::new(config)?;
        tracing::debug!("Stellar Burgers client targeting {}", api.base_url());

        Ok(Self {
            users: UserClient::new(api.clone()),
            orders: OrderClient::new(api.clone()),
            ingredients: IngredientsClient::new(api.clone()),
            api,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        self.api.base_url()
    }

    pub fn users(&self) -> &UserClient {
        &self.users
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    pub fn ingredients(&self) -> &IngredientsClient {
        &self.ingredients
    }
}
