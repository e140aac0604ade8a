use anyhow::Result;
use reqwest::Method;

use crate::client::{api::ApiClient, response::ApiResponse, types::CreateOrderRequest};

const ORDERS_PATH: &str = "/orders";

/// Order creation and history.
#[derive(Debug, Clone)]
pub struct OrderClient {
    api: ApiClient,
}

impl OrderClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Places an order without an `Authorization` header.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> Result<ApiResponse> {
        tracing::debug!("Creating anonymous order with {} ingredients", request.ingredients.len());
        let request = self.api.request(Method::POST, ORDERS_PATH, None).json(request);
        self.api.execute(request).await
    }

    pub async fn create_order_authorized(
        &self,
        access_token: &str,
        request: &CreateOrderRequest,
    ) -> Result<ApiResponse> {
        tracing::debug!("Creating authorized order with {} ingredients", request.ingredients.len());
        let request = self
            .api
            .request(Method::POST, ORDERS_PATH, Some(access_token))
            .json(request);
        self.api.execute(request).await
    }

    /// Lists the orders of the account behind `access_token`.
    ///
    /// The header is sent even when `access_token` is empty.
    pub async fn get_user_orders(&self, access_token: &str) -> Result<ApiResponse> {
        let request = self.api.request(Method::GET, ORDERS_PATH, Some(access_token));
        self.api.execute(request).await
    }
}
