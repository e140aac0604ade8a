//! Account endpoints under `/auth`.
//!
//! No local validation happens here: missing fields, duplicate accounts and
//! wrong credentials are all judged by the service and show up only in the
//! returned [`ApiResponse`].

use anyhow::Result;
use reqwest::Method;

use crate::client::{
    api::ApiClient,
    response::ApiResponse,
    types::{Credentials, LoginRequest, LogoutRequest, UpdateUserRequest},
};

const AUTH_REGISTER_PATH: &str = "/auth/register";
const AUTH_LOGIN_PATH: &str = "/auth/login";
const AUTH_LOGOUT_PATH: &str = "/auth/logout";
const AUTH_USER_PATH: &str = "/auth/user";

#[derive(Debug, Clone)]
pub struct UserClient {
    api: ApiClient,
}

impl UserClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<ApiResponse> {
        tracing::info!("Registering user: {}", credentials.email.as_deref().unwrap_or("<none>"));
        let request = self
            .api
            .request(Method::POST, AUTH_REGISTER_PATH, None)
            .json(credentials);
        self.api.execute(request).await
    }

    pub async fn login(&self, email: Option<&str>, password: Option<&str>) -> Result<ApiResponse> {
        tracing::info!("Attempting login for user: {}", email.unwrap_or("<none>"));
        let body = LoginRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        };
        let request = self.api.request(Method::POST, AUTH_LOGIN_PATH, None).json(&body);
        self.api.execute(request).await
    }

    /// Ends the session identified by `refresh_token`.
    pub async fn logout(&self, refresh_token: &str) -> Result<ApiResponse> {
        let body = LogoutRequest {
            token: refresh_token.to_string(),
        };
        let request = self.api.request(Method::POST, AUTH_LOGOUT_PATH, None).json(&body);
        self.api.execute(request).await
    }

    pub async fn delete(&self, access_token: &str) -> Result<ApiResponse> {
        let request = self.api.request(Method::DELETE, AUTH_USER_PATH, Some(access_token));
        self.api.execute(request).await
    }

    pub async fn update(&self, access_token: &str, email: Option<&str>, name: Option<&str>) -> Result<ApiResponse> {
        let body = UpdateUserRequest {
            email: email.map(str::to_string),
            name: name.map(str::to_string),
        };
        let request = self
            .api
            .request(Method::PATCH, AUTH_USER_PATH, Some(access_token))
            .json(&body);
        self.api.execute(request).await
    }
}
