//! Type definitions for the Stellar Burgers API.
//!
//! This module contains the request bodies sent to the service and the
//! response bodies it returns for accounts, ingredients and orders.
//!
//! ## Key Types
//!
//! - [`Credentials`] - Registration payload; every field may be left out
//! - [`AuthResponse`] - Token pair returned by register and login
//! - [`Ingredient`] - A single entry of the ingredient catalogue
//! - [`CreateOrderRequest`] - The list of ingredient ids making up an order
//! - [`Order`] - An order as returned by the create and list endpoints
//!
//! ## API Compatibility
//!
//! The service mixes naming conventions: token and timestamp fields are
//! camelCase, record ids are `_id` and the document version is `__v`. Optional
//! request fields are omitted from the body when unset so that "missing field"
//! cases reach the service as such.

use std::sync::atomic::{AtomicU32, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

static CREDENTIALS_SEQUENCE: AtomicU32 = AtomicU32::new(0);

/// Account credentials used for registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
            name: Some(name.into()),
        }
    }

    /// Credentials with an email address no other caller has used.
    ///
    /// The address combines the current time, the process id and a
    /// per-process sequence number, so concurrent test binaries never collide.
    pub fn unique() -> Self {
        let sequence = CREDENTIALS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let email = format!(
            "test_login_email_{}_{}_{}@yandex.ru",
            Utc::now().timestamp_millis(),
            std::process::id(),
            sequence
        );
        Self::new(email, "test_password", "test_name")
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn without_password(mut self) -> Self {
        self.password = None;
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }
}

/// Login request payload for `/auth/login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Logout request payload; `token` is the refresh token of the session.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogoutRequest {
    pub token: String,
}

/// Profile update payload for `PATCH /auth/user`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Public part of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
}

/// Register and login response.
///
/// `access_token` already carries the `Bearer ` prefix and is sent verbatim as
/// the `Authorization` header value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Profile update response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Body shared by failures and by logout/delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// A catalogue ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Hash-like identifier used when building an order
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// `bun`, `main` or `sauce`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub proteins: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub carbohydrates: Option<f64>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_mobile: Option<String>,
    #[serde(default)]
    pub image_large: Option<String>,
    #[serde(rename = "__v", default)]
    pub version: Option<i64>,
}

/// `GET /ingredients` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientsResponse {
    pub success: bool,
    pub data: Vec<Ingredient>,
}

/// Order creation payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub ingredients: Vec<String>,
}

impl CreateOrderRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// An order.
///
/// Anonymous creation only returns `number`; the list endpoint and
/// authorized creation fill in the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub number: i64,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Ingredient ids on the list endpoint, full records on authorized creation
    #[serde(default)]
    pub ingredients: Vec<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner: Option<serde_json::Value>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// `POST /orders` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    #[serde(default)]
    pub name: Option<String>,
    pub order: Order,
}

/// `GET /orders` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub success: bool,
    pub orders: Vec<Order>,
    #[serde(default)]
    pub total: Option<i64>,
    #[serde(default)]
    pub total_today: Option<i64>,
}
