//! # Stellar Burgers HTTP Client
//!
//! This module provides typed wrappers around the Stellar Burgers REST API:
//! account management, the ingredient catalogue and orders.
//!
//! ## Modules
//!
//! - [`api`] - Shared base URL, HTTP client and request execution
//! - [`client`] - [`StellarBurgersClient`], bundling all endpoint clients
//! - [`ingredients`] - `GET /ingredients`
//! - [`orders`] - `POST /orders` and `GET /orders`
//! - [`users`] - register, login, logout, update and delete under `/auth`
//! - [`response`] - The raw status-plus-body reply every call returns
//! - [`types`] - Request and response bodies
//!
//! ## Quick Start
//!
//! ```no_run
//! use stellar_burgers::client::{Credentials, StellarBurgersClient};
//! use stellar_burgers::config::ClientConfig;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = StellarBurgersClient::new(&ClientConfig::default())?;
//!
//! let response = client.users().register(&Credentials::unique()).await?;
//! println!("Register answered {}", response.status());
//!
//! let ingredients = client.ingredients().get_ingredients().await?;
//! println!("Catalogue has {} ingredients", ingredients.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
#[allow(clippy::module_inception)]
pub mod client;
pub mod ingredients;
pub mod orders;
pub mod response;
pub mod types;
pub mod users;

pub use client::StellarBurgersClient;
pub use ingredients::IngredientsClient;
pub use orders::OrderClient;
pub use response::ApiResponse;
pub use types::*;
pub use users::UserClient;
