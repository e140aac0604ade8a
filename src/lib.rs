//! # Stellar Burgers Client Library
//!
//! Typed access to the Stellar Burgers food-ordering demo API, used by the
//! end-to-end suite under `tests/` and by the `stellar-burgers-smoke` binary.
//!
//! ## Client Module
//!
//! The [`client`] module wraps each REST endpoint in a one-shot call that
//! returns the raw status and body, leaving every judgement to the caller.
//!
//! ## Config Module
//!
//! The [`config`] module reads the target host and request timeout from the
//! environment.
//!
//! ## Quick Start
//!
//! ```no_run
//! use stellar_burgers::StellarBurgersClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = StellarBurgersClient::from_env()?;
//! let response = client.orders().get_user_orders("").await?;
//! assert_eq!(response.status_code(), 401);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;

pub use client::StellarBurgersClient;
pub use config::ClientConfig;
