/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Bitdefender MSP Client
//!
//! A thin, async client for the Bitdefender MSP REST API. It covers subscriber
//! management (list, create, get, delete, unmanage) and subscription management
//! (add, get, suspend, resume, convert trials, replace and delete).
//!
//! Every endpoint goes through a single dispatch routine that:
//! - sends the request with the `Authorization: ApiKey <key>` header
//! - parses the body as a JSON object, falling back to an empty map
//! - turns any non-2xx status into [`error::ApiError`]
//!
//! ## Example
//! ```ignore
//! use bitdefender_msp::prelude::*;
//!
//! let client = Client::new("your-api-key")?;
//!
//! let created = client
//!     .create_subscriber(&CreateSubscriberRequest::new().with_email("test@example.com"))
//!     .await?;
//! let created = CreatedSubscriber::try_from(created)?;
//!
//! client
//!     .add_subscription(
//!         &created.subscriber_id,
//!         &AddSubscriptionRequest::new("product-id").with_trial(true),
//!     )
//!     .await?;
//!
//! client.suspend_subscriptions(&created.subscriber_id, true).await?;
//! ```
//!
//! ## Configuration
//!
//! [`Client::from_env`](application::client::Client::from_env) reads its settings from the
//! environment (a `.env` file is loaded first when present):
//!
//! - `MSP_API_KEY` - API key sent on every request
//! - `MSP_REST_BASE_URL` - base URL (defaults to `https://msp.bitdefender.com`)
//! - `MSP_REST_TIMEOUT` - optional request timeout in seconds
//! - `LOGLEVEL` - log level used by [`utils::logger::setup_logger`]

/// Application layer: client, configuration and service interfaces
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Transport, request and response models
pub mod model;

/// Typed views over well-known API responses
pub mod presentation;

/// Convenience re-exports
pub mod prelude;

/// Utility helpers
pub mod utils;

/// Configuration re-export
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
///
/// # Returns
///
/// The version string as declared in `Cargo.toml`
pub fn version() -> &'static str {
    VERSION
}
