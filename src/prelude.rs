/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Bitdefender MSP Client Prelude
//!
//! Imports the types and traits needed for most MSP API interactions.
//!
//! ## Usage
//!
//! ```rust
//! use bitdefender_msp::prelude::*;
//!
//! let request = CreateSubscriberRequest::new().with_email("test@example.com");
//! assert!(!request.is_empty());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the MSP API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{ApiError, AppError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// MSP API client
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::{SubscriberService, SubscriptionService};

/// HTTP session and dispatch
pub use crate::model::http::HttpClient;

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Request bodies and query builders
pub use crate::model::requests::{
    AddSubscriptionRequest, ConvertTarget, ConvertTrialRequest, CreateSubscriberRequest,
    ListSubscribersRequest, Query, ReplaceSubscriptionRequest, SuspendRequest, UnmanageRequest,
};

/// Raw response body
pub use crate::model::responses::JsonMap;

/// Typed response views
pub use crate::presentation::{CreatedSubscriber, CreatedSubscription, SubscriberList};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
