/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Bitdefender MSP API
//!
//! Each endpoint builds its path, query and body, then hands them to
//! [`HttpClient::request`]. Responses come back as the raw JSON object.
//!
//! # Example
//! ```ignore
//! use bitdefender_msp::application::client::Client;
//! use bitdefender_msp::application::interfaces::SubscriberService;
//!
//! let client = Client::new("your-api-key")?;
//! let subscriber = client.get_subscriber("subscriber-id").await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::{SubscriberService, SubscriptionService};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{
    AddSubscriptionRequest, ConvertTrialRequest, CreateSubscriberRequest, ListSubscribersRequest,
    ReplaceSubscriptionRequest, SuspendRequest, UnmanageRequest,
};
use crate::model::responses::JsonMap;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

const SUBSCRIBERS_PATH: &str = "/v1/subscribers";

fn subscriber_path(subscriber_id: &str) -> String {
    format!("{SUBSCRIBERS_PATH}/{subscriber_id}")
}

fn subscriptions_path(subscriber_id: &str) -> String {
    format!("{SUBSCRIBERS_PATH}/{subscriber_id}/subscriptions")
}

fn subscription_path(subscriber_id: &str, subscription_id: &str) -> String {
    format!("{SUBSCRIBERS_PATH}/{subscriber_id}/subscriptions/{subscription_id}")
}

/// Client for the Bitdefender MSP API
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client for the given API key against the production API
    ///
    /// # Arguments
    /// * `api_key` - API key used in the `Authorization` header
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the session cannot be built
    pub fn new(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::from_config(Config::with_api_key(api_key))
    }

    /// Creates a client from a full configuration
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self::from_http_client(http_client))
    }

    /// Creates a client from environment configuration
    ///
    /// See [`Config::new`] for the variables read.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_config(Config::new())
    }

    /// Creates a client over an existing session
    pub fn from_http_client(http_client: HttpClient) -> Self {
        Self {
            http_client: Arc::new(http_client),
        }
    }

    /// Gets a reference to the underlying session
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl SubscriberService for Client {
    async fn list_subscribers(
        &self,
        params: &ListSubscribersRequest,
    ) -> Result<JsonMap, AppError> {
        info!(
            "Listing subscribers: page {}, limit {}",
            params.page, params.limit
        );
        let query = params.to_query();
        let result = self.http_client.get(SUBSCRIBERS_PATH, Some(&query)).await?;
        debug!("Subscribers page obtained");
        Ok(result)
    }

    async fn create_subscriber(
        &self,
        request: &CreateSubscriberRequest,
    ) -> Result<JsonMap, AppError> {
        if request.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one of email, phone, username, or external_subscriber_id must be provided"
                    .to_string(),
            ));
        }
        info!("Creating subscriber");
        self.http_client.post(SUBSCRIBERS_PATH, request).await
    }

    async fn get_subscriber(&self, subscriber_id: &str) -> Result<JsonMap, AppError> {
        info!("Getting subscriber: {}", subscriber_id);
        self.http_client
            .get(&subscriber_path(subscriber_id), None)
            .await
    }

    async fn delete_subscriber(&self, subscriber_id: &str) -> Result<JsonMap, AppError> {
        info!("Deleting subscriber: {}", subscriber_id);
        self.http_client
            .delete(&subscriber_path(subscriber_id))
            .await
    }

    async fn unmanage_subscriber(&self, subscriber_id: &str) -> Result<JsonMap, AppError> {
        info!("Unmanaging subscriber: {}", subscriber_id);
        self.http_client
            .patch(&subscriber_path(subscriber_id), UnmanageRequest::default())
            .await
    }
}

#[async_trait]
impl SubscriptionService for Client {
    async fn add_subscription(
        &self,
        subscriber_id: &str,
        request: &AddSubscriptionRequest,
    ) -> Result<JsonMap, AppError> {
        info!(
            "Adding subscription for product {} to subscriber {}",
            request.product_id, subscriber_id
        );
        self.http_client
            .post(&subscriptions_path(subscriber_id), request)
            .await
    }

    async fn get_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
    ) -> Result<JsonMap, AppError> {
        info!("Getting subscription: {}", subscription_id);
        self.http_client
            .get(&subscription_path(subscriber_id, subscription_id), None)
            .await
    }

    async fn suspend_subscriptions(
        &self,
        subscriber_id: &str,
        suspended: bool,
    ) -> Result<JsonMap, AppError> {
        info!(
            "Setting suspended={} on all subscriptions of subscriber {}",
            suspended, subscriber_id
        );
        self.http_client
            .patch(&subscriptions_path(subscriber_id), SuspendRequest { suspended })
            .await
    }

    async fn delete_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
    ) -> Result<JsonMap, AppError> {
        info!("Deleting subscription: {}", subscription_id);
        self.http_client
            .delete(&subscription_path(subscriber_id, subscription_id))
            .await
    }

    async fn delete_all_subscriptions(&self, subscriber_id: &str) -> Result<JsonMap, AppError> {
        info!("Deleting all subscriptions of subscriber {}", subscriber_id);
        self.http_client
            .delete(&subscriptions_path(subscriber_id))
            .await
    }

    async fn suspend_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
        suspended: bool,
    ) -> Result<JsonMap, AppError> {
        info!(
            "Setting suspended={} on subscription {}",
            suspended, subscription_id
        );
        self.http_client
            .patch(
                &subscription_path(subscriber_id, subscription_id),
                SuspendRequest { suspended },
            )
            .await
    }

    async fn convert_trial_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
        product_id: Option<&str>,
    ) -> Result<JsonMap, AppError> {
        info!("Converting trial subscription: {}", subscription_id);
        self.http_client
            .patch(
                &subscription_path(subscriber_id, subscription_id),
                ConvertTrialRequest::new(product_id),
            )
            .await
    }

    async fn replace_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
        product_id: &str,
    ) -> Result<JsonMap, AppError> {
        info!(
            "Replacing subscription {} with product {}",
            subscription_id, product_id
        );
        self.http_client
            .put(
                &subscription_path(subscriber_id, subscription_id),
                ReplaceSubscriptionRequest {
                    product_id: product_id.to_string(),
                },
            )
            .await
    }
}
