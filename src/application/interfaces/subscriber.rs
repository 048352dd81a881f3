use crate::error::AppError;
use crate::model::requests::{CreateSubscriberRequest, ListSubscribersRequest};
use crate::model::responses::JsonMap;
use async_trait::async_trait;

/// Interface for the subscriber service
#[async_trait]
pub trait SubscriberService: Send + Sync {
    /// Lists subscribers, one page at a time
    ///
    /// # Arguments
    /// * `params` - Page, limit and filters (product_id, state, subscription_state, ...)
    ///
    /// # Returns
    /// * A map with `subscribers`, `count` and `query_hash`
    async fn list_subscribers(&self, params: &ListSubscribersRequest)
    -> Result<JsonMap, AppError>;

    /// Creates a subscriber
    ///
    /// At least one of the request fields must be set, otherwise
    /// `AppError::InvalidInput` is returned without contacting the API.
    ///
    /// # Returns
    /// * A map with `subscriber_id` and `enrol_url`
    async fn create_subscriber(&self, request: &CreateSubscriberRequest)
    -> Result<JsonMap, AppError>;

    /// Gets a subscriber
    async fn get_subscriber(&self, subscriber_id: &str) -> Result<JsonMap, AppError>;

    /// Deletes a subscriber
    async fn delete_subscriber(&self, subscriber_id: &str) -> Result<JsonMap, AppError>;

    /// Turns a managed subscriber into a regular Bitdefender account
    ///
    /// Only available to organizations using Bitdefender Login.
    async fn unmanage_subscriber(&self, subscriber_id: &str) -> Result<JsonMap, AppError>;
}
