use crate::error::AppError;
use crate::model::requests::AddSubscriptionRequest;
use crate::model::responses::JsonMap;
use async_trait::async_trait;

/// Interface for the subscription service
#[async_trait]
pub trait SubscriptionService: Send + Sync {
    /// Adds a subscription to a subscriber
    ///
    /// # Returns
    /// * A map with `subscription_id`
    async fn add_subscription(
        &self,
        subscriber_id: &str,
        request: &AddSubscriptionRequest,
    ) -> Result<JsonMap, AppError>;

    /// Gets a subscription
    async fn get_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
    ) -> Result<JsonMap, AppError>;

    /// Suspends (`true`) or resumes (`false`) every subscription of a subscriber
    async fn suspend_subscriptions(
        &self,
        subscriber_id: &str,
        suspended: bool,
    ) -> Result<JsonMap, AppError>;

    /// Deletes a subscription
    async fn delete_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
    ) -> Result<JsonMap, AppError>;

    /// Deletes every subscription of a subscriber
    async fn delete_all_subscriptions(&self, subscriber_id: &str) -> Result<JsonMap, AppError>;

    /// Suspends (`true`) or resumes (`false`) one subscription
    async fn suspend_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
        suspended: bool,
    ) -> Result<JsonMap, AppError>;

    /// Converts a trial subscription to a paid one
    ///
    /// # Arguments
    /// * `product_id` - Product for the converted subscription; `None` keeps the trial's product
    async fn convert_trial_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
        product_id: Option<&str>,
    ) -> Result<JsonMap, AppError>;

    /// Replaces a subscription with one based on another product
    ///
    /// Used for upgrades and downgrades. A suspended subscription is resumed
    /// with the new product.
    async fn replace_subscription(
        &self,
        subscriber_id: &str,
        subscription_id: &str,
        product_id: &str,
    ) -> Result<JsonMap, AppError>;
}
