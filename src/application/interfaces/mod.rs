/// Subscriber service interface
pub mod subscriber;
/// Subscription service interface
pub mod subscription;

pub use subscriber::SubscriberService;
pub use subscription::SubscriptionService;
