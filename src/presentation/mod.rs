/// Subscriber response models
pub mod subscriber;
/// Subscription response models
pub mod subscription;

pub use subscriber::{CreatedSubscriber, SubscriberList};
pub use subscription::CreatedSubscription;
