use crate::error::AppError;
use crate::model::responses::JsonMap;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `create_subscriber`
#[derive(Debug, Clone, PartialEq, DisplaySimple, Deserialize, Serialize)]
pub struct CreatedSubscriber {
    /// Id of the new subscriber
    pub subscriber_id: String,
    /// URL the subscriber uses to enrol
    #[serde(default)]
    pub enrol_url: Option<String>,
}

/// One page of `list_subscribers`
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Deserialize, Serialize)]
pub struct SubscriberList {
    /// Subscribers on this page, as returned by the API
    #[serde(default)]
    pub subscribers: Vec<Value>,
    /// Total number of subscribers matching the query
    #[serde(default)]
    pub count: Option<u64>,
    /// Hash identifying the query
    #[serde(default)]
    pub query_hash: Option<String>,
}

impl TryFrom<JsonMap> for CreatedSubscriber {
    type Error = AppError;

    fn try_from(map: JsonMap) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}

impl TryFrom<JsonMap> for SubscriberList {
    type Error = AppError;

    fn try_from(map: JsonMap) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}
