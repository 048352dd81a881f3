use crate::error::AppError;
use crate::model::responses::JsonMap;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `add_subscription`
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Deserialize, Serialize)]
pub struct CreatedSubscription {
    /// Id of the new subscription
    pub subscription_id: String,
}

impl TryFrom<JsonMap> for CreatedSubscription {
    type Error = AppError;

    fn try_from(map: JsonMap) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}
