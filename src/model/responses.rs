use serde_json::{Map, Value};
use tracing::debug;

/// JSON object returned by every endpoint
pub type JsonMap = Map<String, Value>;

/// Parses a response body into a JSON object
///
/// Bodies that are empty, not valid JSON, or valid JSON but not an object are
/// treated as an empty map.
///
/// # Arguments
/// * `body` - Raw response body
///
/// # Returns
/// The parsed object, or an empty map
pub fn parse_json_body(body: &str) -> JsonMap {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            debug!("Response body is not a JSON object: {}", other);
            JsonMap::new()
        }
        Err(e) => {
            if !body.is_empty() {
                debug!("Response body is not valid JSON: {}", e);
            }
            JsonMap::new()
        }
    }
}
