/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LIMIT, DEFAULT_PAGE};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Query parameters as ordered name/value pairs
pub type Query = Vec<(String, String)>;

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|v| !v.is_empty())
}

/// Parameters for listing subscribers
///
/// Known filters include `product_id`, `state` and `subscription_state`, but any
/// name is passed through as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSubscribersRequest {
    /// Page number (default: 1)
    pub page: u32,
    /// Items per page (default: 20)
    pub limit: u32,
    /// Extra filters, in insertion order
    pub filters: Vec<(String, String)>,
}

impl Default for ListSubscribersRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            filters: Vec::new(),
        }
    }
}

impl ListSubscribersRequest {
    /// Creates parameters for the first page with the default limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Add a filter
    pub fn with_filter(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((name.into(), value.to_string()));
        self
    }

    /// Builds the query string parameters
    ///
    /// `page` and `limit` come first. A filter sharing their name replaces
    /// their value; a repeated filter name keeps the last value.
    pub fn to_query(&self) -> Query {
        let mut query: Query = vec![
            ("page".to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
        ];

        for (name, value) in &self.filters {
            match query.iter_mut().find(|(existing, _)| existing == name) {
                Some(entry) => entry.1 = value.clone(),
                None => query.push((name.clone(), value.clone())),
            }
        }
        query
    }
}

/// Body for creating a subscriber
///
/// Empty values are never sent. At least one field must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct CreateSubscriberRequest {
    /// Subscriber's email address
    #[serde(skip_serializing_if = "is_blank")]
    pub email: Option<String>,
    /// Subscriber's phone number
    #[serde(skip_serializing_if = "is_blank")]
    pub phone: Option<String>,
    /// Subscriber's username
    #[serde(skip_serializing_if = "is_blank")]
    pub username: Option<String>,
    /// External identifier for the subscriber
    #[serde(skip_serializing_if = "is_blank")]
    pub external_subscriber_id: Option<String>,
    /// Language code (e.g. en_US)
    #[serde(skip_serializing_if = "is_blank")]
    pub lang: Option<String>,
}

impl CreateSubscriberRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_empty(email);
        self
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_empty(phone);
        self
    }

    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = non_empty(username);
        self
    }

    /// Set the external subscriber id
    pub fn with_external_subscriber_id(mut self, id: impl Into<String>) -> Self {
        self.external_subscriber_id = non_empty(id);
        self
    }

    /// Set the language code
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = non_empty(lang);
        self
    }

    /// Returns true when no field would be sent
    pub fn is_empty(&self) -> bool {
        [
            &self.email,
            &self.phone,
            &self.username,
            &self.external_subscriber_id,
            &self.lang,
        ]
        .into_iter()
        .all(is_blank)
    }
}

/// Body for adding a subscription to a subscriber
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct AddSubscriptionRequest {
    /// Product to subscribe to
    pub product_id: String,
    /// Trial subscription; only sent when true
    #[serde(default, skip_serializing_if = "is_false")]
    pub trial: bool,
    /// External identifier for the subscription
    #[serde(default, skip_serializing_if = "is_blank")]
    pub external_subscription_id: Option<String>,
    /// Reservation id linking the subscription to a pre-allocated license slot
    #[serde(default, skip_serializing_if = "is_blank")]
    pub reservation_id: Option<String>,
}

impl AddSubscriptionRequest {
    /// Create a regular (non-trial) subscription request for a product
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            trial: false,
            external_subscription_id: None,
            reservation_id: None,
        }
    }

    /// Mark the subscription as a trial
    pub fn with_trial(mut self, trial: bool) -> Self {
        self.trial = trial;
        self
    }

    /// Set the external subscription id
    pub fn with_external_subscription_id(mut self, id: impl Into<String>) -> Self {
        self.external_subscription_id = non_empty(id);
        self
    }

    /// Set the reservation id
    pub fn with_reservation_id(mut self, id: impl Into<String>) -> Self {
        self.reservation_id = non_empty(id);
        self
    }
}

/// Body for suspending or resuming subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct SuspendRequest {
    /// True to suspend, false to resume
    pub suspended: bool,
}

/// Body for turning a managed subscriber into a regular Bitdefender account
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct UnmanageRequest {
    /// Always true
    pub unmanage: bool,
}

impl Default for UnmanageRequest {
    fn default() -> Self {
        Self { unmanage: true }
    }
}

/// Target of a trial conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConvertTarget {
    /// Convert to a different product
    Product(String),
    /// Convert keeping the trial's product (always `true` on the wire)
    SameProduct(bool),
}

/// Body for converting a trial subscription to a paid one
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct ConvertTrialRequest {
    /// Conversion target
    pub convert: ConvertTarget,
}

impl ConvertTrialRequest {
    /// Builds the body; an absent or empty product id keeps the trial's product
    pub fn new(product_id: Option<&str>) -> Self {
        let convert = match product_id {
            Some(id) if !id.is_empty() => ConvertTarget::Product(id.to_string()),
            _ => ConvertTarget::SameProduct(true),
        };
        Self { convert }
    }
}

/// Body for replacing a subscription with one for another product
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct ReplaceSubscriptionRequest {
    /// New product id
    pub product_id: String,
}
