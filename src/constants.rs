/// Base URL of the Bitdefender MSP REST API
pub const BASE_URL: &str = "https://msp.bitdefender.com";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("bitdefender-msp-client/", env!("CARGO_PKG_VERSION"));
/// Prefix of the `Authorization` header value
pub const AUTH_SCHEME: &str = "ApiKey";
/// Default page requested by `list_subscribers`
pub const DEFAULT_PAGE: u32 = 1;
/// Default number of items per page requested by `list_subscribers`
pub const DEFAULT_LIMIT: u32 = 20;
/// Message used when a failed response carries no `message` field
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error";
/// Error code used when a failed response carries no `code` field
pub const DEFAULT_ERROR_CODE: i64 = 0;
/// Placeholder used when `MSP_API_KEY` is not configured
pub const DEFAULT_API_KEY: &str = "default_api_key";
