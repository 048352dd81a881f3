/// MSP API client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
