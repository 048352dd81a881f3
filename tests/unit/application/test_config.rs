use bitdefender_msp::application::config::{Config, Credentials, RestApiConfig};
use bitdefender_msp::constants::BASE_URL;

#[test]
fn test_credentials_serialization() {
    let creds = Credentials {
        api_key: "key123".to_string(),
    };

    let json = serde_json::to_string(&creds).unwrap();
    let deserialized: Credentials = serde_json::from_str(&json).unwrap();

    assert_eq!(creds, deserialized);
}

#[test]
fn test_rest_api_config_default() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, "https://msp.bitdefender.com");
    assert_eq!(rest.timeout, None);
}

#[test]
fn test_config_with_api_key() {
    let config = Config::with_api_key("52636a13-bdc2-4936-9488-9931ed49c8b5");

    assert_eq!(
        config.credentials.api_key,
        "52636a13-bdc2-4936-9488-9931ed49c8b5"
    );
    assert_eq!(config.rest_api.base_url, BASE_URL);
    assert_eq!(config.rest_api.timeout, None);
}

#[test]
fn test_config_builders() {
    let config = Config::with_api_key("key")
        .with_base_url("http://localhost:8080")
        .with_timeout(15);

    assert_eq!(config.rest_api.base_url, "http://localhost:8080");
    assert_eq!(config.rest_api.timeout, Some(15));
}

#[test]
fn test_config_display_is_json() {
    let config = Config::with_api_key("key");
    let display = config.to_string();
    let value: serde_json::Value = serde_json::from_str(&display).unwrap();
    assert_eq!(value["rest_api"]["base_url"], BASE_URL);
}
