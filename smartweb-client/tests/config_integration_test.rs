//! Integration tests for configuration loading.

use smartweb_client::{
    SmartwebError,
    config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_NAMESPACE, HttpVersion},
};

#[test]
fn test_full_configuration() {
    let toml = r#"
        endpoint = "https://api.example-shop.dk/service.php"
        namespace = "http://api.example-shop.dk/"

        [credentials]
        username = "shop-api"
        password = "secret"

        [http]
        timeout_secs = 90
        connect_timeout_secs = 5
        pool_max_idle_per_host = 2
        http_version = "http1"
    "#;

    let config = ClientConfig::from_toml(toml).expect("should parse valid TOML");

    assert_eq!(config.endpoint, "https://api.example-shop.dk/service.php");
    assert_eq!(config.namespace, "http://api.example-shop.dk/");
    assert_eq!(config.credentials.username, "shop-api");
    assert_eq!(config.http.timeout().as_secs(), 90);
    assert_eq!(config.http.connect_timeout().as_secs(), 5);
    assert_eq!(config.http.pool_max_idle_per_host, 2);
    assert_eq!(config.http.http_version, HttpVersion::Http1);
}

#[test]
fn test_minimal_configuration_uses_defaults() {
    let toml = r#"
        [credentials]
        username = "shop-api"
        password = "secret"
    "#;

    let config = ClientConfig::from_toml(toml).expect("should parse minimal TOML");

    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.http.connect_timeout_secs, 10);
    assert_eq!(config.http.http_version, HttpVersion::Auto);
}

#[test]
fn test_credentials_are_required() {
    let result = ClientConfig::from_toml(r#"endpoint = "https://api.hostedshop.dk/service.php""#);
    assert!(matches!(result, Err(SmartwebError::ConfigError(_))));
}

#[test]
fn test_plain_http_endpoint_rejected() {
    let toml = r#"
        endpoint = "http://api.hostedshop.dk/service.php"

        [credentials]
        username = "shop-api"
    "#;

    let Err(SmartwebError::ConfigError(message)) = ClientConfig::from_toml(toml) else {
        panic!("expected ConfigError");
    };
    assert!(message.contains("HTTPS"));
}

#[test]
fn test_timeout_bounds() {
    let toml = r#"
        [credentials]
        username = "shop-api"

        [http]
        timeout_secs = 0
    "#;
    assert!(ClientConfig::from_toml(toml).is_err());
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("smartweb-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[credentials]\nusername = \"file-user\"\npassword = \"pw\"\n")
        .expect("should write temp config");

    let config = ClientConfig::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert_eq!(config.expect("should load config file").credentials.username, "file-user");
}

#[test]
fn test_from_missing_file() {
    let result = ClientConfig::from_file("/nonexistent/smartweb.toml");
    assert!(matches!(result, Err(SmartwebError::ConfigError(_))));
}

#[test]
fn test_credentials_debug_redacts_password() {
    let toml = r#"
        [credentials]
        username = "shop-api"
        password = "hunter2"
    "#;
    let config = ClientConfig::from_toml(toml).expect("should parse");

    let debug = format!("{config:?}");
    assert!(debug.contains("shop-api"));
    assert!(!debug.contains("hunter2"));
}
