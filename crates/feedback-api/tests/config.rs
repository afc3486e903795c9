use std::collections::HashMap;

use feedback_api::config::{
    ConfigError, ServerConfig, StoreBackend, DEFAULT_BUCKET, DEFAULT_PORT, LOCAL_FRONTEND_ORIGIN,
};

fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = config(&[]).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.allowed_origins, vec![LOCAL_FRONTEND_ORIGIN]);
    assert_eq!(
        config.store,
        StoreBackend::S3 {
            bucket: DEFAULT_BUCKET.to_string()
        }
    );
    assert!(!config.lambda);
}

#[test]
fn frontend_url_is_added_to_the_allow_list() {
    let config = config(&[("FRONTEND_URL", "https://feedback.example.com")]).unwrap();
    assert_eq!(
        config.allowed_origins,
        vec![LOCAL_FRONTEND_ORIGIN, "https://feedback.example.com"]
    );
}

#[test]
fn empty_frontend_url_counts_as_unset() {
    let config = config(&[("FRONTEND_URL", "  ")]).unwrap();
    assert_eq!(config.allowed_origins, vec![LOCAL_FRONTEND_ORIGIN]);
}

#[test]
fn frontend_url_equal_to_local_origin_is_not_duplicated() {
    let config = config(&[("FRONTEND_URL", LOCAL_FRONTEND_ORIGIN)]).unwrap();
    assert_eq!(config.allowed_origins.len(), 1);
}

#[test]
fn port_is_parsed() {
    assert_eq!(config(&[("PORT", "8080")]).unwrap().port, 8080);
    assert_eq!(
        config(&[("PORT", "http")]).unwrap_err(),
        ConfigError::InvalidPort("http".to_string())
    );
    assert!(config(&[("PORT", "70000")]).is_err());
}

#[test]
fn store_backend_selection() {
    let s3 = config(&[("FEEDBACK_STORE", "s3"), ("FEEDBACK_BUCKET", "my-bucket")]).unwrap();
    assert_eq!(
        s3.store,
        StoreBackend::S3 {
            bucket: "my-bucket".to_string()
        }
    );

    let memory = config(&[("FEEDBACK_STORE", "memory")]).unwrap();
    assert_eq!(memory.store, StoreBackend::Memory);

    assert_eq!(
        config(&[("FEEDBACK_STORE", "mongo")]).unwrap_err(),
        ConfigError::UnknownStore("mongo".to_string())
    );
}

#[test]
fn lambda_runtime_is_detected() {
    let config = config(&[("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001")]).unwrap();
    assert!(config.lambda);
}
