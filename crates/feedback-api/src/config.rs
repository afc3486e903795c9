use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BUCKET: &str = "alpha-feedback";

/// Origin of the web frontend's local dev server. Always allowed.
pub const LOCAL_FRONTEND_ORIGIN: &str = "http://localhost:4200";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("FEEDBACK_STORE must be \"s3\" or \"memory\", got {0:?}")]
    UnknownStore(String),

    #[error("FRONTEND_URL is not a valid origin header value: {0:?}")]
    InvalidOrigin(String),
}

/// Where feedback documents live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    S3 { bucket: String },
    Memory,
}

/// Server settings, read from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Origins allowed to call the API. The first entry is always
    /// [`LOCAL_FRONTEND_ORIGIN`].
    pub allowed_origins: Vec<HeaderValue>,
    pub store: StoreBackend,
    /// Running inside AWS Lambda; serve through the Lambda runtime instead of a socket.
    pub lambda: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let mut allowed_origins = vec![HeaderValue::from_static(LOCAL_FRONTEND_ORIGIN)];
        if let Some(frontend) = var("FRONTEND_URL") {
            let origin = HeaderValue::from_str(frontend.trim())
                .map_err(|_| ConfigError::InvalidOrigin(frontend.clone()))?;
            if !allowed_origins.contains(&origin) {
                allowed_origins.push(origin);
            }
        }

        let store = match var("FEEDBACK_STORE").as_deref().map(str::trim) {
            None | Some("s3") => StoreBackend::S3 {
                bucket: var("FEEDBACK_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => return Err(ConfigError::UnknownStore(other.to_string())),
        };

        Ok(Self {
            port,
            allowed_origins,
            store,
            lambda: var("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
