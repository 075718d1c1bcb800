use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
    /// Single browser origin allowed to call the API with credentials.
    pub cors_allow_origin: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let cors_allow_origin = env_map
            .get("CORS_ALLOW_ORIGIN")
            .cloned()
            .unwrap_or_else(|| "http://localhost:5173".to_string());
        if cors_allow_origin.trim().is_empty()
            || cors_allow_origin.parse::<axum::http::HeaderValue>().is_err()
        {
            return Err(ConfigError::InvalidValue(
                "CORS_ALLOW_ORIGIN".to_string(),
                "must be a valid origin header value".to_string(),
            ));
        }

        Ok(Config {
            port,
            database_path,
            cors_allow_origin,
        })
    }
}
