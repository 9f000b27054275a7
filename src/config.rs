use crate::auth::oauth::OAuthConfig;
use crate::errors::ServerError;
use std::env;

/// Everything read from the environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// Base URL of the hosted store, e.g. "https://xyz.supabase.co".
    pub store_url: String,
    /// Service key sent as `apikey` + bearer token on every store call.
    pub store_key: String,
    pub oauth: OAuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            store_url: require("STORE_URL")?,
            store_key: require("STORE_KEY")?,
            oauth: OAuthConfig {
                client_id: require("OAUTH_CLIENT_ID")?,
                client_secret: require("OAUTH_CLIENT_SECRET")?,
                redirect_uri: env::var("OAUTH_REDIRECT_URI")
                    .unwrap_or_else(|_| "http://127.0.0.1:3000/auth/callback".to_string()),
                ..OAuthConfig::default()
            },
        })
    }
}

fn require(name: &str) -> Result<String, ServerError> {
    env::var(name).map_err(|_| ServerError::BadRequest(format!("missing env var {name}")))
}
