//! HTTPS client for the hosted auth and data service.
//!
//! The service exposes a Supabase-compatible surface: `/auth/v1` for
//! sessions and `/rest/v1` for rows. Nothing about the provider's
//! internals is assumed beyond these endpoints.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

pub mod auth;
pub mod rest;

/// Default hosted endpoint; override with `TALLY_API_URL`.
const DEFAULT_BASE_URL: &str = "https://api.tally.finance";
/// Publishable key identifying this app; override with `TALLY_API_KEY`.
const DEFAULT_PUBLISHABLE_KEY: &str = "pk_tally_desktop_v1";

/// Where the hosted service lives and how the app identifies to it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub publishable_key: String,
}

impl ApiConfig {
    /// Built-in defaults with environment overrides.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("TALLY_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            publishable_key: std::env::var("TALLY_API_KEY")
                .unwrap_or_else(|_| DEFAULT_PUBLISHABLE_KEY.to_string()),
        }
    }
}

/// What can go wrong talking to the service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("wrong email or password")]
    InvalidCredentials,
    #[error("the session is no longer valid")]
    Unauthorized,
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response from the service ({status}): {body}")]
    Unexpected { status: StatusCode, body: String },
}

/// HTTP client with the service configuration baked in.
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("Tally/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to build the HTTP client");
        Self { http, config }
    }

    /// Process-wide client instance.
    pub fn shared() -> &'static Self {
        CLIENT.get_or_init(|| Self::new(ApiConfig::from_env()))
    }

    fn auth_url(&self, endpoint: &str) -> String {
        format!("{}/auth/v1/{endpoint}", self.config.base_url)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.config.base_url)
    }

    /// Error for a response no arm expected. The body is trimmed so a
    /// stray HTML error page cannot flood the log.
    async fn unexpected(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_default()
            .chars()
            .take(200)
            .collect();
        ApiError::Unexpected { status, body }
    }
}
