//! Session endpoints of the hosted service.

use reqwest::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use super::{ApiClient, ApiError};
use crate::backend::models::Account;

/// A live session as the token endpoint hands it out.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp; current deployments send it, older ones may not.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: RemoteUser,
}

/// Account payload as the service shapes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl From<RemoteUser> for Account {
    fn from(user: RemoteUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            display_name: user.user_metadata.display_name,
        }
    }
}

impl ApiClient {
    /// Exchanges credentials for a session.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, ApiError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.publishable_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => {
                Err(ApiError::InvalidCredentials)
            }
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Trades a refresh token for a fresh session.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, ApiError> {
        let response = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "refresh_token")])
            .header("apikey", &self.config.publishable_key)
            .json(&serde_json::json!({ "refresh_token": refresh_token }))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Validates an access token by fetching the account behind it.
    pub async fn fetch_account(&self, access_token: &str) -> Result<Account, ApiError> {
        let response = self
            .http
            .get(self.auth_url("user"))
            .header("apikey", &self.config.publishable_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let user: RemoteUser = response.json().await?;
                Ok(user.into())
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized),
            _ => Err(Self::unexpected(response).await),
        }
    }

    /// Revokes the session server-side. A token the service no longer
    /// recognizes is already signed out, not an error.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.auth_url("logout"))
            .header("apikey", &self.config.publishable_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::UNAUTHORIZED {
            return Ok(());
        }
        Err(Self::unexpected(response).await)
    }
}
