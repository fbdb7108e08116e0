//! On-disk session cache and the synchronous credential hint.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::backend::api::auth::AuthSession;
use crate::backend::models::Account;
use crate::backend::session::token;
use crate::backend::utils::paths::get_app_dir;

/// Cache file written on sign-in and refresh.
const SESSION_FILE: &str = "session.json";
/// Token file older releases wrote; it still counts for the hint and is
/// removed whenever the cache clears.
const LEGACY_TOKEN_FILE: &str = "auth_token.json";

/// Refresh slightly early so a token about to lapse never fails its
/// first use.
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// The signed-in session as persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub account: Account,
}

impl CachedSession {
    /// Whether the access token needs a refresh before use.
    pub fn is_expired(&self, now: i64) -> bool {
        match self.expires_at {
            Some(exp) => exp <= now + EXPIRY_LEEWAY_SECS,
            None => token::is_expired(&self.access_token, now + EXPIRY_LEEWAY_SECS),
        }
    }

    /// Loads the cached session, if a readable one exists.
    pub(crate) async fn load_from(dir: &Path) -> Option<Self> {
        match fs::read_to_string(dir.join(SESSION_FILE)).await {
            Ok(json) => serde_json::from_str(&json).ok(),
            Err(_) => None,
        }
    }

    /// Saves the session to the cache file.
    pub async fn save(&self) -> Result<()> {
        let dir = get_app_dir()?;
        self.save_to(&dir).await
    }

    pub(crate) async fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).await?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(SESSION_FILE), json).await?;
        Ok(())
    }
}

impl From<AuthSession> for CachedSession {
    fn from(session: AuthSession) -> Self {
        let expires_at = session
            .expires_at
            .or_else(|| token::expiry(&session.access_token));
        Self {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_at,
            account: session.user.into(),
        }
    }
}

/// Removes the cache file and the legacy marker.
pub async fn clear() -> Result<()> {
    let dir = get_app_dir()?;
    clear_in(&dir).await
}

pub(crate) async fn clear_in(dir: &Path) -> Result<()> {
    for name in [SESSION_FILE, LEGACY_TOKEN_FILE] {
        let path = dir.join(name);
        if path.exists() {
            fs::remove_file(path).await?;
        }
    }
    Ok(())
}

/// Synchronous, best-effort check for a locally cached credential
/// marker, usable before the async bootstrap resolves.
///
/// True when either the current cache file or the legacy token file is
/// present and non-empty. Never authoritative: a stale file is a false
/// positive, and any read error reads as `false`.
pub fn cached_credentials_present() -> bool {
    get_app_dir()
        .map(|dir| cached_credentials_present_in(&dir))
        .unwrap_or(false)
}

pub(crate) fn cached_credentials_present_in(dir: &Path) -> bool {
    marker_present(&dir.join(SESSION_FILE)) || marker_present(&dir.join(LEGACY_TOKEN_FILE))
}

fn marker_present(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.len() > 0)
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
