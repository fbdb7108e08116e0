//! Process-wide session state.
//!
//! One writer of authentication truth: guards and pages read it through
//! the context handle, only the store's own methods mutate it.

use std::path::Path;

use dioxus::prelude::*;

use crate::backend::api::{ApiClient, ApiError};
use crate::backend::models::Account;
use crate::backend::session::cache::{self, CachedSession};
use crate::backend::utils::paths::get_app_dir;

/// Pure snapshot of the authentication truth, consumed by the gate
/// decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Context handle for the session store, provided at the app root.
#[derive(Clone, Copy)]
pub struct Session {
    current: Signal<Option<CachedSession>>,
    is_loading: Signal<bool>,
    return_to: Signal<Option<String>>,
}

impl Session {
    pub fn new(
        current: Signal<Option<CachedSession>>,
        is_loading: Signal<bool>,
        return_to: Signal<Option<String>>,
    ) -> Self {
        Self {
            current,
            is_loading,
            return_to,
        }
    }

    /// Reactive snapshot for the gate decisions.
    pub fn snapshot(&self) -> SessionState {
        SessionState {
            is_authenticated: self.current.read().is_some(),
            is_loading: (self.is_loading)(),
        }
    }

    pub fn account(&self) -> Option<Account> {
        self.current.read().as_ref().map(|s| s.account.clone())
    }

    pub fn access_token(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.access_token.clone())
    }

    /// Stores the origin path a denied navigation wanted to reach.
    pub fn remember_return_to(&mut self, path: String) {
        self.return_to.set(Some(path));
    }

    /// Consumes the stored origin path. One-shot: a second take is `None`.
    pub fn take_return_to(&mut self) -> Option<String> {
        self.return_to.take()
    }

    /// Startup resolution: read the cached credentials, validate or
    /// refresh them against the service, publish the terminal state.
    /// Every path out of here ends with `is_loading = false`.
    pub async fn bootstrap(&mut self) {
        let resolved = resolve_cached(ApiClient::shared()).await;
        self.current.set(resolved);
        self.is_loading.set(false);
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<(), String> {
        match ApiClient::shared()
            .sign_in_with_password(email, password)
            .await
        {
            Ok(session) => {
                let cached = CachedSession::from(session);
                if let Err(e) = cached.save().await {
                    log::warn!("Could not persist the session cache: {e}");
                }
                self.current.set(Some(cached));
                Ok(())
            }
            Err(ApiError::InvalidCredentials) => Err("Wrong email or password.".to_string()),
            Err(e) => {
                log::warn!("Sign-in failed: {e}");
                Err("Could not reach the service. Try again.".to_string())
            }
        }
    }

    /// Best-effort remote revoke; the local cache and the account always
    /// clear, whatever the service answers.
    pub async fn sign_out(&mut self) {
        if let Some(token) = self.access_token() {
            if let Err(e) = ApiClient::shared().sign_out(&token).await {
                log::warn!("Remote sign-out failed: {e}");
            }
        }
        evict_cache().await;
        self.current.set(None);
    }
}

/// Resolve the cached credentials to a live session, or evict them.
async fn resolve_cached(api: &ApiClient) -> Option<CachedSession> {
    let cached = load_or_evict().await?;
    let now = chrono::Utc::now().timestamp();

    if cached.is_expired(now) {
        log::info!("Cached session expired, refreshing");
        return refresh_or_evict(api, &cached).await;
    }

    match api.fetch_account(&cached.access_token).await {
        Ok(account) => Some(CachedSession { account, ..cached }),
        Err(ApiError::Unauthorized) => refresh_or_evict(api, &cached).await,
        Err(e) => {
            log::warn!("Could not validate the cached session: {e}");
            evict_cache().await;
            None
        }
    }
}

/// Reads the cached session, clearing every marker when no readable one
/// exists. A legacy-format or corrupt file still counts for the sync
/// hint, so leaving it behind would bounce the login page back into the
/// app without end.
async fn load_or_evict() -> Option<CachedSession> {
    let dir = get_app_dir().ok()?;
    load_or_evict_in(&dir).await
}

async fn load_or_evict_in(dir: &Path) -> Option<CachedSession> {
    let loaded = CachedSession::load_from(dir).await;
    if loaded.is_none() {
        if let Err(e) = cache::clear_in(dir).await {
            log::warn!("Could not clear the session cache: {e}");
        }
    }
    loaded
}

async fn refresh_or_evict(api: &ApiClient, cached: &CachedSession) -> Option<CachedSession> {
    match api.refresh_session(&cached.refresh_token).await {
        Ok(session) => {
            let fresh = CachedSession::from(session);
            if let Err(e) = fresh.save().await {
                log::warn!("Could not persist the refreshed session: {e}");
            }
            Some(fresh)
        }
        Err(e) => {
            log::warn!("Session refresh failed: {e}");
            evict_cache().await;
            None
        }
    }
}

/// A failed resolution must also remove the on-disk marker; a survivor
/// would keep the sync hint bouncing the login page back into the app.
async fn evict_cache() {
    if let Err(e) = cache::clear().await {
        log::warn!("Could not clear the session cache: {e}");
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
