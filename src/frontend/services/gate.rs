//! Pure access decisions for the route guards.
//!
//! Both decisions are total over their inputs and free of side effects,
//! so they test without a navigation environment; the guard components
//! adapt them to the router.

use super::session::SessionState;

/// Path of the login entry point.
pub const LOGIN_PATH: &str = "/login";
/// Canonical landing path for visitors with nowhere better to go.
pub const LANDING_PATH: &str = "/";

/// Outcome of gating one navigation to a protected path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The session is still resolving: show a neutral placeholder and
    /// decide nothing.
    Checking,
    /// Resolved and anonymous: redirect to login, keeping the origin so
    /// the visit can resume after sign-in.
    Denied { origin: String },
    /// Resolved and signed in: render the protected content.
    Granted,
}

/// Gate a protected path on the session truth. Loading dominates: no
/// decision is final until the store resolves.
pub fn evaluate(state: &SessionState, path: &str) -> Access {
    if state.is_loading {
        return Access::Checking;
    }
    if state.is_authenticated {
        Access::Granted
    } else {
        Access::Denied {
            origin: path.to_string(),
        }
    }
}

/// Where a public-only page sends an apparently signed-in visitor: the
/// stored return-to intent, the landing path failing that, nowhere when
/// the hint is negative.
pub fn public_target(hint: bool, return_to: Option<String>) -> Option<String> {
    if !hint {
        return None;
    }
    Some(return_to.unwrap_or_else(|| LANDING_PATH.to_string()))
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
