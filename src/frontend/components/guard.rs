//! Route guards wrapping the protected and public branches of the router.

use crate::backend::session::cache;
use crate::frontend::app::Route;
use crate::frontend::components::common::LoadingPane;
use crate::frontend::services::gate::{self, Access};
use crate::frontend::services::session::Session;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};

/// Wraps every signed-in page. Renders a placeholder while the session
/// store is still resolving, sends anonymous visitors to the login page
/// and remembers where they were headed.
#[component]
pub fn RequireSession() -> Element {
    let nav = navigator();
    let mut session = use_context::<Session>();
    let route = use_route::<Route>();

    match gate::evaluate(&session.snapshot(), &route.to_string()) {
        Access::Checking => rsx! { LoadingPane {} },
        Access::Denied { origin } => {
            session.remember_return_to(origin);
            // Replace, not push: back must not land on the gate again.
            nav.replace(gate::LOGIN_PATH);
            rsx! { LoadingPane {} }
        }
        Access::Granted => rsx! { Outlet::<Route> {} },
    }
}

/// Wraps the login page. A visitor who still has credentials on disk is
/// bounced straight into the app without waiting for the session store,
/// resuming at the page a guard recorded earlier if there is one.
#[component]
pub fn PublicOnly() -> Element {
    let nav = navigator();
    let mut session = use_context::<Session>();

    let hint = cache::cached_credentials_present();
    // Only consume the stored origin when we actually leave; a visitor
    // who stays on the login page still needs it after signing in.
    let return_to = if hint { session.take_return_to() } else { None };

    match gate::public_target(hint, return_to) {
        Some(target) => {
            nav.replace(target.as_str());
            rsx! { LoadingPane {} }
        }
        None => rsx! { Outlet::<Route> {} },
    }
}
