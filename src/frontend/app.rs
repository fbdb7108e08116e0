//! Application routing and root component.

use crate::backend::session::cache::CachedSession;
use crate::frontend::assets::ResourceLoader;
use crate::frontend::components::guard::{PublicOnly, RequireSession};
use crate::frontend::components::layout::MainLayout;
use crate::frontend::pages::budgets::Budgets;
use crate::frontend::pages::calendar::Calendar;
use crate::frontend::pages::dashboard::Dashboard;
use crate::frontend::pages::login::Login;
use crate::frontend::pages::transactions::Transactions;
use crate::frontend::services::session::Session;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
pub enum Route {
    /// Sign-in page, skipped when credentials are still on disk.
    #[layout(PublicOnly)]
    #[route("/login")]
    Login {},

    /// Landing dashboard. Everything from here on requires a resolved,
    /// signed-in session.
    #[end_layout]
    #[layout(RequireSession)]
    #[layout(MainLayout)]
    #[route("/")]
    Dashboard {},
    /// Monthly transaction list and entry form.
    #[route("/transactions")]
    Transactions {},
    /// Budget overview per category.
    #[route("/budgets")]
    Budgets {},
    /// Month grid with daily totals.
    #[route("/calendar")]
    Calendar {},
}

#[component]
pub fn App() -> Element {
    let current = use_signal(|| None::<CachedSession>);
    let is_loading = use_signal(|| true);
    let return_to = use_signal(|| None::<String>);

    let mut session = Session::new(current, is_loading, return_to);
    provide_context(session);

    // The store resolves cached credentials exactly once at startup;
    // until it finishes, guards render their placeholder.
    use_future(move || async move {
        session.bootstrap().await;
    });

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::base_css()
        }

        Router::<Route> {}
    }
}
