//! Shell chrome around every signed-in page.

use crate::frontend::app::Route;
use crate::frontend::assets::ResourceLoader;
use crate::frontend::components::common::titlebar::TitleBar;
use crate::frontend::components::layout::Navigation;
use crate::frontend::services::session::Session;
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, use_route};

#[component]
pub fn MainLayout() -> Element {
    let mut session = use_context::<Session>();
    let route = use_route::<Route>();

    let account_name = session
        .account()
        .map(|a| a.short_name().to_string())
        .unwrap_or_default();

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::shell_css()
        }

        TitleBar {}

        div { class: "shell",
            header { class: "shell-header",
                div { class: "brand", "Tally" }
                div { class: "shell-header-right",
                    span { class: "account-name", "{account_name}" }
                    button {
                        class: "sign-out-btn",
                        onclick: move |_| {
                            spawn(async move {
                                // No navigation here: once the session is
                                // cleared the route guard takes over and
                                // moves the visit to the login page.
                                session.sign_out().await;
                            });
                        },
                        "Sign out"
                    }
                }
            }

            div { class: "shell-body",
                Navigation {}

                // Keyed by path so switching pages tears the old content
                // down and mounts the new page from scratch.
                main { key: "{route}", class: "content content-enter",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
