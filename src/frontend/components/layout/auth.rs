use crate::frontend::assets::ResourceLoader;
use crate::frontend::components::common::titlebar::TitleBar;
use dioxus::prelude::*;

#[component]
pub fn AuthLayout(children: Element) -> Element {
    let mut visible = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            visible.set(true);
        });
    });

    rsx! {
        style {
            dangerous_inner_html: ResourceLoader::auth_css()
        }

        TitleBar {}

        div {
            class: if visible() { "login-backdrop fade-in" } else { "login-backdrop fade-out" },
            {children}
        }
    }
}
