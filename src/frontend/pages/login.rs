//! Sign-in page.

use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::gate;
use crate::frontend::services::session::Session;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::navigator;

const PASSWORD_RESET_URL: &str = "https://tally.finance/reset-password";

#[component]
pub fn Login() -> Element {
    let nav = navigator();
    let mut session = use_context::<Session>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let mut begin_submit = move || {
        if busy() {
            return;
        }
        let address = email.read().trim().to_string();
        let secret = password.read().clone();
        if address.is_empty() || secret.is_empty() {
            error.set("Enter your email and password.".to_string());
            return;
        }

        busy.set(true);
        error.set(String::new());

        spawn(async move {
            match session.sign_in(&address, &secret).await {
                Ok(()) => {
                    let target = session
                        .take_return_to()
                        .unwrap_or_else(|| gate::LANDING_PATH.to_string());
                    // Replace so back does not return to the login form.
                    nav.replace(target.as_str());
                }
                Err(message) => {
                    error.set(message);
                    busy.set(false);
                }
            }
        });
    };

    let on_keypress = move |e: KeyboardEvent| {
        if e.key() == Key::Enter {
            begin_submit();
        }
    };

    rsx! {
        AuthLayout {
            div { class: "login-card",
                h1 { class: "login-title", "Tally" }
                p { class: "login-subtitle", "Sign in to keep your budget on track." }

                input {
                    class: "login-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email()}",
                    autofocus: true,
                    oninput: move |e| {
                        email.set(e.value());
                        error.set(String::new());
                    }
                }
                input {
                    class: "login-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password()}",
                    oninput: move |e| {
                        password.set(e.value());
                        error.set(String::new());
                    },
                    onkeypress: on_keypress
                }

                div {
                    class: if error().is_empty() { "login-error error-hidden" } else { "login-error error-visible" },
                    "{error()}"
                }

                button {
                    class: "login-submit",
                    disabled: busy(),
                    onclick: move |_| begin_submit(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }

                button {
                    class: "login-reset-link",
                    onclick: move |_| {
                        spawn(async move {
                            if let Err(e) = webbrowser::open(PASSWORD_RESET_URL) {
                                log::error!("Failed to open browser: {e}");
                            }
                        });
                    },
                    "Forgot your password?"
                }
            }
        }
    }
}
