//! Login page with email/password form.

use api::{ApiClient, Credentials};
use dioxus::prelude::*;
use ui::{use_auth, AuthState, Button, ErrorBanner, Input};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home.
    if auth().user.is_some() {
        ui::redirect_to("/");
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            match ApiClient::from_env().sign_in(&credentials).await {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user.to_session()),
                    });
                    ui::redirect_to("/");
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "StayHub" }
            p { class: "muted", "Sign in to book rooms and leave reviews." }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(message) = error() {
                    ErrorBanner { message: message }
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "muted",
                "No account yet? "
                a { href: "/register", "Sign up" }
            }
        }
    }
}
