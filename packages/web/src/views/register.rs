//! Registration page with the account form.

use api::{ApiClient, NewUser, Role};
use dioxus::prelude::*;
use ui::{use_auth, Button, ErrorBanner, Input, Select};

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut birthday = use_signal(String::new);
    let mut gender = use_signal(|| "female".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go home.
    if auth().user.is_some() {
        ui::redirect_to("/");
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if password() != confirm_password() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }

            let new_user = NewUser {
                name: name().trim().to_string(),
                email: email().trim().to_string(),
                password: password(),
                phone: phone().trim().to_string(),
                birthday: {
                    let birthday = birthday();
                    (!birthday.is_empty()).then_some(birthday)
                },
                gender: gender() == "male",
                role: Role::User,
            };

            loading.set(true);
            match ApiClient::from_env().sign_up(&new_user).await {
                Ok(_) => {
                    ui::redirect_to("/login");
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
            h1 { "Create account" }
            p { class: "muted", "Sign up for StayHub" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(message) = error() {
                    ErrorBanner { message: message }
                }

                Input {
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
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

                Input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                Input {
                    r#type: "tel",
                    placeholder: "Phone (0xxxxxxxxx)",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }

                Input {
                    r#type: "date",
                    placeholder: "Birthday",
                    value: birthday(),
                    oninput: move |evt: FormEvent| birthday.set(evt.value()),
                }

                Select {
                    value: gender(),
                    onchange: move |evt: FormEvent| gender.set(evt.value()),
                    option { value: "female", "Female" }
                    option { value: "male", "Male" }
                }

                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                a { href: "/login", "Sign in" }
            }
        }
    }
}
