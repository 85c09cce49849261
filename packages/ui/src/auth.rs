//! Authentication context and hooks for the UI.

use api::{ApiClient, SessionUser};
use dioxus::prelude::*;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that seeds authentication state from the session
/// store. Wrap the app with this component to enable `use_auth`.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(|| AuthState {
        user: ApiClient::from_env().current_user(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = String::new())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        ApiClient::from_env().logout();
        auth_state.set(AuthState { user: None });
        redirect_to("/login");
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}

/// Navigate via the browser so the whole app state resets.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("redirect to {path}");
    }
}

/// Send the user to the login view when a call came back 401/403.
/// Returns whether the error was handled here.
pub fn handle_unauthorized(err: &api::ApiError) -> bool {
    if err.requires_login() {
        redirect_to("/login");
        return true;
    }
    false
}
