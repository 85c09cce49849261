//! Top navigation bar shared by every page.

use dioxus::prelude::*;

use crate::auth::{use_auth, LogoutButton};

/// Brand link, catalogue links, and the session corner: profile link plus
/// back-office link for admins, sign-in/sign-up links otherwise.
#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let user = auth().user;

    rsx! {
        header {
            class: "navbar",
            a { class: "navbar-brand", href: "/", "StayHub" }
            nav {
                class: "navbar-links",
                a { class: "navbar-link", href: "/rooms", "Rooms" }
            }
            div {
                class: "navbar-session",
                if let Some(user) = user {
                    if user.is_admin() {
                        a { class: "navbar-link", href: "/admin/rooms", "Back office" }
                    }
                    a { class: "navbar-link", href: "/profile", "{user.name}" }
                    LogoutButton { class: "btn btn-secondary" }
                } else {
                    a { class: "navbar-link", href: "/login", "Sign in" }
                    a { class: "navbar-link", href: "/register", "Sign up" }
                }
            }
        }
    }
}
