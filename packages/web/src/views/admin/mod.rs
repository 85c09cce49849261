//! Back-office views, role-gated on the cached session.
//!
//! The gate is cosmetic — every call still round-trips to the server, which
//! is authoritative and answers 401/403 when the session is not allowed.

mod bookings;
pub use bookings::AdminBookings;

mod locations;
pub use locations::AdminLocations;

mod rooms;
pub use rooms::AdminRooms;

mod users;
pub use users::AdminUsers;

use dioxus::prelude::*;
use ui::{use_auth, Navbar};

/// Chrome shared by the back-office tables: gate, tab strip, title.
#[component]
fn AdminLayout(title: String, children: Element) -> Element {
    let auth = use_auth();

    match auth().user {
        None => {
            ui::redirect_to("/login");
            rsx! {}
        }
        Some(user) if !user.is_admin() => {
            ui::redirect_to("/");
            rsx! {}
        }
        Some(_) => rsx! {
            Navbar {}
            main {
                class: "page",
                nav {
                    class: "admin-tabs",
                    a { class: "navbar-link", href: "/admin/users", "Users" }
                    a { class: "navbar-link", href: "/admin/locations", "Locations" }
                    a { class: "navbar-link", href: "/admin/rooms", "Rooms" }
                    a { class: "navbar-link", href: "/admin/bookings", "Bookings" }
                }
                h1 { "{title}" }
                {children}
            }
        },
    }
}
