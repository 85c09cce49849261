//! This crate contains all shared UI for the workspace.

pub mod components;
pub use components::{Button, ButtonVariant, ErrorBanner, Field, Input, Select, TextArea};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{handle_unauthorized, redirect_to, use_auth, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod pagination;
pub use pagination::Pager;

mod rating;
pub use rating::{StarPicker, StarRating};
