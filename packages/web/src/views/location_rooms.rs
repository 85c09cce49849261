//! Rooms available at one location.

use api::ApiClient;
use dioxus::prelude::*;
use ui::{ErrorBanner, Navbar};

use super::rooms::room_card;

#[component]
pub fn LocationRooms(location_id: i64) -> Element {
    let nav = use_navigator();
    let location = use_resource(move || async move {
        ApiClient::from_env().get_location(location_id).await
    });
    let rooms = use_resource(move || async move {
        ApiClient::from_env().get_rooms_by_location(location_id).await
    });

    let title = match &*location.read() {
        Some(Ok(location)) => format!("Rooms in {}", location.name),
        _ => "Rooms".to_string(),
    };

    let body = match &*rooms.read() {
        Some(Ok(items)) => {
            if items.is_empty() {
                rsx! { p { class: "muted", "No rooms here yet." } }
            } else {
                let cards = items
                    .clone()
                    .into_iter()
                    .map(move |room| room_card(nav, room));
                rsx! { div { class: "card-grid", {cards} } }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading rooms..." } },
    };

    rsx! {
        Navbar {}
        main {
            class: "page",
            h1 { "{title}" }
            {body}
        }
    }
}
