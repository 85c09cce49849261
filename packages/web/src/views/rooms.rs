//! Paged room catalogue with keyword search.

use api::{ApiClient, PageQuery, Room};
use dioxus::prelude::*;
use ui::{ErrorBanner, Navbar, Pager};

use crate::Route;

pub(crate) fn room_card(nav: Navigator, room: Room) -> Element {
    let room_id = room.id;
    rsx! {
        button {
            key: "{room_id}",
            class: "card room-card",
            onclick: move |_| {
                nav.push(Route::RoomDetail { room_id });
            },
            if let Some(image) = room.image.clone() {
                img { class: "card-image", src: "{image}", alt: "{room.name}" }
            }
            div {
                class: "card-body",
                h3 { "{room.name}" }
                p { class: "muted",
                    "{room.guests} guests · {room.bedrooms} bedrooms · {room.bathrooms} baths"
                }
                p { class: "price", "${room.price} / night" }
            }
        }
    }
}

#[component]
pub fn Rooms() -> Element {
    let mut keyword = use_signal(String::new);
    let mut page_index = use_signal(|| 1u32);
    let nav = use_navigator();

    let rooms = use_resource(move || async move {
        let query = PageQuery::new(page_index(), 12).with_keyword(keyword());
        ApiClient::from_env().get_rooms(&query).await
    });

    let body = match &*rooms.read() {
        Some(Ok(page)) => {
            let cards = page
                .items
                .clone()
                .into_iter()
                .map(move |room| room_card(nav, room));
            let total_pages = page.total_pages;
            rsx! {
                p { class: "muted", "{page.total_row} rooms" }
                div { class: "card-grid", {cards} }
                Pager {
                    page_index: page_index(),
                    total_pages: total_pages,
                    onchange: move |page| page_index.set(page),
                }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading rooms..." } },
    };

    rsx! {
        Navbar {}
        main {
            class: "page",
            h1 { "All rooms" }
            input {
                class: "input search-input",
                placeholder: "Search rooms",
                value: keyword(),
                oninput: move |evt| {
                    keyword.set(evt.value());
                    page_index.set(1);
                },
            }
            {body}
        }
    }
}
