//! Landing page: location browser with search.

use api::{ApiClient, PageQuery};
use dioxus::prelude::*;
use ui::{ErrorBanner, Navbar, Pager};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let mut keyword = use_signal(String::new);
    let mut page_index = use_signal(|| 1u32);
    let nav = use_navigator();

    let locations = use_resource(move || async move {
        let query = PageQuery::new(page_index(), 8).with_keyword(keyword());
        ApiClient::from_env().get_locations(&query).await
    });

    let body = match &*locations.read() {
        Some(Ok(page)) => {
            let cards = page.items.clone().into_iter().map(|location| {
                let location_id = location.id;
                rsx! {
                    button {
                        key: "{location_id}",
                        class: "card location-card",
                        onclick: move |_| {
                            nav.push(Route::LocationRooms { location_id });
                        },
                        if let Some(image) = location.image.clone() {
                            img { class: "card-image", src: "{image}", alt: "{location.name}" }
                        }
                        div {
                            class: "card-body",
                            h3 { "{location.name}" }
                            p { class: "muted", "{location.province}, {location.country}" }
                        }
                    }
                }
            });
            let total_pages = page.total_pages;
            rsx! {
                div { class: "card-grid", {cards} }
                Pager {
                    page_index: page_index(),
                    total_pages: total_pages,
                    onchange: move |page| page_index.set(page),
                }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading destinations..." } },
    };

    rsx! {
        Navbar {}
        main {
            class: "page",
            section {
                class: "hero",
                h1 { "Find your next stay" }
                p { class: "muted", "Browse destinations and book a room in a few clicks." }
                input {
                    class: "input search-input",
                    placeholder: "Search destinations",
                    value: keyword(),
                    oninput: move |evt| {
                        keyword.set(evt.value());
                        page_index.set(1);
                    },
                }
            }
            {body}
        }
    }
}
