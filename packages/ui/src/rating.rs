//! Star rating display and picker.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

const STAR_ON: &str = "#f59e0b";
const STAR_OFF: &str = "#d4d4d4";

/// Read-only star row for a stored rating.
#[component]
pub fn StarRating(stars: u8) -> Element {
    rsx! {
        span {
            class: "stars",
            for i in 1..=5u8 {
                Icon {
                    icon: FaStar,
                    width: 14,
                    height: 14,
                    fill: if i <= stars { STAR_ON } else { STAR_OFF },
                }
            }
        }
    }
}

/// Clickable star input for the comment form.
#[component]
pub fn StarPicker(value: u8, onchange: EventHandler<u8>) -> Element {
    rsx! {
        span {
            class: "stars stars-input",
            for i in 1..=5u8 {
                button {
                    r#type: "button",
                    class: "star-btn",
                    onclick: move |_| onchange.call(i),
                    Icon {
                        icon: FaStar,
                        width: 18,
                        height: 18,
                        fill: if i <= value { STAR_ON } else { STAR_OFF },
                    }
                }
            }
        }
    }
}
