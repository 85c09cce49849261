//! Pager over the page metadata returned by the api crate.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

/// Previous/next controls with a page counter. Hidden when everything fits
/// on one page.
#[component]
pub fn Pager(page_index: u32, total_pages: u32, onchange: EventHandler<u32>) -> Element {
    if total_pages <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pager",
            Button {
                variant: ButtonVariant::Secondary,
                disabled: page_index <= 1,
                onclick: move |_| onchange.call(page_index - 1),
                "Previous"
            }
            span { class: "pager-status", "Page {page_index} of {total_pages}" }
            Button {
                variant: ButtonVariant::Secondary,
                disabled: page_index >= total_pages,
                onclick: move |_| onchange.call(page_index + 1),
                "Next"
            }
        }
    }
}
