//! Booking administration: the platform-wide list with local paging.

use api::{ApiClient, Page, PageQuery};
use dioxus::prelude::*;
use ui::{handle_unauthorized, Button, ButtonVariant, ErrorBanner, Pager};

use super::AdminLayout;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn AdminBookings() -> Element {
    let mut page_index = use_signal(|| 1u32);
    let mut error = use_signal(|| Option::<String>::None);

    let mut bookings =
        use_resource(move || async move { ApiClient::from_env().get_bookings().await });

    let table = match &*bookings.read() {
        Some(Ok(items)) => {
            // The endpoint is unpaged upstream; slice locally like the
            // fallback path does.
            let page = Page::slice(items.clone(), &PageQuery::new(page_index(), PAGE_SIZE));
            let rows = page.items.into_iter().map(|booking| {
                let booking_id = booking.id;
                rsx! {
                    tr {
                        key: "{booking_id}",
                        td { "{booking.id}" }
                        td { "{booking.room_id}" }
                        td { "{booking.user_id}" }
                        td { "{booking.check_in} → {booking.check_out}" }
                        td { "{booking.guest_count}" }
                        td {
                            class: "table-actions",
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: move |_| {
                                    spawn(async move {
                                        match ApiClient::from_env()
                                            .delete_booking(booking_id)
                                            .await
                                        {
                                            Ok(()) => bookings.restart(),
                                            Err(err) => {
                                                if !handle_unauthorized(&err) {
                                                    error.set(Some(err.message()));
                                                }
                                            }
                                        }
                                    });
                                },
                                "Delete"
                            }
                        }
                    }
                }
            });
            rsx! {
                p { class: "muted", "{page.total_row} bookings" }
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Id" }
                            th { "Room" }
                            th { "User" }
                            th { "Dates" }
                            th { "Guests" }
                            th { "" }
                        }
                    }
                    tbody { {rows} }
                }
                Pager {
                    page_index: page_index(),
                    total_pages: page.total_pages,
                    onchange: move |page| page_index.set(page),
                }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading bookings..." } },
    };

    rsx! {
        AdminLayout {
            title: "Bookings",
            if let Some(message) = error() {
                ErrorBanner { message: message }
            }
            {table}
        }
    }
}
