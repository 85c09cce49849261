//! The signed-in user's bookings.

use api::ApiClient;
use dioxus::prelude::*;
use store::SessionUser;
use ui::{handle_unauthorized, use_auth, Button, ButtonVariant, ErrorBanner, Navbar};

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let mut error = use_signal(|| Option::<String>::None);
    let mut cancelling = use_signal(|| Option::<i64>::None);

    let user: Option<SessionUser> = auth().user;
    let user_id = user.as_ref().map(|user| user.id);

    let mut bookings = use_resource(move || async move {
        match user_id {
            Some(id) => ApiClient::from_env().get_bookings_by_user(id).await,
            None => Ok(Vec::new()),
        }
    });

    let Some(user) = user else {
        ui::redirect_to("/login");
        return rsx! {};
    };

    let body = match &*bookings.read() {
        Some(Ok(items)) => {
            if items.is_empty() {
                rsx! { p { class: "muted", "No bookings yet." } }
            } else {
                let rows = items.clone().into_iter().map(|booking| {
                    let booking_id = booking.id;
                    let busy = cancelling() == Some(booking_id);
                    rsx! {
                        div {
                            key: "{booking_id}",
                            class: "booking-row",
                            div {
                                strong { "Room #{booking.room_id}" }
                                p { class: "muted",
                                    "{booking.check_in} → {booking.check_out} · {booking.guest_count} guests"
                                }
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                disabled: busy,
                                onclick: move |_| {
                                    spawn(async move {
                                        cancelling.set(Some(booking_id));
                                        match ApiClient::from_env().delete_booking(booking_id).await {
                                            Ok(()) => {
                                                cancelling.set(None);
                                                bookings.restart();
                                            }
                                            Err(err) => {
                                                cancelling.set(None);
                                                if !handle_unauthorized(&err) {
                                                    error.set(Some(err.message()));
                                                }
                                            }
                                        }
                                    });
                                },
                                if busy { "Cancelling..." } else { "Cancel" }
                            }
                        }
                    }
                });
                rsx! { {rows} }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading bookings..." } },
    };

    rsx! {
        Navbar {}
        main {
            class: "page",
            h1 { "Hi, {user.name}" }
            p { class: "muted", "{user.email}" }

            h2 { "Your bookings" }
            if let Some(message) = error() {
                ErrorBanner { message: message }
            }
            {body}
        }
    }
}
