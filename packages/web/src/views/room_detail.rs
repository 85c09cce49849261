//! Room detail: description, amenities, the booking form and reviews.

use api::{ApiClient, NewBooking, NewComment, PageQuery};
use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use ui::{
    handle_unauthorized, use_auth, Button, ErrorBanner, Field, Input, Navbar, Pager, StarPicker,
    StarRating, TextArea,
};

const COMMENTS_PAGE_SIZE: u32 = 5;

#[component]
pub fn RoomDetail(room_id: i64) -> Element {
    let auth = use_auth();

    let room = use_resource(move || async move { ApiClient::from_env().get_room(room_id).await });

    let mut comment_page = use_signal(|| 1u32);
    let mut comments = use_resource(move || async move {
        let query = PageQuery::new(comment_page(), COMMENTS_PAGE_SIZE);
        ApiClient::from_env()
            .get_comments_by_room(room_id, &query)
            .await
    });

    // Booking form state.
    let mut check_in = use_signal(String::new);
    let mut check_out = use_signal(String::new);
    let mut guest_count = use_signal(|| "1".to_string());
    let mut booking_error = use_signal(|| Option::<String>::None);
    let mut booking_done = use_signal(|| Option::<String>::None);
    let mut booking_busy = use_signal(|| false);

    // Comment form state.
    let mut comment_content = use_signal(String::new);
    let mut comment_stars = use_signal(|| 5u8);
    let mut comment_error = use_signal(|| Option::<String>::None);
    let mut comment_busy = use_signal(|| false);

    let handle_book = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            booking_error.set(None);
            booking_done.set(None);

            let Some(user) = auth().user else {
                ui::redirect_to("/login");
                return;
            };
            let Ok(check_in_date) = check_in().parse::<NaiveDate>() else {
                booking_error.set(Some("Select a check-in date".to_string()));
                return;
            };
            let Ok(check_out_date) = check_out().parse::<NaiveDate>() else {
                booking_error.set(Some("Select a check-out date".to_string()));
                return;
            };
            let guests: u32 = guest_count().parse().unwrap_or(0);

            let booking = NewBooking {
                room_id,
                check_in: check_in_date,
                check_out: check_out_date,
                guest_count: guests,
                user_id: user.id,
            };

            booking_busy.set(true);
            match ApiClient::from_env().create_booking(&booking).await {
                Ok(created) => {
                    booking_busy.set(false);
                    booking_done.set(Some(format!(
                        "Booking confirmed for {} nights",
                        (created.check_out - created.check_in).num_days()
                    )));
                }
                Err(err) => {
                    booking_busy.set(false);
                    if !handle_unauthorized(&err) {
                        booking_error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let handle_comment = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            comment_error.set(None);

            let Some(user) = auth().user else {
                ui::redirect_to("/login");
                return;
            };

            let comment = NewComment {
                room_id,
                commenter_id: user.id,
                date: Utc::now(),
                content: comment_content(),
                stars: comment_stars(),
            };

            comment_busy.set(true);
            match ApiClient::from_env().create_comment(&comment).await {
                Ok(_) => {
                    comment_busy.set(false);
                    comment_content.set(String::new());
                    comment_stars.set(5);
                    comment_page.set(1);
                    comments.restart();
                }
                Err(err) => {
                    comment_busy.set(false);
                    if !handle_unauthorized(&err) {
                        comment_error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let room_section = match &*room.read() {
        Some(Ok(room)) => {
            let amenities = room.amenities();
            rsx! {
                if let Some(image) = room.image.clone() {
                    img { class: "detail-image", src: "{image}", alt: "{room.name}" }
                }
                h1 { "{room.name}" }
                p { class: "muted",
                    "{room.guests} guests · {room.bedrooms} bedrooms · {room.beds} beds · {room.bathrooms} baths"
                }
                p { class: "price", "${room.price} / night" }
                p { "{room.description}" }
                if !amenities.is_empty() {
                    div {
                        class: "amenities",
                        for amenity in amenities {
                            span { class: "amenity-tag", "{amenity}" }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading room..." } },
    };

    let comments_section = match &*comments.read() {
        Some(Ok(page)) => {
            let rows = page.items.clone().into_iter().map(|comment| {
                rsx! {
                    div {
                        key: "{comment.id}",
                        class: "comment",
                        div {
                            class: "comment-header",
                            strong { "{comment.commenter_name}" }
                            StarRating { stars: comment.stars }
                        }
                        p { "{comment.content}" }
                    }
                }
            });
            let total_pages = page.total_pages;
            rsx! {
                h2 { "{page.total_row} reviews" }
                {rows}
                Pager {
                    page_index: comment_page(),
                    total_pages: total_pages,
                    onchange: move |page| comment_page.set(page),
                }
            }
        }
        Some(Err(err)) => rsx! { ErrorBanner { message: err.message() } },
        None => rsx! { p { class: "loading", "Loading reviews..." } },
    };

    rsx! {
        Navbar {}
        main {
            class: "page",
            section { class: "room-detail", {room_section} }

            section {
                class: "booking-panel",
                h2 { "Book this room" }
                if let Some(message) = booking_done() {
                    div { class: "success-banner", "{message}" }
                }
                if let Some(message) = booking_error() {
                    ErrorBanner { message: message }
                }
                form {
                    onsubmit: handle_book,
                    class: "form-row",
                    Field {
                        label: "Check-in",
                        Input {
                            r#type: "date",
                            value: check_in(),
                            oninput: move |evt: FormEvent| check_in.set(evt.value()),
                        }
                    }
                    Field {
                        label: "Check-out",
                        Input {
                            r#type: "date",
                            value: check_out(),
                            oninput: move |evt: FormEvent| check_out.set(evt.value()),
                        }
                    }
                    Field {
                        label: "Guests",
                        Input {
                            r#type: "number",
                            value: guest_count(),
                            oninput: move |evt: FormEvent| guest_count.set(evt.value()),
                        }
                    }
                    Button {
                        r#type: "submit",
                        disabled: booking_busy(),
                        if booking_busy() { "Booking..." } else { "Book now" }
                    }
                }
            }

            section {
                class: "comments-panel",
                {comments_section}

                h3 { "Leave a review" }
                if let Some(message) = comment_error() {
                    ErrorBanner { message: message }
                }
                form {
                    onsubmit: handle_comment,
                    class: "comment-form",
                    StarPicker {
                        value: comment_stars(),
                        onchange: move |stars| comment_stars.set(stars),
                    }
                    TextArea {
                        placeholder: "Share how your stay went",
                        value: comment_content(),
                        oninput: move |evt: FormEvent| comment_content.set(evt.value()),
                    }
                    Button {
                        r#type: "submit",
                        disabled: comment_busy(),
                        if comment_busy() { "Posting..." } else { "Post review" }
                    }
                }
            }
        }
    }
}
