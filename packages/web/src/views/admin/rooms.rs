//! Room administration: search, create/edit, delete, image upload.

use api::{ApiClient, PageQuery, Room};
use dioxus::prelude::*;
use ui::{handle_unauthorized, Button, ButtonVariant, ErrorBanner, Field, Input, Pager, TextArea};

use super::AdminLayout;

#[component]
fn AmenityToggle(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "amenity-toggle",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            "{label}"
        }
    }
}

#[component]
pub fn AdminRooms() -> Element {
    let mut keyword = use_signal(String::new);
    let mut page_index = use_signal(|| 1u32);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut form = use_signal(|| Option::<Room>::None);

    let mut rooms = use_resource(move || async move {
        let query = PageQuery::new(page_index(), 10).with_keyword(keyword());
        ApiClient::from_env().get_rooms(&query).await
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(room) = form() else { return };
            error.set(None);
            busy.set(true);

            let client = ApiClient::from_env();
            let result = if room.id == 0 {
                client.create_room(&room).await
            } else {
                client.update_room(room.id, &room).await
            };

            busy.set(false);
            match result {
                Ok(_) => {
                    form.set(None);
                    rooms.restart();
                }
                Err(err) => {
                    if !handle_unauthorized(&err) {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    // One mutator per form control keeps the closures short.
    let edit = move |apply: fn(&mut Room, String)| {
        move |evt: FormEvent| {
            form.with_mut(|form| {
                if let Some(room) = form {
                    apply(room, evt.value());
                }
            });
        }
    };
    let toggle = move |apply: fn(&mut Room, bool)| {
        move |on: bool| {
            form.with_mut(|form| {
                if let Some(room) = form {
                    apply(room, on);
                }
            });
        }
    };

    let form_section = if let Some(current) = form() {
        let editing = current.id != 0;
        let room_id = current.id;
        rsx! {
            form {
                onsubmit: handle_save,
                class: "admin-form",
                h2 { if editing { "Edit room" } else { "New room" } }
                Field {
                    label: "Name",
                    Input {
                        value: current.name.clone(),
                        oninput: edit(|room, value| room.name = value),
                    }
                }
                Field {
                    label: "Location id",
                    Input {
                        r#type: "number",
                        value: current.location_id.to_string(),
                        oninput: edit(|room, value| {
                            room.location_id = value.parse().unwrap_or(0);
                        }),
                    }
                }
                div {
                    class: "form-row",
                    Field {
                        label: "Guests",
                        Input {
                            r#type: "number",
                            value: current.guests.to_string(),
                            oninput: edit(|room, value| room.guests = value.parse().unwrap_or(1)),
                        }
                    }
                    Field {
                        label: "Bedrooms",
                        Input {
                            r#type: "number",
                            value: current.bedrooms.to_string(),
                            oninput: edit(|room, value| {
                                room.bedrooms = value.parse().unwrap_or(0);
                            }),
                        }
                    }
                    Field {
                        label: "Beds",
                        Input {
                            r#type: "number",
                            value: current.beds.to_string(),
                            oninput: edit(|room, value| room.beds = value.parse().unwrap_or(0)),
                        }
                    }
                    Field {
                        label: "Bathrooms",
                        Input {
                            r#type: "number",
                            value: current.bathrooms.to_string(),
                            oninput: edit(|room, value| {
                                room.bathrooms = value.parse().unwrap_or(0);
                            }),
                        }
                    }
                    Field {
                        label: "Price / night",
                        Input {
                            r#type: "number",
                            value: current.price.to_string(),
                            oninput: edit(|room, value| room.price = value.parse().unwrap_or(0)),
                        }
                    }
                }
                Field {
                    label: "Description",
                    TextArea {
                        value: current.description.clone(),
                        oninput: edit(|room, value| room.description = value),
                    }
                }
                div {
                    class: "amenities",
                    AmenityToggle {
                        label: "Wifi",
                        checked: current.wifi,
                        onchange: toggle(|room, on| room.wifi = on),
                    }
                    AmenityToggle {
                        label: "Air conditioning",
                        checked: current.air_conditioning,
                        onchange: toggle(|room, on| room.air_conditioning = on),
                    }
                    AmenityToggle {
                        label: "Kitchen",
                        checked: current.kitchen,
                        onchange: toggle(|room, on| room.kitchen = on),
                    }
                    AmenityToggle {
                        label: "Washer",
                        checked: current.washer,
                        onchange: toggle(|room, on| room.washer = on),
                    }
                    AmenityToggle {
                        label: "TV",
                        checked: current.tv,
                        onchange: toggle(|room, on| room.tv = on),
                    }
                    AmenityToggle {
                        label: "Iron",
                        checked: current.iron,
                        onchange: toggle(|room, on| room.iron = on),
                    }
                    AmenityToggle {
                        label: "Ironing board",
                        checked: current.ironing_board,
                        onchange: toggle(|room, on| room.ironing_board = on),
                    }
                    AmenityToggle {
                        label: "Free parking",
                        checked: current.parking,
                        onchange: toggle(|room, on| room.parking = on),
                    }
                    AmenityToggle {
                        label: "Pool",
                        checked: current.pool,
                        onchange: toggle(|room, on| room.pool = on),
                    }
                }
                if editing {
                    Field {
                        label: "Photo",
                        input {
                            r#type: "file",
                            accept: "image/*",
                            onchange: move |evt: FormEvent| {
                                let Some(file_engine) = evt.files() else { return };
                                spawn(async move {
                                    let Some(name) = file_engine.files().first().cloned() else {
                                        return;
                                    };
                                    let Some(bytes) = file_engine.read_file(&name).await else {
                                        return;
                                    };
                                    match ApiClient::from_env()
                                        .upload_room_image(room_id, &name, bytes)
                                        .await
                                    {
                                        Ok(_) => rooms.restart(),
                                        Err(err) => {
                                            if !handle_unauthorized(&err) {
                                                error.set(Some(err.message()));
                                            }
                                        }
                                    }
                                });
                            },
                        }
                    }
                }
                div {
                    class: "form-actions",
                    Button {
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Saving..." } else { "Save" }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| form.set(None),
                        "Cancel"
                    }
                }
            }
        }
    } else {
        rsx! {
            Button {
                onclick: move |_| {
                    form.set(Some(Room {
                        guests: 1,
                        ..Room::default()
                    }));
                },
                "New room"
            }
        }
    };

    let table = match &*rooms.read() {
        Some(Ok(page)) => {
            let rows = page.items.clone().into_iter().map(|room| {
                let room_id = room.id;
                let edit_target = room.clone();
                rsx! {
                    tr {
                        key: "{room_id}",
                        td { "{room.id}" }
                        td { "{room.name}" }
                        td { "{room.guests}" }
                        td { "${room.price}" }
                        td { "{room.location_id}" }
                        td {
                            class: "table-actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| form.set(Some(edit_target.clone())),
                                "Edit"
                            }
                            Button {
                                variant: ButtonVariant::Danger,
                                onclick: move |_| {
                                    spawn(async move {
                                        match ApiClient::from_env().delete_room(room_id).await {
                                            Ok(()) => rooms.restart(),
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
            let total_pages = page.total_pages;
            rsx! {
                table {
                    class: "admin-table",
                    thead {
                        tr {
                            th { "Id" }
                            th { "Name" }
                            th { "Guests" }
                            th { "Price" }
                            th { "Location" }
                            th { "" }
                        }
                    }
                    tbody { {rows} }
                }
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
        AdminLayout {
            title: "Rooms",
            input {
                class: "input search-input",
                placeholder: "Search rooms",
                value: keyword(),
                oninput: move |evt| {
                    keyword.set(evt.value());
                    page_index.set(1);
                },
            }
            if let Some(message) = error() {
                ErrorBanner { message: message }
            }
            {form_section}
            {table}
        }
    }
}
