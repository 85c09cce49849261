//! Location administration: search, create/edit, delete, image upload.

use api::{ApiClient, Location, PageQuery};
use dioxus::prelude::*;
use ui::{handle_unauthorized, Button, ButtonVariant, ErrorBanner, Field, Input, Pager};

use super::AdminLayout;

#[component]
pub fn AdminLocations() -> Element {
    let mut keyword = use_signal(String::new);
    let mut page_index = use_signal(|| 1u32);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    // `None` hides the form; `id == 0` inside means "create".
    let mut form = use_signal(|| Option::<Location>::None);

    let mut locations = use_resource(move || async move {
        let query = PageQuery::new(page_index(), 10).with_keyword(keyword());
        ApiClient::from_env().get_locations(&query).await
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(location) = form() else { return };
            error.set(None);
            busy.set(true);

            let client = ApiClient::from_env();
            let result = if location.id == 0 {
                client.create_location(&location).await
            } else {
                client.update_location(location.id, &location).await
            };

            busy.set(false);
            match result {
                Ok(_) => {
                    form.set(None);
                    locations.restart();
                }
                Err(err) => {
                    if !handle_unauthorized(&err) {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let form_section = if let Some(current) = form() {
        let editing = current.id != 0;
        let location_id = current.id;
        rsx! {
            form {
                onsubmit: handle_save,
                class: "admin-form",
                h2 { if editing { "Edit location" } else { "New location" } }
                Field {
                    label: "Name",
                    Input {
                        value: current.name.clone(),
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|form| {
                                if let Some(location) = form {
                                    location.name = evt.value();
                                }
                            });
                        },
                    }
                }
                Field {
                    label: "Province",
                    Input {
                        value: current.province.clone(),
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|form| {
                                if let Some(location) = form {
                                    location.province = evt.value();
                                }
                            });
                        },
                    }
                }
                Field {
                    label: "Country",
                    Input {
                        value: current.country.clone(),
                        oninput: move |evt: FormEvent| {
                            form.with_mut(|form| {
                                if let Some(location) = form {
                                    location.country = evt.value();
                                }
                            });
                        },
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
                                        .upload_location_image(location_id, &name, bytes)
                                        .await
                                    {
                                        Ok(_) => locations.restart(),
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
                onclick: move |_| form.set(Some(Location::default())),
                "New location"
            }
        }
    };

    let table = match &*locations.read() {
        Some(Ok(page)) => {
            let rows = page.items.clone().into_iter().map(|location| {
                let location_id = location.id;
                let edit_target = location.clone();
                rsx! {
                    tr {
                        key: "{location_id}",
                        td { "{location.id}" }
                        td { "{location.name}" }
                        td { "{location.province}" }
                        td { "{location.country}" }
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
                                        match ApiClient::from_env()
                                            .delete_location(location_id)
                                            .await
                                        {
                                            Ok(()) => locations.restart(),
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
                            th { "Province" }
                            th { "Country" }
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
        None => rsx! { p { class: "loading", "Loading locations..." } },
    };

    rsx! {
        AdminLayout {
            title: "Locations",
            input {
                class: "input search-input",
                placeholder: "Search locations",
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
