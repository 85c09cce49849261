//! User administration: search, create/edit, delete.

use api::{ApiClient, NewUser, PageQuery, Role, User};
use dioxus::prelude::*;
use ui::{handle_unauthorized, Button, ButtonVariant, ErrorBanner, Field, Input, Pager, Select};

use super::AdminLayout;

fn blank_user() -> User {
    User {
        id: 0,
        name: String::new(),
        email: String::new(),
        phone: None,
        birthday: None,
        gender: false,
        role: Role::User,
        avatar: None,
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let mut keyword = use_signal(String::new);
    let mut page_index = use_signal(|| 1u32);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);
    let mut form = use_signal(|| Option::<User>::None);
    // Only used when creating; updates never touch the password.
    let mut password = use_signal(String::new);

    let mut users = use_resource(move || async move {
        let query = PageQuery::new(page_index(), 10).with_keyword(keyword());
        ApiClient::from_env().get_users(&query).await
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(user) = form() else { return };
            error.set(None);
            busy.set(true);

            let client = ApiClient::from_env();
            let result = if user.id == 0 {
                let new_user = NewUser {
                    name: user.name.clone(),
                    email: user.email.clone(),
                    password: password(),
                    phone: user.phone.clone().unwrap_or_default(),
                    birthday: user.birthday.clone(),
                    gender: user.gender,
                    role: user.role,
                };
                client.create_user(&new_user).await
            } else {
                client.update_user(user.id, &user).await
            };

            busy.set(false);
            match result {
                Ok(_) => {
                    form.set(None);
                    password.set(String::new());
                    users.restart();
                }
                Err(err) => {
                    if !handle_unauthorized(&err) {
                        error.set(Some(err.message()));
                    }
                }
            }
        });
    };

    let edit = move |apply: fn(&mut User, String)| {
        move |evt: FormEvent| {
            form.with_mut(|form| {
                if let Some(user) = form {
                    apply(user, evt.value());
                }
            });
        }
    };

    let form_section = if let Some(current) = form() {
        let editing = current.id != 0;
        rsx! {
            form {
                onsubmit: handle_save,
                class: "admin-form",
                h2 { if editing { "Edit user" } else { "New user" } }
                Field {
                    label: "Name",
                    Input {
                        value: current.name.clone(),
                        oninput: edit(|user, value| user.name = value),
                    }
                }
                Field {
                    label: "Email",
                    Input {
                        r#type: "email",
                        value: current.email.clone(),
                        oninput: edit(|user, value| user.email = value),
                    }
                }
                if !editing {
                    Field {
                        label: "Password",
                        Input {
                            r#type: "password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                }
                Field {
                    label: "Phone",
                    Input {
                        r#type: "tel",
                        value: current.phone.clone().unwrap_or_default(),
                        oninput: edit(|user, value| {
                            user.phone = (!value.is_empty()).then_some(value);
                        }),
                    }
                }
                Field {
                    label: "Birthday",
                    Input {
                        r#type: "date",
                        value: current.birthday.clone().unwrap_or_default(),
                        oninput: edit(|user, value| {
                            user.birthday = (!value.is_empty()).then_some(value);
                        }),
                    }
                }
                Field {
                    label: "Role",
                    Select {
                        value: current.role.as_str(),
                        onchange: edit(|user, value| {
                            user.role = if value == "ADMIN" { Role::Admin } else { Role::User };
                        }),
                        option { value: "USER", "User" }
                        option { value: "ADMIN", "Admin" }
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
                onclick: move |_| form.set(Some(blank_user())),
                "New user"
            }
        }
    };

    let table = match &*users.read() {
        Some(Ok(page)) => {
            let rows = page.items.clone().into_iter().map(|user| {
                let user_id = user.id;
                let edit_target = user.clone();
                let role = user.role.as_str();
                rsx! {
                    tr {
                        key: "{user_id}",
                        td { "{user.id}" }
                        td { "{user.name}" }
                        td { "{user.email}" }
                        td { "{role}" }
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
                                        match ApiClient::from_env().delete_user(user_id).await {
                                            Ok(()) => users.restart(),
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
                            th { "Email" }
                            th { "Role" }
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
        None => rsx! { p { class: "loading", "Loading users..." } },
    };

    rsx! {
        AdminLayout {
            title: "Users",
            input {
                class: "input search-input",
                placeholder: "Search users",
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
