//! Small form controls shared across views.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    rsx! {
        button {
            class: "{variant_class} {class}",
            r#type: r#type,
            disabled: disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type,
            placeholder: placeholder,
            value: value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn TextArea(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = 4)] rows: i64,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            class: "input {class}",
            placeholder: placeholder,
            value: value,
            rows: rows,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Select(
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] value: String,
    #[props(default)] onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        select {
            class: "input {class}",
            value: value,
            onchange: move |evt| onchange.call(evt),
            {children}
        }
    }
}

/// Label + control wrapper used by every form.
#[component]
pub fn Field(label: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-field",
            label { "{label}" }
            {children}
        }
    }
}

/// Inline failure message, the only error surface the views use.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "error-banner",
            "{message}"
        }
    }
}
