//! Small Bootstrap-styled building blocks shared by the pages.

use dioxus::prelude::*;
use store::Role;

use crate::icons::{FaCheck, FaXmark};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success d-flex align-items-center shadow-sm mb-4",
            AlertKind::Danger => "alert alert-danger d-flex align-items-center shadow-sm mb-4",
        }
    }
}

/// An inline page message. Renders nothing when `text` is `None`.
#[component]
pub fn Alert(kind: AlertKind, text: Option<String>) -> Element {
    let Some(text) = text else {
        return rsx! {};
    };
    let icon = match kind {
        AlertKind::Success => rsx! { Icon { icon: FaCheck, width: 14, height: 14, class: "me-2" } },
        AlertKind::Danger => rsx! { Icon { icon: FaXmark, width: 14, height: 14, class: "me-2" } },
    };

    rsx! {
        div {
            class: kind.class(),
            role: "alert",
            {icon}
            div { "{text}" }
        }
    }
}

/// Search input; fires on every keystroke.
#[component]
pub fn SearchBox(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
    #[props(default = "form-control".to_string())] class: String,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            class: "{class}",
            style: "max-width: 300px;",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
    }
}

/// Centered loading spinner with an optional caption.
#[component]
pub fn Spinner(#[props(default)] caption: Option<String>) -> Element {
    rsx! {
        div {
            class: "text-center py-5",
            div { class: "spinner-border text-primary", role: "status" }
            if let Some(caption) = caption {
                p { class: "mt-2", "{caption}" }
            }
        }
    }
}

/// Coloured role pill.
#[component]
pub fn RoleBadge(role: Role) -> Element {
    let class = match role {
        Role::Admin => "badge rounded-pill bg-danger text-white",
        Role::Utilisateur => "badge rounded-pill bg-primary text-white",
        Role::Unknown => "badge rounded-pill bg-secondary text-white",
    };
    rsx! {
        span { class: class, "{role}" }
    }
}

/// "Disponible" / "En attente" report badge.
#[component]
pub fn ReportStatusBadge(available: bool) -> Element {
    rsx! {
        if available {
            span {
                class: "badge bg-success px-3 py-1 rounded-pill",
                Icon { icon: FaCheck, width: 10, height: 10, class: "me-1" }
                "Disponible"
            }
        } else {
            span {
                class: "badge bg-secondary px-3 py-1 rounded-pill",
                Icon { icon: FaXmark, width: 10, height: 10, class: "me-1" }
                "En attente"
            }
        }
    }
}
