//! Authenticated pages. Each wraps the shared view and maps its navigation
//! requests onto [`Route`].

use dioxus::prelude::*;
use ui::views::{
    ChatView, DashboardView, EmailsView, PromptView, RegulationsView, ReportsView, SentEmailsView, UsersView,
};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
pub fn Users() -> Element {
    rsx! { UsersView {} }
}

#[component]
pub fn Regulations() -> Element {
    rsx! { RegulationsView {} }
}

#[component]
pub fn Reports() -> Element {
    rsx! { ReportsView {} }
}

#[component]
pub fn Emails() -> Element {
    rsx! { EmailsView {} }
}

#[component]
pub fn SentEmails() -> Element {
    rsx! { SentEmailsView {} }
}

#[component]
pub fn Chat() -> Element {
    rsx! { ChatView {} }
}

#[component]
pub fn Prompt() -> Element {
    let nav = use_navigator();
    rsx! {
        PromptView {
            on_saved: move |_| {
                nav.push(Route::Regulations {});
            },
        }
    }
}
