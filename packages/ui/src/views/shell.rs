use dioxus::prelude::*;

use crate::Sidebar;

/// Authenticated page chrome: fixed side menu plus the routed page.
///
/// Platform packages provide navigation callbacks and an `Outlet` as children.
#[component]
pub fn ShellView(
    /// Path of the current route.
    active_path: String,
    /// The router outlet for child routes.
    children: Element,
    /// Called with a menu path when the user picks an entry.
    on_navigate: EventHandler<String>,
    /// Called once the session has been cleared.
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "d-flex",
            Sidebar {
                active_path: active_path,
                on_navigate: move |path| on_navigate.call(path),
                on_logout: move |_| on_logout.call(()),
            }
            main {
                class: "flex-grow-1 p-4 bg-light min-vh-100",
                style: "margin-left: 250px;",
                {children}
            }
        }
    }
}
