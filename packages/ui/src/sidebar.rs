use dioxus::prelude::*;

use crate::icons::*;
use crate::menu::{visible_menu, MenuIcon};
use crate::session::{sign_out, use_session};
use crate::Icon;

const SIDEBAR_STYLE: &str = "background-color: #2d8d2d; width: 250px;";
const ACTIVE_LINK_STYLE: &str = "background-color: #226b22; border-radius: 5px;";

fn menu_icon(icon: MenuIcon) -> Element {
    match icon {
        MenuIcon::Gauge => rsx! { Icon { icon: FaGauge, width: 16, height: 16, fill: "white" } },
        MenuIcon::UsersGear => rsx! { Icon { icon: FaUsersGear, width: 16, height: 16, fill: "white" } },
        MenuIcon::Book => rsx! { Icon { icon: FaBook, width: 16, height: 16, fill: "white" } },
        MenuIcon::FileLines => rsx! { Icon { icon: FaFileLines, width: 16, height: 16, fill: "white" } },
        MenuIcon::Envelope => rsx! { Icon { icon: FaEnvelope, width: 16, height: 16, fill: "white" } },
        MenuIcon::PaperPlane => rsx! { Icon { icon: FaPaperPlane, width: 16, height: 16, fill: "white" } },
        MenuIcon::Robot => rsx! { Icon { icon: FaRobot, width: 16, height: 16, fill: "white" } },
        MenuIcon::PenToSquare => rsx! { Icon { icon: FaPenToSquare, width: 16, height: 16, fill: "white" } },
    }
}

/// Fixed side menu filtered by the session's role.
#[component]
pub fn Sidebar(
    /// Path of the current route, used to highlight the active entry.
    active_path: String,
    /// Called with the target path when an entry is clicked.
    on_navigate: EventHandler<String>,
    /// Called after the session has been cleared.
    on_logout: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let entries = visible_menu(session.read().as_ref().map(|s| s.role()));
    let user = session().map(|s| s.user);

    rsx! {
        div {
            class: "d-flex flex-column justify-content-between vh-100 p-3 position-fixed",
            style: SIDEBAR_STYLE,

            div {
                div {
                    class: "text-center mb-4",
                    div {
                        class: "sidebar-logo mx-auto mb-2",
                        "L"
                    }
                    h4 { class: "text-white", "LAPROPHAN" }
                }

                ul {
                    class: "nav flex-column",
                    for entry in entries {
                        li {
                            key: "{entry.path}",
                            class: "nav-item mb-2",
                            a {
                                class: "nav-link text-white d-flex align-items-center gap-2",
                                style: if active_path == entry.path { ACTIVE_LINK_STYLE } else { "" },
                                href: "{entry.path}",
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    on_navigate.call(entry.path.to_string());
                                },
                                {menu_icon(entry.icon)}
                                "{entry.label}"
                            }
                        }
                    }
                }
            }

            div {
                class: "mt-4 border-top pt-3 d-flex justify-content-between align-items-start text-white",
                if let Some(ref u) = user {
                    div {
                        div { class: "fw-bold", "{u.display_name()}" }
                        div { class: "small text-white-50", "{u.email}" }
                        div { class: "small text-white-50 fst-italic", "{u.role}" }
                    }
                }
                button {
                    class: "btn btn-sm btn-outline-light",
                    title: "Déconnexion",
                    onclick: move |_| {
                        sign_out(&mut session);
                        on_logout.call(());
                    },
                    Icon { icon: FaRightFromBracket, width: 14, height: 14, fill: "white" }
                }
            }
        }
    }
}
