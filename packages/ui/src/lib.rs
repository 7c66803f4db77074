//! This crate contains all shared UI for the dashboard.
//!
//! Pages live in [`views`] and never reach for the router: navigation is
//! requested through `EventHandler` props so the binary maps paths to its own
//! `Route` enum.

use dioxus::prelude::*;

pub mod components;
pub mod markdown;
pub mod menu;
pub mod platform;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{session_store, sign_in, sign_out, use_api, use_session, AppContext, SessionProvider};

mod sidebar;
pub use sidebar::Sidebar;

pub mod views;

pub const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");
