use dioxus::prelude::*;

use store::DashboardConfig;
use ui::SessionProvider;
use views::{Chat, Dashboard, Emails, Login, Prompt, Regulations, Reports, SentEmails, Shell, Users};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[layout(Shell)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/utilisateurs")]
        Users {},
        #[route("/reglements")]
        Regulations {},
        #[route("/rapports")]
        Reports {},
        #[route("/emails")]
        Emails {},
        #[route("/emails-envoyes")]
        SentEmails {},
        #[route("/chatbot")]
        Chat {},
        #[route("/prompt")]
        Prompt {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Backend locations, baked in at build time.
const DASHBOARD_TOML: &str = include_str!("../Dashboard.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| DashboardConfig::from_toml_or_default(DASHBOARD_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::BOOTSTRAP_CSS }
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

/// Unknown paths land on the login page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}
