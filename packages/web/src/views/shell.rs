use dioxus::prelude::*;

use ui::views::ShellView;

use crate::Route;

/// Layout for every authenticated route.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    let on_navigate = move |path: String| match path.parse::<Route>() {
        Ok(target) => {
            nav.push(target);
        }
        Err(e) => tracing::warn!("Menu path {} is not routable: {}", path, e),
    };

    rsx! {
        ShellView {
            active_path: route.to_string(),
            on_navigate: on_navigate,
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}
