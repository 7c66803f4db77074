//! Dashboard overview: statistics, category filter and the latest regulations.

use api::dates::{format_date_fr, today};
use api::filter::Searchable;
use api::regulations::{category_color, category_for, count_added_on, filter_by_category, merge_categories};
use api::{Category, Regulation};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, ReportStatusBadge, SearchBox, Spinner};
use crate::icons::{FaArrowUpRightFromSquare, FaBook, FaCalendarDay, FaCloudArrowDown, FaTags};
use crate::{use_api, Icon};

const IMPORT_OK: &str = "Import déclenché avec succès";
const IMPORT_FAILED: &str = "Echec du déclenchement de l'import.";

/// Publication date as `dd/mm/yyyy`, empty when missing.
pub(super) fn published_on(reg: &Regulation) -> String {
    reg.date_publication.as_deref().map(format_date_fr).unwrap_or_default()
}

#[component]
fn StatCard(label: String, value: usize, children: Element) -> Element {
    rsx! {
        div {
            class: "col-md-4",
            div {
                class: "card border-0 shadow-sm h-100",
                div {
                    class: "card-body d-flex align-items-center gap-3",
                    div { class: "stat-icon", {children} }
                    div {
                        div { class: "text-muted small", "{label}" }
                        div { class: "fs-3 fw-bold", "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DashboardView() -> Element {
    let mut regulations = use_signal(Vec::<Regulation>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut importing = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let api = use_api();

    let load_api = api.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            loading.set(true);
            match api.regulations().await {
                Ok(rows) => regulations.set(rows),
                Err(e) => {
                    tracing::error!("Failed to load regulations: {}", e);
                    error.set(Some("Erreur lors du chargement des règlements.".to_string()));
                }
            }
            // The palette still applies when the categories endpoint fails.
            let server = api.categories().await.unwrap_or_else(|e| {
                tracing::warn!("Failed to load categories: {}", e);
                Vec::new()
            });
            categories.set(merge_categories(server));
            loading.set(false);
        }
    });

    let handle_import = move |_| {
        if importing() {
            return;
        }
        importing.set(true);
        message.set(None);
        error.set(None);
        let api = api.clone();
        spawn(async move {
            match api.trigger_import().await {
                Ok(ack) => {
                    tracing::info!("Import triggered");
                    message.set(Some(ack.message.unwrap_or_else(|| IMPORT_OK.to_string())));
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to trigger import: {}", e);
                    error.set(Some(IMPORT_FAILED.to_string()));
                }
            }
            importing.set(false);
        });
    };

    let regs = regulations.read();
    let cats = categories.read();
    let added_today = count_added_on(&regs, today());
    let by_category = filter_by_category(&regs, selected().as_deref());
    let term = search();
    let needle = term.to_lowercase();
    let visible: Vec<&Regulation> = by_category.into_iter().filter(|r| r.matches(&needle)).collect();

    rsx! {
        div {
            class: "container-fluid",

            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h2 { class: "fw-bold", "Tableau de bord" }
                button {
                    class: "btn btn-success d-flex align-items-center gap-2",
                    disabled: importing(),
                    onclick: handle_import,
                    Icon { icon: FaCloudArrowDown, width: 16, height: 16, fill: "white" }
                    if importing() { "Import en cours..." } else { "Importer maintenant" }
                }
            }

            Alert { kind: AlertKind::Success, text: message() }
            Alert { kind: AlertKind::Danger, text: error() }

            div {
                class: "row g-3 mb-4",
                StatCard {
                    label: "Ajoutés aujourd'hui",
                    value: added_today,
                    Icon { icon: FaCalendarDay, width: 24, height: 24 }
                }
                StatCard {
                    label: "Total des règlements",
                    value: regs.len(),
                    Icon { icon: FaBook, width: 24, height: 24 }
                }
                StatCard {
                    label: "Catégories",
                    value: cats.len(),
                    Icon { icon: FaTags, width: 24, height: 24 }
                }
            }

            div {
                class: "d-flex flex-wrap gap-2 mb-3",
                button {
                    class: if selected().is_none() { "btn btn-sm btn-dark rounded-pill" } else { "btn btn-sm btn-outline-dark rounded-pill" },
                    onclick: move |_| selected.set(None),
                    "Toutes"
                }
                for cat in cats.iter().cloned() {
                    button {
                        key: "{cat.id}",
                        class: "btn btn-sm rounded-pill text-white",
                        style: if selected().as_deref() == Some(cat.id.as_str()) {
                            format!("background-color: {}; box-shadow: 0 0 0 2px #000;", category_color(&cat))
                        } else {
                            format!("background-color: {}; opacity: 0.75;", category_color(&cat))
                        },
                        onclick: {
                            let id = cat.id.clone();
                            move |_| selected.set(Some(id.clone()))
                        },
                        "{cat.nom}"
                    }
                }
            }

            div {
                class: "card border-0 shadow-sm",
                div {
                    class: "card-header bg-white d-flex justify-content-between align-items-center",
                    h5 { class: "mb-0", "Derniers règlements" }
                    SearchBox {
                        value: term.clone(),
                        placeholder: "Rechercher par titre...",
                        on_input: move |v| search.set(v),
                    }
                }
                div {
                    class: "card-body p-0",
                    if loading() {
                        Spinner { caption: "Chargement...".to_string() }
                    } else if visible.is_empty() {
                        p { class: "text-center text-muted py-4", "Aucun règlement trouvé." }
                    } else {
                        table {
                            class: "table table-hover align-middle mb-0",
                            thead {
                                tr {
                                    th { "Titre" }
                                    th { "Date de publication" }
                                    th { "Catégorie" }
                                    th { "Rapport" }
                                    th { "Lien" }
                                }
                            }
                            tbody {
                                for reg in visible.iter() {
                                    tr {
                                        key: "{reg.id}",
                                        td { "{reg.titre}" }
                                        td { "{published_on(reg)}" }
                                        td {
                                            if let Some(cat) = category_for(&cats, reg) {
                                                span {
                                                    class: "badge text-white",
                                                    style: "background-color: {category_color(cat)};",
                                                    "{cat.nom}"
                                                }
                                            } else {
                                                span { class: "badge bg-light text-muted", "Non classé" }
                                            }
                                        }
                                        td { ReportStatusBadge { available: reg.has_report() } }
                                        td {
                                            if let Some(url) = reg.url.clone() {
                                                a {
                                                    href: "{url}",
                                                    target: "_blank",
                                                    rel: "noopener noreferrer",
                                                    Icon { icon: FaArrowUpRightFromSquare, width: 14, height: 14 }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
