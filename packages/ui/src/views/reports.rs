use api::Report;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Spinner};
use crate::icons::{FaDownload, FaFileCirclePlus};
use crate::{platform, use_api, Icon};

/// Generated reports, with a manual generation trigger.
///
/// The preview is backend-authored markup and is rendered as-is.
#[component]
pub fn ReportsView() -> Element {
    let mut reports = use_signal(Vec::<Report>::new);
    let mut loading = use_signal(|| true);
    let mut generating = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let api = use_api();

    let load_api = api.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.reports().await {
                Ok(rows) => reports.set(rows),
                Err(e) => {
                    tracing::error!("Failed to load reports: {}", e);
                    error.set(Some("Erreur lors du chargement des rapports.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let gen_api = api.clone();
    let handle_generate = move |_| {
        if generating() {
            return;
        }
        generating.set(true);
        message.set(None);
        error.set(None);
        let api = gen_api.clone();
        spawn(async move {
            match api.generate_manual_report().await {
                Ok(()) => {
                    tracing::info!("Manual report generated");
                    message.set(Some("Rapport généré avec succès.".to_string()));
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("Failed to generate report: {}", e);
                    error.set(Some(e.user_message("Erreur lors de la génération du rapport.")));
                }
            }
            generating.set(false);
        });
    };

    rsx! {
        div {
            class: "container-fluid",

            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h2 { class: "fw-bold", "Rapports" }
                button {
                    class: "btn btn-success d-flex align-items-center gap-2",
                    disabled: generating(),
                    onclick: handle_generate,
                    Icon { icon: FaFileCirclePlus, width: 16, height: 16, fill: "white" }
                    if generating() { "Génération en cours..." } else { "Générer Rapport Manuellement" }
                }
            }

            Alert { kind: AlertKind::Success, text: message() }
            Alert { kind: AlertKind::Danger, text: error() }

            if loading() {
                Spinner {}
            } else if reports.read().is_empty() {
                p { class: "text-center text-muted py-4", "Aucun rapport disponible." }
            } else {
                div {
                    class: "row g-3",
                    for report in reports.read().iter() {
                        div {
                            key: "{report.id}",
                            class: "col-md-6 col-lg-4",
                            div {
                                class: "card border-0 shadow-sm h-100",
                                div {
                                    class: "card-body d-flex flex-column",
                                    h6 { class: "card-title text-muted", "Rapport #{report.id}" }
                                    div {
                                        class: "card-text small flex-grow-1 report-preview",
                                        dangerous_inner_html: report.preview(),
                                    }
                                    button {
                                        class: "btn btn-sm btn-outline-primary mt-3 align-self-start",
                                        onclick: {
                                            let url = api.report_pdf_url(report.id);
                                            move |_| platform::open_in_new_tab(&url)
                                        },
                                        Icon { icon: FaDownload, width: 12, height: 12, class: "me-1" }
                                        "Download"
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
