use api::dates::format_datetime_long_fr;
use api::SentEmail;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Spinner};
use crate::use_api;

/// Read-only audit of notification emails already sent.
#[component]
pub fn SentEmailsView() -> Element {
    let mut rows = use_signal(Vec::<SentEmail>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let api = use_api();

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            match api.sent_emails().await {
                Ok(list) => rows.set(list),
                Err(e) => {
                    tracing::error!("Failed to load sent emails: {}", e);
                    error.set(Some("Erreur lors du chargement des emails envoyés.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "container-fluid",
            h2 { class: "fw-bold mb-4", "Emails envoyés" }

            Alert { kind: AlertKind::Danger, text: error() }

            div {
                class: "card border-0 shadow-sm",
                div {
                    class: "card-body p-0",
                    if loading() {
                        Spinner {}
                    } else if rows.read().is_empty() {
                        p { class: "text-center text-muted py-4", "Aucun email envoyé." }
                    } else {
                        table {
                            class: "table table-striped align-middle mb-0",
                            thead {
                                tr {
                                    th { "Destinataire" }
                                    th { "Sujet" }
                                    th { "Date d'envoi" }
                                }
                            }
                            tbody {
                                for row in rows.read().iter() {
                                    tr {
                                        key: "{row.id}",
                                        td {
                                            a { href: "mailto:{row.email}", "{row.email}" }
                                        }
                                        td { "{row.sujet}" }
                                        td { "{format_datetime_long_fr(&row.date_envoi)}" }
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
