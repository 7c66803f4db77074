//! Regulation list with per-row report actions.
//!
//! Each row carries its own in-flight flag (see [`RowStatus`]) so generating
//! one report never freezes the rest of the table.

use api::filter::filter_rows;
use api::regulations::{report_actions, ReportAction, RowStatus};
use api::Regulation;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, ReportStatusBadge, SearchBox, Spinner};
use crate::icons::{FaArrowsRotate, FaFileCirclePlus, FaFilePdf, FaUpRightFromSquare};
use crate::{platform, use_api, Icon};

use super::dashboard::published_on;

fn action_class(action: ReportAction) -> &'static str {
    match action {
        ReportAction::Generate => "btn btn-sm btn-success",
        ReportAction::Open => "btn btn-sm btn-outline-primary",
        ReportAction::Pdf => "btn btn-sm btn-outline-danger",
        ReportAction::Regenerate => "btn btn-sm btn-outline-warning",
    }
}

fn action_icon(action: ReportAction) -> Element {
    match action {
        ReportAction::Generate => rsx! { Icon { icon: FaFileCirclePlus, width: 12, height: 12, class: "me-1" } },
        ReportAction::Open => rsx! { Icon { icon: FaUpRightFromSquare, width: 12, height: 12, class: "me-1" } },
        ReportAction::Pdf => rsx! { Icon { icon: FaFilePdf, width: 12, height: 12, class: "me-1" } },
        ReportAction::Regenerate => rsx! { Icon { icon: FaArrowsRotate, width: 12, height: 12, class: "me-1" } },
    }
}

#[component]
pub fn RegulationsView() -> Element {
    let mut regulations = use_signal(Vec::<Regulation>::new);
    let mut status = use_signal(RowStatus::default);
    let mut search = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let api = use_api();

    let load_api = api.clone();
    let mut loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.regulations().await {
                Ok(rows) => regulations.set(rows),
                Err(e) => {
                    tracing::error!("Failed to load regulations: {}", e);
                    error.set(Some("Erreur lors du chargement des règlements.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let run_action = use_callback(move |(reg, action): (Regulation, ReportAction)| {
        if !action.is_request() {
            if action == ReportAction::Pdf {
                if let Some(report) = reg.rapport.as_ref() {
                    platform::open_in_new_tab(&api.report_pdf_url(report.id));
                }
                return;
            }
            match reg.rapport.as_ref().and_then(|r| r.uuid.as_deref()) {
                Some(uuid) => platform::open_in_new_tab(&api.report_html_url(uuid)),
                None => error.set(Some("Rapport introuvable.".to_string())),
            }
            return;
        }

        if !status.write().start(reg.id, action) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            message.set(None);
            error.set(None);
            let result = match action {
                ReportAction::Regenerate => api.regenerate_report(reg.id).await,
                _ => api.generate_report(reg.id).await,
            };
            match result {
                Ok(()) => {
                    tracing::info!("Report {:?} done for regulation {}", action, reg.id);
                    message.set(Some(action.success_message().to_string()));
                    loader.restart();
                }
                Err(e) => {
                    tracing::error!("Report {:?} failed for regulation {}: {}", action, reg.id, e);
                    error.set(Some(action.failure_message().to_string()));
                }
            }
            status.write().finish(reg.id);
        });
    });

    let regs = regulations.read();
    let term = search();
    let visible = filter_rows(regs.as_slice(), &term);
    let running = status.read();

    rsx! {
        div {
            class: "container-fluid",

            div {
                class: "d-flex justify-content-between align-items-center mb-4",
                h2 { class: "fw-bold", "Textes règlementaires" }
                SearchBox {
                    value: term.clone(),
                    placeholder: "Rechercher par titre...",
                    on_input: move |v| search.set(v),
                }
            }

            Alert { kind: AlertKind::Success, text: message() }
            Alert { kind: AlertKind::Danger, text: error() }

            div {
                class: "card border-0 shadow-sm",
                div {
                    class: "card-body p-0",
                    if loading() {
                        Spinner { caption: "Chargement des règlements...".to_string() }
                    } else if visible.is_empty() {
                        p { class: "text-center text-muted py-4", "Aucun règlement trouvé." }
                    } else {
                        table {
                            class: "table table-hover align-middle mb-0",
                            thead {
                                tr {
                                    th { "Titre" }
                                    th { "Date de publication" }
                                    th { "Statut du rapport" }
                                    th { class: "text-end", "Actions" }
                                }
                            }
                            tbody {
                                for reg in visible.iter().copied().cloned() {
                                    tr {
                                        key: "{reg.id}",
                                        td { "{reg.titre}" }
                                        td { "{published_on(&reg)}" }
                                        td { ReportStatusBadge { available: reg.has_report() } }
                                        td {
                                            class: "text-end text-nowrap",
                                            for action in report_actions(&reg) {
                                                button {
                                                    key: "{action.label()}",
                                                    class: "{action_class(action)} ms-1",
                                                    disabled: running.is_busy(reg.id),
                                                    onclick: {
                                                        let reg = reg.clone();
                                                        move |_| run_action.call((reg.clone(), action))
                                                    },
                                                    {action_icon(action)}
                                                    if running.running(reg.id) == Some(action) {
                                                        "{action.busy_label()}"
                                                    } else {
                                                        "{action.label()}"
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
}
