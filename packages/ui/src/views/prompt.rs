use std::time::Duration;

use api::GlobalPrompt;
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, Spinner};
use crate::{platform, use_api};

const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Editor for the global report-generation prompt.
#[component]
pub fn PromptView(
    /// Called shortly after a successful save.
    on_saved: EventHandler<()>,
) -> Element {
    let mut prompt = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut message = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let api = use_api();

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            match api.global_prompt().await {
                Ok(current) => prompt.set(current.prompt),
                Err(e) => {
                    tracing::error!("Failed to load prompt: {}", e);
                    error.set(Some("Erreur lors du chargement du prompt.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let handle_save = move |_| {
        if saving() {
            return;
        }
        saving.set(true);
        message.set(None);
        error.set(None);
        let api = api.clone();
        spawn(async move {
            let body = GlobalPrompt { prompt: prompt() };
            match api.save_global_prompt(&body).await {
                Ok(()) => {
                    message.set(Some("Prompt enregistré avec succès.".to_string()));
                    platform::sleep(REDIRECT_DELAY).await;
                    on_saved.call(());
                }
                Err(e) => {
                    tracing::error!("Failed to save prompt: {}", e);
                    error.set(Some(e.user_message("Erreur lors de l'enregistrement du prompt.")));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div {
            class: "container-fluid",
            h2 { class: "fw-bold mb-4", "Prompt global" }

            Alert { kind: AlertKind::Success, text: message() }
            Alert { kind: AlertKind::Danger, text: error() }

            if loading() {
                Spinner {}
            } else {
                div {
                    class: "card border-0 shadow-sm",
                    div {
                        class: "card-body",
                        label {
                            class: "form-label text-muted",
                            r#for: "global-prompt",
                            "Instructions utilisées pour la génération des rapports"
                        }
                        textarea {
                            id: "global-prompt",
                            class: "form-control font-monospace",
                            rows: 16,
                            value: prompt(),
                            oninput: move |evt: FormEvent| prompt.set(evt.value()),
                        }
                        div {
                            class: "d-flex justify-content-end mt-3",
                            button {
                                class: "btn btn-success",
                                disabled: saving(),
                                onclick: handle_save,
                                if saving() { "Enregistrement..." } else { "Enregistrer" }
                            }
                        }
                    }
                }
            }
        }
    }
}
