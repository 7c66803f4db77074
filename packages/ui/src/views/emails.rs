use api::crud::{run_mutation, CrudApi, ListPage, Mutation, EMAIL_TEXTS};
use api::validate::EmailForm;
use api::{EmailPayload, NotificationEmail};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, SearchBox, Spinner};
use crate::icons::{FaEnvelope, FaPenToSquare, FaTrash};
use crate::{platform, use_api, Icon};

/// Addresses that receive regulation notifications.
#[component]
pub fn EmailsView() -> Element {
    let mut page = use_signal(|| ListPage::<NotificationEmail>::new(EMAIL_TEXTS));
    let mut form = use_signal(EmailForm::default);
    let api = use_api();

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            if !page.write().begin() {
                return;
            }
            let result = CrudApi::<NotificationEmail>::list(&api).await;
            page.write().loaded(result);
        }
    });

    let submit = use_callback(move |mutation: Mutation<EmailPayload>| {
        if !page.write().begin() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let outcome = run_mutation::<NotificationEmail, _>(&api, &mutation).await;
            if page.write().finish(&mutation, outcome) && !mutation.is_delete() {
                form.set(EmailForm::default());
            }
        });
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok(mutation) => submit.call(mutation),
            Err(e) => page.write().reject(e),
        }
    };

    let mut handle_delete = move |id: u64| {
        if page.read().loading {
            return;
        }
        let confirmed = platform::confirm(page.read().texts.confirm_delete);
        let mutation = page.write().request_delete(id, confirmed);
        if let Some(mutation) = mutation {
            submit.call(mutation);
        }
    };

    let state = page.read();
    let editing = form.read().is_editing();

    rsx! {
        div {
            class: "container-fluid",

            h2 { class: "fw-bold mb-4", "Emails de notification" }

            Alert { kind: AlertKind::Success, text: state.message.clone() }
            Alert { kind: AlertKind::Danger, text: state.error.clone() }

            div {
                class: "card border-0 shadow-sm mb-4",
                div {
                    class: "card-body",
                    h5 {
                        class: "card-title d-flex align-items-center gap-2 mb-3",
                        Icon { icon: FaEnvelope, width: 16, height: 16 }
                        if editing { "Modifier l'email" } else { "Ajouter un email" }
                    }
                    form {
                        class: "row g-3",
                        onsubmit: handle_submit,

                        div {
                            class: "col-md-4",
                            input {
                                class: "form-control",
                                placeholder: "Nom",
                                value: form.read().name.clone(),
                                oninput: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                        }
                        div {
                            class: "col-md-5",
                            input {
                                r#type: "email",
                                class: "form-control",
                                placeholder: "Adresse email",
                                value: form.read().adresse.clone(),
                                oninput: move |evt: FormEvent| form.write().adresse = evt.value(),
                            }
                        }
                        div {
                            class: "col-md-3 d-flex gap-2",
                            button {
                                r#type: "submit",
                                class: "btn btn-success flex-grow-1",
                                disabled: state.loading,
                                if editing { "Modifier" } else { "Ajouter" }
                            }
                            if editing {
                                button {
                                    r#type: "button",
                                    class: "btn btn-outline-secondary",
                                    onclick: move |_| form.set(EmailForm::default()),
                                    "Annuler"
                                }
                            }
                        }
                    }
                }
            }

            div {
                class: "card border-0 shadow-sm",
                div {
                    class: "card-header bg-white d-flex justify-content-between align-items-center",
                    h5 { class: "mb-0", "Liste des emails" }
                    SearchBox {
                        value: state.search.clone(),
                        placeholder: "Rechercher par nom ou adresse...",
                        on_input: move |v| page.write().search = v,
                    }
                }
                div {
                    class: "card-body p-0",
                    if state.loading && state.rows.is_empty() {
                        Spinner {}
                    } else if state.visible().is_empty() {
                        p { class: "text-center text-muted py-4", "Aucun email trouvé." }
                    } else {
                        table {
                            class: "table table-hover align-middle mb-0",
                            thead {
                                tr {
                                    th { "Nom" }
                                    th { "Adresse" }
                                    th { class: "text-end", "Actions" }
                                }
                            }
                            tbody {
                                for email in state.visible().into_iter().cloned() {
                                    tr {
                                        key: "{email.id}",
                                        td { "{email.name}" }
                                        td { "{email.adresse}" }
                                        td {
                                            class: "text-end",
                                            button {
                                                class: "btn btn-sm btn-outline-primary me-2",
                                                title: "Modifier",
                                                disabled: state.loading,
                                                onclick: {
                                                    let email = email.clone();
                                                    move |_| {
                                                        form.set(EmailForm::edit(&email));
                                                        platform::scroll_to_top();
                                                    }
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-sm btn-outline-danger",
                                                title: "Supprimer",
                                                disabled: state.loading,
                                                onclick: move |_| handle_delete(email.id),
                                                Icon { icon: FaTrash, width: 14, height: 14 }
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
