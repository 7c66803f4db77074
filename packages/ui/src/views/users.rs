use api::crud::{run_mutation, CrudApi, ListPage, Mutation, USER_TEXTS};
use api::validate::UserForm;
use api::{Role, User, UserPayload};
use dioxus::prelude::*;

use crate::components::{Alert, AlertKind, RoleBadge, SearchBox, Spinner};
use crate::icons::{FaPenToSquare, FaTrash, FaUserPlus};
use crate::{platform, use_api, Icon};

/// User accounts: create, edit, delete, search.
#[component]
pub fn UsersView() -> Element {
    let mut page = use_signal(|| ListPage::<User>::new(USER_TEXTS));
    let mut form = use_signal(UserForm::default);
    let api = use_api();

    let load_api = api.clone();
    let _loader = use_resource(move || {
        let api = load_api.clone();
        async move {
            if !page.write().begin() {
                return;
            }
            let result = CrudApi::<User>::list(&api).await;
            page.write().loaded(result);
        }
    });

    // Send one mutation; the form is cleared only when it went through.
    let submit = use_callback(move |mutation: Mutation<UserPayload>| {
        if !page.write().begin() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            let outcome = run_mutation::<User, _>(&api, &mutation).await;
            if page.write().finish(&mutation, outcome) && !mutation.is_delete() {
                form.set(UserForm::default());
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

            h2 { class: "fw-bold mb-4", "Gestion des utilisateurs" }

            Alert { kind: AlertKind::Success, text: state.message.clone() }
            Alert { kind: AlertKind::Danger, text: state.error.clone() }

            div {
                class: "card border-0 shadow-sm mb-4",
                div {
                    class: "card-body",
                    h5 {
                        class: "card-title d-flex align-items-center gap-2 mb-3",
                        Icon { icon: FaUserPlus, width: 16, height: 16 }
                        if editing { "Modifier l'utilisateur" } else { "Ajouter un utilisateur" }
                    }
                    form {
                        class: "row g-3",
                        onsubmit: handle_submit,

                        div {
                            class: "col-md-3",
                            input {
                                class: "form-control",
                                placeholder: "Nom",
                                value: form.read().nom.clone(),
                                oninput: move |evt: FormEvent| form.write().nom = evt.value(),
                            }
                        }
                        div {
                            class: "col-md-3",
                            input {
                                r#type: "email",
                                class: "form-control",
                                placeholder: "Email",
                                value: form.read().email.clone(),
                                oninput: move |evt: FormEvent| form.write().email = evt.value(),
                            }
                        }
                        if !editing {
                            div {
                                class: "col-md-2",
                                input {
                                    r#type: "password",
                                    class: "form-control",
                                    placeholder: "Mot de passe",
                                    value: form.read().mot_de_passe.clone(),
                                    oninput: move |evt: FormEvent| form.write().mot_de_passe = evt.value(),
                                }
                            }
                        }
                        div {
                            class: "col-md-2",
                            select {
                                class: "form-select",
                                value: form.read().role.as_str(),
                                onchange: move |evt: FormEvent| form.write().role = Role::from_value(&evt.value()),
                                for role in Role::ASSIGNABLE {
                                    option {
                                        key: "{role}",
                                        value: role.as_str(),
                                        selected: form.read().role == role,
                                        "{role.label()}"
                                    }
                                }
                            }
                        }
                        div {
                            class: "col-md-2 d-flex gap-2",
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
                                    onclick: move |_| form.set(UserForm::default()),
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
                    h5 { class: "mb-0", "Liste des utilisateurs" }
                    SearchBox {
                        value: state.search.clone(),
                        placeholder: "Rechercher par nom ou email...",
                        on_input: move |v| page.write().search = v,
                    }
                }
                div {
                    class: "card-body p-0",
                    if state.loading && state.rows.is_empty() {
                        Spinner {}
                    } else {
                        table {
                            class: "table table-hover align-middle mb-0",
                            thead {
                                tr {
                                    th { "Nom" }
                                    th { "Email" }
                                    th { "Rôle" }
                                    th { class: "text-end", "Actions" }
                                }
                            }
                            tbody {
                                for user in state.visible().into_iter().cloned() {
                                    tr {
                                        key: "{user.id}",
                                        td { "{user.nom}" }
                                        td { "{user.email}" }
                                        td { RoleBadge { role: user.role } }
                                        td {
                                            class: "text-end",
                                            button {
                                                class: "btn btn-sm btn-outline-primary me-2",
                                                title: "Modifier",
                                                disabled: state.loading,
                                                onclick: {
                                                    let user = user.clone();
                                                    move |_| {
                                                        form.set(UserForm::edit(&user));
                                                        platform::scroll_to_top();
                                                    }
                                                },
                                                Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                            }
                                            button {
                                                class: "btn btn-sm btn-outline-danger",
                                                title: "Supprimer",
                                                disabled: state.loading,
                                                onclick: move |_| handle_delete(user.id),
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
