//! Login page view.

use api::validate::LoginForm;
use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::{sign_in, use_api, use_session, Icon};

const LOGIN_FAILED: &str = "Identifiants invalides";

/// Email/password form. On success the session is persisted and
/// `on_success` is called so the platform can navigate to the dashboard.
#[component]
pub fn LoginView(on_success: EventHandler<()>) -> Element {
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut session = use_session();
    let api = use_api();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        loading.set(true);
        let api = api.clone();
        spawn(async move {
            match api.login(&request).await {
                Ok(s) => {
                    sign_in(&mut session, s);
                    on_success.call(());
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.user_message(LOGIN_FAILED)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "d-flex align-items-center justify-content-center min-vh-100 login-background",
            div {
                class: "card shadow-lg border-0 p-4",
                style: "width: 100%; max-width: 420px;",

                div {
                    class: "text-center mb-4",
                    div { class: "sidebar-logo mx-auto mb-3", "L" }
                    h3 { class: "fw-bold", "Connexion" }
                    p { class: "text-muted", "Veille réglementaire LAPROPHAN" }
                }

                if let Some(msg) = error() {
                    div {
                        class: "alert alert-danger d-flex justify-content-between align-items-center",
                        role: "alert",
                        span { "{msg}" }
                        button {
                            r#type: "button",
                            class: "btn btn-sm btn-link text-danger p-0",
                            title: "Fermer",
                            onclick: move |_| error.set(None),
                            Icon { icon: FaXmark, width: 12, height: 12 }
                        }
                    }
                }

                form {
                    onsubmit: handle_submit,

                    div {
                        class: "mb-3",
                        label { class: "form-label", r#for: "login-email", "Email" }
                        input {
                            id: "login-email",
                            r#type: "email",
                            class: "form-control",
                            placeholder: "nom@exemple.com",
                            value: form.read().email.clone(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }

                    div {
                        class: "mb-4",
                        label { class: "form-label", r#for: "login-password", "Mot de passe" }
                        input {
                            id: "login-password",
                            r#type: "password",
                            class: "form-control",
                            value: form.read().password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-success w-100",
                        disabled: loading(),
                        if loading() { "Connexion..." } else { "Se connecter" }
                    }
                }
            }
        }
    }
}
