//! Assistant chat page.
//!
//! The transcript is local to the page and lost on navigation. Bot replies
//! are Markdown rendered through [`render_markdown`], which escapes any raw
//! HTML in the reply.

use api::chat::{ChatTranscript, Sender};
use dioxus::prelude::*;

use crate::icons::{FaPaperPlane, FaRobot};
use crate::markdown::render_markdown;
use crate::{use_api, Icon};

#[component]
pub fn ChatView() -> Element {
    let mut transcript = use_signal(ChatTranscript::default);
    let mut input = use_signal(String::new);
    let api = use_api();

    let send = use_callback(move |_: ()| {
        let Some(question) = transcript.write().begin_send(&input()) else {
            return;
        };
        input.set(String::new());
        let api = api.clone();
        spawn(async move {
            let reply = api.ask(&question).await;
            transcript.write().settle(reply);
        });
    });

    let chat = transcript.read();

    rsx! {
        div {
            class: "container-fluid",
            h2 {
                class: "fw-bold mb-4 d-flex align-items-center gap-2",
                Icon { icon: FaRobot, width: 24, height: 24 }
                "Assistant AI"
            }

            div {
                class: "card border-0 shadow-sm chat-card",
                div {
                    class: "card-body chat-body",
                    for (i, msg) in chat.messages.iter().enumerate() {
                        if msg.sender == Sender::User {
                            div {
                                key: "{i}",
                                class: "d-flex justify-content-end mb-2",
                                div { class: "chat-bubble chat-user", "{msg.text}" }
                            }
                        } else {
                            div {
                                key: "{i}",
                                class: "d-flex justify-content-start mb-2",
                                div {
                                    class: "chat-bubble chat-bot",
                                    dangerous_inner_html: render_markdown(&msg.text),
                                }
                            }
                        }
                    }
                    if chat.sending {
                        div { class: "text-muted fst-italic small", "Typing..." }
                    }
                }
                div {
                    class: "card-footer bg-white d-flex gap-2",
                    input {
                        class: "form-control",
                        placeholder: "Posez votre question...",
                        disabled: chat.sending,
                        value: input(),
                        oninput: move |evt: FormEvent| input.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                send.call(());
                            }
                        },
                    }
                    button {
                        class: "btn btn-success d-flex align-items-center gap-2",
                        disabled: chat.sending,
                        onclick: move |_| send.call(()),
                        Icon { icon: FaPaperPlane, width: 14, height: 14, fill: "white" }
                        if chat.sending { "Envoi en cours..." } else { "Envoyer" }
                    }
                }
            }
        }
    }
}
