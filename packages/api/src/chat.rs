//! # Assistant chat
//!
//! The transcript lives only in memory. A send goes through three steps:
//!
//! 1. [`ChatTranscript::begin_send`] appends the user bubble and locks input;
//! 2. the caller awaits [`ApiClient::ask`];
//! 3. [`ChatTranscript::settle`] appends exactly one bot bubble (the reply or
//!    [`FALLBACK_REPLY`]) and unlocks input.
//!
//! Replies come back either as JSON with one of `reponse`, `message`, `answer`
//! or as plain text, with wire-escaped quotes and newlines and two noise
//! tokens that are stripped before rendering.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::ApiClient;

pub const GREETING: &str = "Bonjour ! Posez-moi une question.";
pub const FALLBACK_REPLY: &str = "Désolé, service momentanément indisponible";

const NOISE_TOKENS: [&str; 2] = ["v.u.", "v.v."];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Local transcript plus the single in-flight flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            sending: false,
        }
    }
}

impl ChatTranscript {
    /// Append the user's bubble and lock input.
    ///
    /// Returns the question to send, or `None` for blank input or while a
    /// previous question is still pending.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if self.sending || input.trim().is_empty() {
            return None;
        }
        self.sending = true;
        self.messages.push(ChatMessage::user(input));
        Some(input.to_string())
    }

    /// Append the bot's bubble for a settled request and unlock input.
    pub fn settle(&mut self, reply: Result<String, ApiError>) {
        let text = match reply {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Erreur: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::bot(text));
        self.sending = false;
    }
}

#[derive(Deserialize)]
struct ReplyBody {
    reponse: Option<String>,
    message: Option<String>,
    answer: Option<String>,
}

/// Pick the answer out of a raw reply body. Empty fields are skipped.
pub fn extract_reply(raw: &str) -> String {
    serde_json::from_str::<ReplyBody>(raw)
        .ok()
        .and_then(|body| {
            [body.reponse, body.message, body.answer]
                .into_iter()
                .flatten()
                .find(|text| !text.is_empty())
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Undo wire escaping and strip the noise tokens.
pub fn normalize_reply(text: &str) -> String {
    let mut out = text.replace("\\n", "\n").replace("\\\"", "\"");
    for token in NOISE_TOKENS {
        out = out.replace(token, "");
    }
    out
}

impl ApiClient {
    /// Ask the assistant a question; the reply is extracted and normalised.
    pub async fn ask(&self, question: &str) -> Result<String, ApiError> {
        let raw = self.ask_raw(question).await?;
        Ok(normalize_reply(&extract_reply(&raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_appends_user_then_one_bot_bubble() {
        let mut chat = ChatTranscript::default();
        assert_eq!(chat.messages, vec![ChatMessage::bot(GREETING)]);

        let question = chat.begin_send("hello").unwrap();
        assert_eq!(question, "hello");
        assert!(chat.sending);
        assert_eq!(chat.messages.last(), Some(&ChatMessage::user("hello")));
        assert_eq!(chat.messages.len(), 2);

        chat.settle(Ok("Bonjour".into()));
        assert!(!chat.sending);
        assert_eq!(chat.messages.len(), 3);
        assert_eq!(chat.messages[2], ChatMessage::bot("Bonjour"));
    }

    #[test]
    fn test_failure_uses_fallback() {
        let mut chat = ChatTranscript::default();
        chat.begin_send("hello").unwrap();
        chat.settle(Err(ApiError::Transport("refused".into())));
        assert_eq!(chat.messages.last(), Some(&ChatMessage::bot(FALLBACK_REPLY)));
        assert_eq!(chat.messages.len(), 3);
        assert!(!chat.sending);
    }

    #[test]
    fn test_blank_or_concurrent_send_is_ignored() {
        let mut chat = ChatTranscript::default();
        assert!(chat.begin_send("   ").is_none());
        assert!(chat.begin_send("one").is_some());
        assert!(chat.begin_send("two").is_none());
        assert_eq!(chat.messages.len(), 2);
    }

    #[test]
    fn test_extract_reply_field_order() {
        assert_eq!(extract_reply(r#"{"reponse":"R","message":"M"}"#), "R");
        assert_eq!(extract_reply(r#"{"message":"M","answer":"A"}"#), "M");
        assert_eq!(extract_reply(r#"{"answer":"A"}"#), "A");
        assert_eq!(extract_reply(r#"{"reponse":"","message":"M"}"#), "M");
        assert_eq!(extract_reply(r#"{"reponse":"","message":"","answer":"A"}"#), "A");
        assert_eq!(extract_reply(r#"{"reponse":""}"#), r#"{"reponse":""}"#);
        assert_eq!(extract_reply(r#"{"other":1}"#), r#"{"other":1}"#);
        assert_eq!(extract_reply("plain text"), "plain text");
    }

    #[test]
    fn test_normalize_reply() {
        let raw = r#"Article 3 v.u.:\n- \"AMM\" requise v.v."#;
        assert_eq!(normalize_reply(raw), "Article 3 :\n- \"AMM\" requise ");
    }
}
