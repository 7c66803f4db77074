use crate::error::ApiError;
use crate::models::{GlobalPrompt, Report, SentEmail};
use crate::ApiClient;

impl ApiClient {
    /// `GET /rapports`
    pub async fn reports(&self) -> Result<Vec<Report>, ApiError> {
        self.get_json("rapports").await
    }

    /// `POST /generer-rapport`: manual report run.
    pub async fn generate_manual_report(&self) -> Result<(), ApiError> {
        self.untimed().post_discard::<()>("generer-rapport", None).await
    }

    /// `GET /emails_envoyes`
    pub async fn sent_emails(&self) -> Result<Vec<SentEmail>, ApiError> {
        self.get_json("emails_envoyes").await
    }

    /// `GET /prompt-global`
    pub async fn global_prompt(&self) -> Result<GlobalPrompt, ApiError> {
        self.get_json("prompt-global").await
    }

    /// `POST /prompt-global`: overwrite the prompt wholesale.
    pub async fn save_global_prompt(&self, prompt: &GlobalPrompt) -> Result<(), ApiError> {
        tracing::info!("Saving global prompt ({} chars)", prompt.prompt.chars().count());
        self.post_discard("prompt-global", Some(prompt)).await
    }
}
