//! # HTTP client wrapper
//!
//! [`ApiClient`] is the only place that talks to the network. It centralises:
//!
//! - the REST base URL and the public/chat URLs from [`DashboardConfig`];
//! - default headers (`Accept: application/json`, `X-Requested-With`);
//! - the bearer token of the current session, when there is one;
//! - a fixed upper bound per call ([`ApiConfig::timeout`](store::config::ApiConfig::timeout)),
//!   after which the call fails with [`ApiError::Timeout`]. Calls that wait on
//!   backend jobs (report generation, the import webhook, the assistant) go
//!   through `ApiClient::untimed` instead;
//! - logging of every failed request.
//!
//! Non-2xx responses become [`ApiError::Status`] carrying the `message` field of
//! the body when present. Nothing is retried.

use std::future::Future;
use std::time::Duration;

use futures::future::{select, Either};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{DashboardConfig, Session};

use crate::error::{extract_message, ApiError};
use crate::models::LoginRequest;

/// Typed client for the dashboard backend.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    public_url: String,
    ask_url: String,
    timeout: Option<Duration>,
    token: Option<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.public_url == other.public_url
            && self.ask_url == other.ask_url
            && self.timeout == other.timeout
            && self.token == other.token
    }
}

impl ApiClient {
    pub fn new(config: &DashboardConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            http,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            public_url: config.api.public_url.trim_end_matches('/').to_string(),
            ask_url: config.chat.ask_url.clone(),
            timeout: config.api.timeout(),
            token: None,
        }
    }

    /// Attach (or drop) the bearer token sent with every REST call.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Same client with no time bound, for calls that wait on a backend job
    /// and may run for minutes.
    pub(crate) fn untimed(&self) -> Self {
        Self {
            timeout: None,
            ..self.clone()
        }
    }

    /// Absolute URL of a REST path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Where `GET /rapports/pdf/:id` is served, for opening in a new tab.
    pub fn report_pdf_url(&self, report_id: u64) -> String {
        self.url(&format!("rapports/pdf/{report_id}"))
    }

    /// Public page rendering a report as HTML.
    pub fn report_html_url(&self, uuid: &str) -> String {
        format!("{}/rapports/html/{uuid}", self.public_url)
    }

    /// `POST /login`: exchange credentials for a token and profile.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<Session, ApiError> {
        let req = self.http.post(self.url("login")).json(credentials);
        let body = self.execute(req).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST` the question to the assistant and return the raw reply body.
    ///
    /// The status code is not checked: whatever body the assistant sends is the
    /// answer. Only transport failures and timeouts are errors.
    pub async fn ask_raw(&self, question: &str) -> Result<String, ApiError> {
        let req = self
            .http
            .post(&self.ask_url)
            .json(&serde_json::json!({ "question": question }));
        let (_, body) = self.untimed().exchange(req).await?;
        Ok(body)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.execute(self.authed(self.http.get(self.url(path)))).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("GET {} returned an unexpected body: {}", path, e);
            ApiError::from(e)
        })
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let body = self.execute(self.post_request(path, body)).await?;
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub(crate) async fn post_discard<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.execute(self.post_request(path, body)).await.map(drop)
    }

    pub(crate) async fn put_discard<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let req = self.authed(self.http.put(self.url(path)).json(body));
        self.execute(req).await.map(drop)
    }

    pub(crate) async fn delete_discard(&self, path: &str) -> Result<(), ApiError> {
        let req = self.authed(self.http.delete(self.url(path)));
        self.execute(req).await.map(drop)
    }

    fn post_request<B: Serialize + ?Sized>(&self, path: &str, body: Option<&B>) -> RequestBuilder {
        let req = self.http.post(self.url(path));
        self.authed(match body {
            Some(body) => req.json(body),
            None => req,
        })
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send and require a 2xx status; returns the body text.
    async fn execute(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let (status, body) = self.exchange(req).await?;
        if status.is_success() {
            return Ok(body);
        }
        let message = extract_message(&body);
        tracing::warn!("Request rejected with {}: {:?}", status, message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Send and read the whole body under this client's time bound, if any.
    async fn exchange(&self, req: RequestBuilder) -> Result<(StatusCode, String), ApiError> {
        let call = async move {
            let resp = req.send().await?;
            let status = resp.status();
            let body = resp.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        match with_timeout(call, self.timeout).await {
            Ok(Ok(pair)) => Ok(pair),
            Ok(Err(e)) => {
                tracing::error!("Erreur API: {}", e);
                Err(ApiError::from(e))
            }
            Err(e) => {
                tracing::error!("Erreur API: {}", e);
                Err(e)
            }
        }
    }
}

/// Race `fut` against `limit`.
pub(crate) async fn with_timeout<F: Future>(fut: F, limit: Option<Duration>) -> Result<F::Output, ApiError> {
    let Some(limit) = limit else {
        return Ok(fut.await);
    };
    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(sleep(limit));
    match select(fut, timer).await {
        Either::Left((out, _)) => Ok(out),
        Either::Right(_) => Err(ApiError::Timeout(limit)),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(d: Duration) {
    gloo_timers::future::sleep(d).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(d: Duration) {
    tokio::time::sleep(d).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://scanlink.example.com/api/"
            public_url = "https://scanlink.example.com/"
            "#,
        )
        .unwrap();
        ApiClient::new(&config)
    }

    #[test]
    fn test_urls() {
        let api = client();
        assert_eq!(api.url("/utilisateurs/3"), "https://scanlink.example.com/api/utilisateurs/3");
        assert_eq!(api.report_pdf_url(12), "https://scanlink.example.com/api/rapports/pdf/12");
        assert_eq!(
            api.report_html_url("9f1c"),
            "https://scanlink.example.com/rapports/html/9f1c"
        );
    }

    #[test]
    fn test_token_is_part_of_identity() {
        let api = client();
        let authed = api.clone().with_token(Some("tok".into()));
        assert_eq!(authed.token(), Some("tok"));
        assert_ne!(api, authed);
    }

    /// Serve one connection, answering 200 with `body` after `delay`.
    fn slow_backend(delay: Duration, body: &'static str) -> ApiClient {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            std::thread::sleep(delay);
            let resp = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(resp.as_bytes());
        });

        let config = DashboardConfig::from_toml(&format!(
            r#"
            [api]
            base_url = "http://{addr}/api"
            public_url = "http://{addr}"
            timeout_secs = 1

            [chat]
            ask_url = "http://{addr}/ask"
            "#
        ))
        .unwrap();
        ApiClient::new(&config).with_token(Some("tok".into()))
    }

    #[test]
    fn test_untimed_drops_only_the_bound() {
        let api = client().with_token(Some("tok".into()));
        assert_eq!(api.timeout, Some(Duration::from_secs(10)));
        let untimed = api.untimed();
        assert_eq!(untimed.timeout, None);
        assert_eq!(untimed.token(), Some("tok"));
        assert_eq!(untimed.url("x"), api.url("x"));
    }

    #[tokio::test]
    async fn test_plain_call_times_out_on_slow_backend() {
        let api = slow_backend(Duration::from_millis(2500), "[]");
        let result = api.regulations().await;
        assert_eq!(result, Err(ApiError::Timeout(Duration::from_secs(1))));
    }

    #[tokio::test]
    async fn test_report_generation_outlives_the_bound() {
        let api = slow_backend(Duration::from_millis(2500), "");
        assert_eq!(api.generate_report(7).await, Ok(()));
    }

    #[tokio::test]
    async fn test_assistant_outlives_the_bound() {
        let api = slow_backend(Duration::from_millis(2500), r#"{"reponse":"ok"}"#);
        assert_eq!(api.ask_raw("q").await.unwrap(), r#"{"reponse":"ok"}"#);
    }

    #[tokio::test]
    async fn test_timeout_fires_on_pending_future() {
        let limit = Duration::from_millis(10);
        let result = with_timeout(futures::future::pending::<()>(), Some(limit)).await;
        assert_eq!(result, Err(ApiError::Timeout(limit)));
    }

    #[tokio::test]
    async fn test_ready_future_beats_timeout() {
        let result = with_timeout(async { 42 }, Some(Duration::from_secs(5))).await;
        assert_eq!(result, Ok(42));
        let result = with_timeout(async { 7 }, None).await;
        assert_eq!(result, Ok(7));
    }
}
