//! Session context and hooks for the UI.
//!
//! The persisted session is read once when [`SessionProvider`] mounts and then
//! lives in a `Signal<Option<Session>>` provided as context. Pages never touch
//! client storage directly: they read the session through [`use_session`] and
//! build their backend client through [`use_api`].

use api::ApiClient;
use dioxus::prelude::*;
use store::{DashboardConfig, Session, SessionStore, Storage};

/// Platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - **Elsewhere**: a process-wide in-memory store
pub fn session_store() -> SessionStore<impl Storage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static MEMORY: std::sync::OnceLock<store::MemoryStorage> = std::sync::OnceLock::new();
        SessionStore::new(MEMORY.get_or_init(store::MemoryStorage::new).clone())
    }
}

/// Shared, non-reactive app context.
#[derive(Clone, Debug, PartialEq)]
pub struct AppContext {
    client: ApiClient,
}

/// Get the current session signal.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Backend client carrying the current session's bearer token.
pub fn use_api() -> ApiClient {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let token = session.read().as_ref().map(|s| s.token.clone());
    ctx.client.with_token(token)
}

/// Persist a fresh session and publish it to the app.
pub fn sign_in(session_signal: &mut Signal<Option<Session>>, session: Session) {
    if let Err(e) = session_store().save(&session) {
        tracing::error!("Failed to persist session: {}", e);
    }
    tracing::info!("Signed in as {}", session.user.email);
    session_signal.set(Some(session));
}

/// Clear all client storage and drop the session. No server call is made.
pub fn sign_out(session_signal: &mut Signal<Option<Session>>) {
    session_store().clear();
    session_signal.set(None);
}

/// Provider component that owns the session and the backend client.
/// Wrap your app with this component.
#[component]
pub fn SessionProvider(config: DashboardConfig, children: Element) -> Element {
    let session = use_signal(|| session_store().load());
    use_context_provider(|| session);
    use_context_provider(|| AppContext {
        client: ApiClient::new(&config),
    });

    rsx! {
        {children}
    }
}
