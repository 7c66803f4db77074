//! # List / form / mutation page flow
//!
//! Users and notification emails share one page shape: load a list on mount,
//! filter it locally, submit a form that creates or updates a row, delete a row
//! after confirmation, and re-fetch the list after every successful mutation.
//!
//! The flow is split in two so it works with any reactive state holder:
//!
//! - [`ListPage`] is plain data (rows, loading flag, messages, search term) with
//!   synchronous transitions. UI code keeps it in a signal.
//! - [`run_mutation`] is the async part: one mutating request, then exactly one
//!   list request when the mutation succeeded.
//!
//! A page admits a single in-flight mutation: [`ListPage::begin`] returns
//! `false` while another one runs and the caller drops the trigger.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::filter::{filter_rows, Searchable};
use crate::models::{EmailPayload, NotificationEmail, User, UserPayload};
use crate::ApiClient;

/// A REST collection with list/create/update/delete endpoints under `PATH`.
pub trait Resource: Searchable + DeserializeOwned + Clone + PartialEq + 'static {
    type Payload: Serialize + Clone + PartialEq;

    /// Collection path below the API base URL, without slashes.
    const PATH: &'static str;

    fn id(&self) -> u64;
}

impl Resource for User {
    type Payload = UserPayload;
    const PATH: &'static str = "utilisateurs";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Resource for NotificationEmail {
    type Payload = EmailPayload;
    const PATH: &'static str = "emails";

    fn id(&self) -> u64 {
        self.id
    }
}

/// Async CRUD surface for a [`Resource`].
// Driven from the single-threaded wasm executor, so the futures need not be Send.
#[allow(async_fn_in_trait)]
pub trait CrudApi<R: Resource> {
    async fn list(&self) -> Result<Vec<R>, ApiError>;
    async fn create(&self, payload: &R::Payload) -> Result<(), ApiError>;
    async fn update(&self, id: u64, payload: &R::Payload) -> Result<(), ApiError>;
    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}

impl<R: Resource> CrudApi<R> for ApiClient {
    async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.get_json(R::PATH).await
    }

    async fn create(&self, payload: &R::Payload) -> Result<(), ApiError> {
        self.post_discard(R::PATH, Some(payload)).await
    }

    async fn update(&self, id: u64, payload: &R::Payload) -> Result<(), ApiError> {
        self.put_discard(&format!("{}/{id}", R::PATH), payload).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.delete_discard(&format!("{}/{id}", R::PATH)).await
    }
}

/// A single mutating request.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation<P> {
    Create(P),
    Update(u64, P),
    Delete(u64),
}

impl<P> Mutation<P> {
    pub fn is_delete(&self) -> bool {
        matches!(self, Mutation::Delete(_))
    }
}

/// Per-page texts shown after a mutation or load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageTexts {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,
    pub load_failed: &'static str,
    pub confirm_delete: &'static str,
}

pub const USER_TEXTS: PageTexts = PageTexts {
    created: "Utilisateur ajouté avec succès.",
    updated: "Utilisateur modifié avec succès.",
    deleted: "Utilisateur supprimé avec succès.",
    save_failed: "Erreur lors de la sauvegarde.",
    delete_failed: "Erreur lors de la suppression. L'utilisateur est peut-être lié à d'autres données.",
    load_failed: "Erreur lors du chargement des utilisateurs.",
    confirm_delete: "Êtes-vous sûr de vouloir supprimer cet utilisateur ? Cette action est irréversible.",
};

pub const EMAIL_TEXTS: PageTexts = PageTexts {
    created: "Email ajouté avec succès.",
    updated: "Email modifié avec succès.",
    deleted: "Email supprimé avec succès.",
    save_failed: "Erreur lors de la sauvegarde.",
    delete_failed: "Erreur lors de la suppression.",
    load_failed: "Erreur lors du chargement des emails.",
    confirm_delete: "Êtes-vous sûr de vouloir supprimer cet email ? Cette action est irréversible.",
};

/// Result of [`run_mutation`].
#[derive(Clone, Debug, PartialEq)]
pub enum MutationOutcome<R> {
    /// Mutation and re-fetch both succeeded.
    Refreshed(Vec<R>),
    /// Mutation succeeded but the re-fetch failed.
    Stale(ApiError),
    /// The mutation itself failed; nothing was re-fetched.
    Failed(ApiError),
}

/// Send `mutation`, then re-fetch the list once if it succeeded.
pub async fn run_mutation<R, A>(api: &A, mutation: &Mutation<R::Payload>) -> MutationOutcome<R>
where
    R: Resource,
    A: CrudApi<R>,
{
    let sent = match mutation {
        Mutation::Create(payload) => api.create(payload).await,
        Mutation::Update(id, payload) => api.update(*id, payload).await,
        Mutation::Delete(id) => api.delete(*id).await,
    };
    if let Err(e) = sent {
        tracing::warn!("{} mutation failed: {}", R::PATH, e);
        return MutationOutcome::Failed(e);
    }
    tracing::info!("{} mutation applied, refreshing list", R::PATH);
    match api.list().await {
        Ok(rows) => MutationOutcome::Refreshed(rows),
        Err(e) => MutationOutcome::Stale(e),
    }
}

/// View state of a list/form page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListPage<R> {
    pub rows: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
    pub message: Option<String>,
    pub search: String,
    pub texts: PageTexts,
}

impl<R: Resource> ListPage<R> {
    pub fn new(texts: PageTexts) -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            error: None,
            message: None,
            search: String::new(),
            texts,
        }
    }

    /// Rows matching the current search term.
    pub fn visible(&self) -> Vec<&R> {
        filter_rows(&self.rows, &self.search)
    }

    /// Claim the page for one request. Returns `false` if one is in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        self.message = None;
        true
    }

    /// Apply the result of a list request.
    pub fn loaded(&mut self, result: Result<Vec<R>, ApiError>) {
        self.loading = false;
        match result {
            Ok(rows) => self.rows = rows,
            Err(e) => {
                tracing::error!("Failed to load {}: {}", R::PATH, e);
                self.error = Some(self.texts.load_failed.to_string());
            }
        }
    }

    /// Show a local validation failure without touching the rows.
    pub fn reject(&mut self, reason: impl ToString) {
        self.message = None;
        self.error = Some(reason.to_string());
    }

    /// Turn a delete request into a mutation, only if the user confirmed it.
    pub fn request_delete(&mut self, id: u64, confirmed: bool) -> Option<Mutation<R::Payload>> {
        self.error = None;
        self.message = None;
        confirmed.then_some(Mutation::Delete(id))
    }

    /// Apply the outcome of [`run_mutation`].
    ///
    /// Returns `true` when the mutation went through, in which case the caller
    /// clears its form.
    pub fn finish(&mut self, mutation: &Mutation<R::Payload>, outcome: MutationOutcome<R>) -> bool {
        self.loading = false;
        let success = match mutation {
            Mutation::Create(_) => self.texts.created,
            Mutation::Update(..) => self.texts.updated,
            Mutation::Delete(_) => self.texts.deleted,
        };
        match outcome {
            MutationOutcome::Refreshed(rows) => {
                self.rows = rows;
                self.message = Some(success.to_string());
                true
            }
            MutationOutcome::Stale(e) => {
                tracing::error!("Failed to refresh {}: {}", R::PATH, e);
                self.message = Some(success.to_string());
                self.error = Some(self.texts.load_failed.to_string());
                true
            }
            // Delete failures always show the fixed text; saves surface the
            // server message when there is one.
            MutationOutcome::Failed(e) => {
                self.error = Some(if mutation.is_delete() {
                    self.texts.delete_failed.to_string()
                } else {
                    e.user_message(self.texts.save_failed)
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use store::Role;

    use super::*;

    /// In-memory backend counting every call.
    #[derive(Default)]
    struct FakeUsers {
        rows: RefCell<Vec<User>>,
        lists: Cell<usize>,
        writes: Cell<usize>,
        fail_with: Option<ApiError>,
    }

    impl CrudApi<User> for FakeUsers {
        async fn list(&self) -> Result<Vec<User>, ApiError> {
            self.lists.set(self.lists.get() + 1);
            Ok(self.rows.borrow().clone())
        }

        async fn create(&self, payload: &UserPayload) -> Result<(), ApiError> {
            self.writes.set(self.writes.get() + 1);
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            let id = self.rows.borrow().len() as u64 + 1;
            self.rows.borrow_mut().push(User {
                id,
                nom: payload.nom.clone(),
                email: payload.email.clone(),
                role: payload.role,
            });
            Ok(())
        }

        async fn update(&self, id: u64, payload: &UserPayload) -> Result<(), ApiError> {
            self.writes.set(self.writes.get() + 1);
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            for row in self.rows.borrow_mut().iter_mut().filter(|r| r.id == id) {
                row.nom = payload.nom.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: u64) -> Result<(), ApiError> {
            self.writes.set(self.writes.get() + 1);
            if let Some(e) = &self.fail_with {
                return Err(e.clone());
            }
            self.rows.borrow_mut().retain(|r| r.id != id);
            Ok(())
        }
    }

    fn payload(nom: &str) -> UserPayload {
        UserPayload {
            nom: nom.into(),
            email: format!("{}@lab.ma", nom.to_lowercase()),
            role: Role::Utilisateur,
            mot_de_passe: Some("secret1".into()),
        }
    }

    #[tokio::test]
    async fn test_each_successful_mutation_refetches_once() {
        let api = FakeUsers::default();
        let mut page = ListPage::<User>::new(USER_TEXTS);

        let create = Mutation::Create(payload("Ana"));
        assert!(page.begin());
        let outcome = run_mutation(&api, &create).await;
        assert!(page.finish(&create, outcome));
        assert_eq!(api.lists.get(), 1);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.message.as_deref(), Some(USER_TEXTS.created));

        let update = Mutation::Update(1, payload("Anaïs"));
        assert!(page.begin());
        let outcome = run_mutation(&api, &update).await;
        assert!(page.finish(&update, outcome));
        assert_eq!(api.lists.get(), 2);
        assert_eq!(page.rows[0].nom, "Anaïs");

        let delete = page.request_delete(1, true).unwrap();
        assert!(page.begin());
        let outcome = run_mutation(&api, &delete).await;
        assert!(page.finish(&delete, outcome));
        assert_eq!(api.lists.get(), 3);
        assert!(page.rows.is_empty());
        assert_eq!(page.message.as_deref(), Some(USER_TEXTS.deleted));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_rows_and_shows_server_message() {
        let api = FakeUsers {
            fail_with: Some(ApiError::Status {
                status: 422,
                message: Some("Cet email existe déjà".into()),
            }),
            ..Default::default()
        };
        let mut page = ListPage::<User>::new(USER_TEXTS);
        page.loaded(Ok(vec![User {
            id: 1,
            nom: "Ana".into(),
            email: "ana@lab.ma".into(),
            role: Role::Admin,
        }]));

        let create = Mutation::Create(payload("Karim"));
        assert!(page.begin());
        let outcome = run_mutation(&api, &create).await;
        assert!(!page.finish(&create, outcome));
        assert_eq!(api.lists.get(), 0);
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.error.as_deref(), Some("Cet email existe déjà"));
        assert!(!page.loading);
    }

    #[tokio::test]
    async fn test_failed_delete_uses_fixed_text() {
        let api = FakeUsers {
            fail_with: Some(ApiError::Status {
                status: 409,
                message: Some("constraint".into()),
            }),
            ..Default::default()
        };
        let mut page = ListPage::<User>::new(USER_TEXTS);
        let delete = page.request_delete(3, true).unwrap();
        page.begin();
        let outcome = run_mutation(&api, &delete).await;
        assert!(!page.finish(&delete, outcome));
        assert_eq!(page.error.as_deref(), Some(USER_TEXTS.delete_failed));
    }

    #[test]
    fn test_declined_delete_issues_nothing() {
        let mut page = ListPage::<User>::new(USER_TEXTS);
        page.rows = vec![User {
            id: 1,
            nom: "Ana".into(),
            email: "ana@lab.ma".into(),
            role: Role::Admin,
        }];
        assert!(page.request_delete(1, false).is_none());
        assert_eq!(page.rows.len(), 1);
        assert!(!page.loading);
    }

    #[test]
    fn test_second_trigger_is_blocked_while_loading() {
        let mut page = ListPage::<NotificationEmail>::new(EMAIL_TEXTS);
        assert!(page.begin());
        assert!(!page.begin());
        page.loaded(Err(ApiError::Transport("offline".into())));
        assert_eq!(page.error.as_deref(), Some(EMAIL_TEXTS.load_failed));
        assert!(page.begin());
    }

    #[test]
    fn test_search_does_not_change_rows() {
        let mut page = ListPage::<NotificationEmail>::new(EMAIL_TEXTS);
        page.loaded(Ok(vec![
            NotificationEmail {
                id: 1,
                name: "Qualité".into(),
                adresse: "qa@lab.ma".into(),
            },
            NotificationEmail {
                id: 2,
                name: "Achats".into(),
                adresse: "achats@lab.ma".into(),
            },
        ]));
        page.search = "ACH".into();
        assert_eq!(page.visible().len(), 1);
        assert_eq!(page.rows.len(), 2);
    }
}
