//! # API crate: typed access to the regulatory-tracking backend
//!
//! Every page of the dashboard is a thin view over the REST backend. This crate
//! holds everything those pages need that is not rendering: wire schemas,
//! form validation, the HTTP client wrapper, and the pure state transitions
//! the pages drive.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, default headers, bearer token, timeout, error logging |
//! | [`models`] | Serde schemas for users, emails, regulations, categories, reports, prompt |
//! | [`validate`] | Form structs turning raw field text into typed mutations |
//! | [`crud`] | Shared list/form/mutation page flow (users, notification emails) |
//! | [`regulations`] | Regulation endpoints, category merge, per-row report actions |
//! | [`reports`] | Reports, sent emails, global prompt endpoints |
//! | [`chat`] | Assistant transcript and reply normalisation |
//! | [`filter`] | Case-insensitive table search |
//! | [`dates`] | Timestamp parsing and French formatting |
//!
//! ## Endpoints
//!
//! - **Auth**: `login`
//! - **CRUD** (via [`crud::CrudApi`]): `/utilisateurs`, `/emails`
//! - **Regulations**: `regulations`, `categories`, `trigger_import`, `generate_report`, `regenerate_report`
//! - **Reports**: `reports`, `generate_manual_report`, `report_pdf_url`, `report_html_url`
//! - **Audit / config**: `sent_emails`, `global_prompt`, `save_global_prompt`
//! - **Assistant**: `ask`

pub mod chat;
pub mod client;
pub mod crud;
pub mod dates;
pub mod error;
pub mod filter;
pub mod models;
pub mod regulations;
pub mod reports;
pub mod validate;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::*;

pub use store::{DashboardConfig, Role, Session, SessionUser};
