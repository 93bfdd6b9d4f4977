//! Application state shared across request handlers.
//!
//! Initialized once during startup and cloned cheaply per request through
//! Axum's state extraction: the database connection is a pooled handle, the
//! login-code service is `Arc`-backed, and the upload config is small.

use sea_orm::DatabaseConnection;

use crate::server::{config::UploadConfig, service::auth::code::LoginCodeService};

#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the SQLite database.
    pub db: DatabaseConnection,

    /// Outstanding one-time login codes (bootstrap and admin-issued).
    pub login_codes: LoginCodeService,

    /// Upload directory and size ceiling.
    pub upload: UploadConfig,
}

impl AppState {
    pub fn new(db: DatabaseConnection, login_codes: LoginCodeService, upload: UploadConfig) -> Self {
        Self {
            db,
            login_codes,
            upload,
        }
    }
}
