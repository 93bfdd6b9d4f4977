use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    service::auth::code::{CodeGrant, LoginCodeService},
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes the connection pool from the configured database URL and
/// brings the schema up to date before the application touches it.
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same SQLite database.
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<tower_sessions::SessionManagerLayer<tower_sessions_sqlx_store::SqliteStore>, AppError> {
    use time::Duration;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::SqliteStore;

    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store.migrate().await.map_err(|e| {
        AppError::InternalError(format!("Failed to migrate session store: {}", e))
    })?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Issues and logs a one-time bootstrap code when no admin account exists,
/// so the first operator can claim the admin account via `/api/auth/login`.
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    login_codes: &LoginCodeService,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let code = login_codes.issue(CodeGrant::BootstrapAdmin).await;

    tracing::info!(
        "No admin user exists. Claim the admin account within {}s: POST /api/auth/login with {{\"code\": \"{}\", \"email\": \"<your email>\"}}",
        login_codes.ttl_seconds(),
        code
    );

    Ok(())
}
