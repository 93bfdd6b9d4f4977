mod model;
mod server;

use server::{
    config::Config, error::AppError, service::auth::code::LoginCodeService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    let login_codes = LoginCodeService::new();
    startup::check_for_admin(&db, &login_codes).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    let app = server::router::router(&config)
        .with_state(AppState::new(db, login_codes, config.upload.clone()))
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
