use std::sync::Arc;

use auth_service::config::Config;
use auth_service::domain::identity::ports::IdentityRepository;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryIdentityRepository;
use chrono::Duration;
use token::TokenService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        access_token_ttl_ms = config.jwt.expiration_ms,
        refresh_token_ttl_ms = config.jwt.refresh_token.expiration_ms,
        directory_size = config.directory.identities.len(),
        "Configuration loaded"
    );

    // A signing secret that cannot be decoded or is too short is fatal at
    // startup, never discovered on the first request.
    let token_service = Arc::new(TokenService::new(
        &config.jwt.secret_key,
        Duration::milliseconds(config.jwt.expiration_ms),
        Duration::milliseconds(config.jwt.refresh_token.expiration_ms),
    )?);

    let identities: Arc<dyn IdentityRepository> = Arc::new(
        InMemoryIdentityRepository::from_emails(config.directory.identities.clone())?,
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(token_service, identities);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
