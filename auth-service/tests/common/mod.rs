use std::sync::Arc;

use auth_service::domain::identity::ports::IdentityRepository;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryIdentityRepository;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Duration;
use token::TokenService;

const TEST_SECRET_BYTES: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        Self::spawn_with_identities(vec![
            "alice@example.com".to_string(),
            "bob@example.com".to_string(),
        ])
        .await
    }

    /// Spawn the application with a custom identity directory
    pub async fn spawn_with_identities(identities: Vec<String>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let secret = BASE64.encode(TEST_SECRET_BYTES);

        let token_service = Arc::new(
            TokenService::new(&secret, Duration::minutes(15), Duration::days(7))
                .expect("Failed to build token service for tests"),
        );

        let repository: Arc<dyn IdentityRepository> = Arc::new(
            InMemoryIdentityRepository::from_emails(identities)
                .expect("Failed to build identity directory for tests"),
        );

        let router = create_router(Arc::clone(&token_service), repository);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(&secret, Duration::minutes(15), Duration::days(7))
                .expect("Failed to build token service for tests"),
        }
    }

    /// Issue an access token signed with the server's secret
    pub fn create_token(&self, subject: &str) -> String {
        self.token_service
            .generate_access_token(subject)
            .expect("Failed to generate token")
    }

    /// Issue a token that expired before it was even sent
    pub fn create_expired_token(&self, subject: &str) -> String {
        let secret = BASE64.encode(TEST_SECRET_BYTES);
        let lapsed = TokenService::new(&secret, Duration::milliseconds(-1), Duration::days(7))
            .expect("Failed to build token service for tests");
        lapsed
            .generate_access_token(subject)
            .expect("Failed to generate token")
    }

    /// Issue a token signed with a different secret than the server's
    pub fn create_foreign_token(&self, subject: &str) -> String {
        let secret = BASE64.encode(b"another-secret-entirely-with-enough-bytes-in-it");
        let foreign = TokenService::new(&secret, Duration::minutes(15), Duration::days(7))
            .expect("Failed to build token service for tests");
        foreign
            .generate_access_token(subject)
            .expect("Failed to generate token")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
