use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::identity::models::Identity;
use crate::inbound::http::router::AppState;

/// Extension type carrying the authenticated principal through the request.
///
/// Present on a request only when the bearer token it carried was verified
/// and its subject resolved against the identity directory.
#[derive(Debug, Clone)]
pub struct AuthenticatedIdentity {
    pub subject: String,
    pub identity: Identity,
}

/// Middleware that authenticates bearer tokens and records the principal in
/// request extensions.
///
/// Requests without credentials, or with credentials that fail any check,
/// continue down the stack unauthenticated. Rejecting them is left to the
/// handlers that require a principal.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let token = match extract_bearer_token(&req) {
        Some(token) => token.to_string(),
        None => return next.run(req).await,
    };

    if req.extensions().get::<AuthenticatedIdentity>().is_some() {
        return next.run(req).await;
    }

    let subject = match state.token_service.extract_subject(&token) {
        Ok(subject) => subject,
        Err(e) => {
            tracing::warn!("Rejected bearer token: {}", e);
            return next.run(req).await;
        }
    };

    let identity = match state.identities.find_by_email(&subject).await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            tracing::debug!(subject = %subject, "Token subject not present in directory");
            return next.run(req).await;
        }
        Err(e) => {
            tracing::warn!("Identity lookup failed: {}", e);
            return next.run(req).await;
        }
    };

    if !state.token_service.is_token_valid(&token, &subject) {
        tracing::warn!(subject = %subject, "Bearer token failed validation");
        return next.run(req).await;
    }

    req.extensions_mut()
        .insert(AuthenticatedIdentity { subject, identity });

    next.run(req).await
}

/// Pull the token out of a `Bearer` Authorization header.
///
/// The scheme is matched exactly, with a single space before the token.
fn extract_bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
