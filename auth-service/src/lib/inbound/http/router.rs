use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use token::TokenService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::health::health;
use super::handlers::me::me;
use super::middleware::authenticate as auth_middleware;
use crate::domain::identity::ports::IdentityRepository;

#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub identities: Arc<dyn IdentityRepository>,
}

pub fn create_router(
    token_service: Arc<TokenService>,
    identities: Arc<dyn IdentityRepository>,
) -> Router {
    let state = AppState {
        token_service,
        identities,
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .route("/health", get(health))
        .route("/api/me", get(me))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
