use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedIdentity;

/// Return the authenticated principal, or 401 when the request carried no
/// usable credentials.
pub async fn me(
    auth: Option<Extension<AuthenticatedIdentity>>,
) -> Result<ApiSuccess<MeResponseData>, ApiError> {
    match auth {
        Some(Extension(authenticated)) => Ok(ApiSuccess::new(
            StatusCode::OK,
            MeResponseData::from(&authenticated),
        )),
        None => Err(ApiError::Unauthorized(
            "Authentication required".to_string(),
        )),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseData {
    pub subject: String,
    pub email: String,
}

impl From<&AuthenticatedIdentity> for MeResponseData {
    fn from(authenticated: &AuthenticatedIdentity) -> Self {
        Self {
            subject: authenticated.subject.clone(),
            email: authenticated.identity.email.as_str().to_string(),
        }
    }
}
