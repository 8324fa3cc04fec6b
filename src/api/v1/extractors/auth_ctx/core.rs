use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::{AuthState, Authentication};

/// Whatever the authentication middleware decided for this request.
///
/// Never rejects: a request that bypassed the middleware reads as `Unauthenticated`.
pub struct CurrentAuth(pub AuthState);

impl<S> FromRequestParts<S> for CurrentAuth
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentAuth(
            parts
                .extensions
                .get::<AuthState>()
                .cloned()
                .unwrap_or_default(),
        ))
    }
}

/// Requires an authenticated request; otherwise responds 401.
///
/// This is where missing authentication turns into a rejection. The middleware
/// itself never rejects.
pub struct RequireAuth(pub Authentication);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthState>()
            .and_then(AuthState::authentication)
            .cloned()
            .map(RequireAuth)
            .ok_or(AppError::Unauthorized)
    }
}
