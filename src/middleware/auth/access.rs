//! Bearer authentication middleware -> AuthState in request extensions.
//!
//! Runs the [`RequestAuthenticator`](super::RequestAuthenticator) for every
//! request and always hands the request on. Whether an unauthenticated
//! request may proceed is decided by the handler (see `RequireAuth`).

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthState;
use crate::error::AppError;
use crate::state::AppState;

/// Attach the authentication middleware to every route of `router`.
///
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8's from_fn cannot take a State extractor, so hand the state over with from_fn_with_state
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    // An outer layer may already have authenticated this request.
    let mut auth_state = parts.extensions.remove::<AuthState>().unwrap_or_default();

    state
        .authenticator
        .authenticate(&parts, &mut auth_state)
        .await?;

    // middleware -> extractor hand-off
    parts.extensions.insert(auth_state);

    Ok(next.run(Request::from_parts(parts, body)).await)
}
