//! Bearer token -> AuthState.
//!
//! Reads `Authorization: Bearer <token>`, asks the token service who the
//! token names, loads that subject and, if the token is valid for it, marks
//! the request authenticated. Missing, malformed, unknown or expired
//! credentials are not errors here; the state just stays `Unauthenticated`
//! and handlers decide what that means.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use axum::http::{HeaderMap, header, request::Parts};
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;

use crate::api::v1::extractors::{AuthState, Authentication, RequestMetadata};
use crate::error::AppError;
use crate::services::auth::TokenService;
use crate::services::directory::{DirectoryError, SubjectDirectory};

/// Case-sensitive scheme prefix of a bearer credential.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Token carried in the `Authorization` header, if it has the bearer shape.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty())
}

#[derive(Clone)]
pub struct RequestAuthenticator {
    tokens: Arc<dyn TokenService>,
    directory: Arc<dyn SubjectDirectory>,
    session_cookie_name: String,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator")
            .field("session_cookie_name", &self.session_cookie_name)
            .finish_non_exhaustive()
    }
}

impl RequestAuthenticator {
    pub fn new(
        tokens: Arc<dyn TokenService>,
        directory: Arc<dyn SubjectDirectory>,
        session_cookie_name: impl Into<String>,
    ) -> Self {
        Self {
            tokens,
            directory,
            session_cookie_name: session_cookie_name.into(),
        }
    }

    /// Populate `state` from the request's bearer token.
    ///
    /// Only a directory backend failure is returned as an error. `state` is
    /// written at most once, at the very end, and never when it is already
    /// `Authenticated`.
    #[instrument(skip_all, name = "auth.authenticate")]
    pub async fn authenticate(&self, parts: &Parts, state: &mut AuthState) -> Result<(), AppError> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(());
        };

        let Some(subject_id) = self.tokens.extract_subject_id(token) else {
            tracing::debug!("bearer token carries no usable subject");
            return Ok(());
        };

        if state.is_authenticated() {
            return Ok(());
        }

        let subject = match self.directory.load_by_id(&subject_id).await {
            Ok(subject) => subject,
            Err(DirectoryError::NotFound { id }) => {
                tracing::debug!(subject = %id, "bearer token names an unknown subject");
                return Ok(());
            }
            Err(DirectoryError::Backend(err)) => return Err(err.into()),
        };

        if !self.tokens.is_valid(token, &subject) {
            tracing::debug!(subject = %subject.id, "bearer token is not valid for subject");
            return Ok(());
        }

        tracing::debug!(subject = %subject.id, "request authenticated");
        let metadata = self.request_metadata(parts);
        *state = AuthState::Authenticated(Authentication::new(subject, metadata));

        Ok(())
    }

    fn request_metadata(&self, parts: &Parts) -> RequestMetadata {
        let remote_addr = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        let session_id = CookieJar::from_headers(&parts.headers)
            .get(&self.session_cookie_name)
            .map(|c| c.value().to_string());

        let request_id = parts
            .headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        RequestMetadata {
            remote_addr,
            session_id,
            request_id,
        }
    }
}
