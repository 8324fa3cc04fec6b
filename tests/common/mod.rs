#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::http::{Request, request::Parts};
use bearer_gate::app;
use bearer_gate::middleware::auth::RequestAuthenticator;
use bearer_gate::middleware::http::HttpLimits;
use bearer_gate::repos::error::RepoError;
use bearer_gate::services::auth::TokenService;
use bearer_gate::services::directory::{
    DirectoryError, InMemorySubjectDirectory, Subject, SubjectDirectory,
};
use bearer_gate::state::AppState;

/// What the stub token service knows about one token.
#[derive(Clone)]
pub struct StubToken {
    pub subject_id: Option<String>,
    pub valid: bool,
}

/// TokenService double: answers from a fixed table and counts calls.
#[derive(Default)]
pub struct StubTokens {
    tokens: HashMap<String, StubToken>,
    pub extract_calls: AtomicUsize,
    pub validate_calls: AtomicUsize,
}

impl StubTokens {
    pub fn with(mut self, token: &str, subject_id: Option<&str>, valid: bool) -> Self {
        self.tokens.insert(
            token.to_string(),
            StubToken {
                subject_id: subject_id.map(str::to_string),
                valid,
            },
        );
        self
    }

    pub fn extract_calls(&self) -> usize {
        self.extract_calls.load(Ordering::SeqCst)
    }

    pub fn validate_calls(&self) -> usize {
        self.validate_calls.load(Ordering::SeqCst)
    }
}

impl TokenService for StubTokens {
    fn extract_subject_id(&self, token: &str) -> Option<String> {
        self.extract_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.get(token).and_then(|t| t.subject_id.clone())
    }

    fn is_valid(&self, token: &str, subject: &Subject) -> bool {
        self.validate_calls.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .get(token)
            .is_some_and(|t| t.valid && t.subject_id.as_deref() == Some(subject.id.as_str()))
    }
}

/// Directory whose backend is always down.
pub struct UnavailableDirectory;

#[async_trait]
impl SubjectDirectory for UnavailableDirectory {
    async fn load_by_id(&self, _id: &str) -> Result<Subject, DirectoryError> {
        Err(DirectoryError::Backend(RepoError::Db(sqlx::Error::PoolTimedOut)))
    }
}

pub fn alice() -> Subject {
    Subject::new("alice", ["ROLE_DENTIST"])
}

pub fn directory() -> Arc<InMemorySubjectDirectory> {
    Arc::new(InMemorySubjectDirectory::new([alice()]))
}

pub fn authenticator(
    tokens: Arc<dyn TokenService>,
    directory: Arc<dyn SubjectDirectory>,
) -> RequestAuthenticator {
    RequestAuthenticator::new(tokens, directory, "SESSION")
}

/// Request parts carrying the given `Authorization` header (if any).
pub fn parts(authorization: Option<&str>) -> Parts {
    let mut builder = Request::builder().uri("/api/v1/me");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(()).unwrap().into_parts().0
}

pub fn router(tokens: Arc<dyn TokenService>, directory: Arc<dyn SubjectDirectory>) -> Router {
    let state = AppState::new(Arc::new(authenticator(tokens, directory)));
    app::router(
        state,
        HttpLimits {
            timeout: Duration::from_secs(5),
            body_limit_bytes: 64 * 1024,
        },
    )
}
