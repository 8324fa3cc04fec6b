//! Subject lookup.
//!
//! The authenticator only ever reads subjects; who provisions them and how
//! their authorities are managed is outside this crate.

mod memory;
mod pg;

use async_trait::async_trait;
use serde::Serialize;

use crate::repos::error::RepoError;

pub use memory::InMemorySubjectDirectory;
pub use pg::PgSubjectDirectory;

/// An identity record and the authorities granted to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub id: String,
    pub authorities: Vec<String>,
}

impl Subject {
    pub fn new(
        id: impl Into<String>,
        authorities: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            authorities: authorities.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("subject not found: {id}")]
    NotFound { id: String },

    /// Infrastructure failure; callers cannot recover locally.
    #[error("directory backend failure: {0}")]
    Backend(#[from] RepoError),
}

#[async_trait]
pub trait SubjectDirectory: Send + Sync {
    async fn load_by_id(&self, id: &str) -> Result<Subject, DirectoryError>;
}
