use async_trait::async_trait;
use sqlx::PgPool;

use super::{DirectoryError, Subject, SubjectDirectory};
use crate::repos::subject_repo;

/// Postgres-backed directory over the `subjects` table.
#[derive(Clone, Debug)]
pub struct PgSubjectDirectory {
    db: PgPool,
}

impl PgSubjectDirectory {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubjectDirectory for PgSubjectDirectory {
    async fn load_by_id(&self, id: &str) -> Result<Subject, DirectoryError> {
        let row = subject_repo::get(&self.db, id)
            .await?
            .ok_or_else(|| DirectoryError::NotFound { id: id.to_string() })?;

        Ok(Subject {
            id: row.id,
            authorities: row.authorities,
        })
    }
}
