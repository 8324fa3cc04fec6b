/*
 * Responsibility
 * - SQLx access to the subjects table
 * - Takes a PgPool; never writes (the directory is read-only from here)
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct SubjectRow {
    #[sqlx(rename = "subjectId")]
    pub id: String,
    pub authorities: Vec<String>,
}

pub async fn get(db: &PgPool, subject_id: &str) -> Result<Option<SubjectRow>, RepoError> {
    let row = sqlx::query_as::<_, SubjectRow>(
        r#"
        SELECT "subjectId", COALESCE("authorities", ARRAY[]::text[]) AS "authorities"
        FROM subjects
        WHERE "subjectId" = $1
        "#,
    )
    .bind(subject_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
