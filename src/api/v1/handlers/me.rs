/*
 * Responsibility
 * - GET /me: who the bearer token authenticated as
 * - 401 when the request is not authenticated (RequireAuth)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::{RequestMetadata, RequireAuth};

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub subject_id: String,
    pub authorities: Vec<String>,
    pub request: RequestMetadata,
}

pub async fn me(RequireAuth(auth): RequireAuth) -> Json<MeResponse> {
    Json(MeResponse {
        subject_id: auth.subject_id().to_string(),
        authorities: auth.subject.authorities,
        request: auth.metadata,
    })
}
