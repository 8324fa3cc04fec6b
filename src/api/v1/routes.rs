/*
 * Responsibility
 * - URL layout of v1
 * - The bearer middleware is applied to the whole tree by the caller; routes
 *   that need a subject say so through their extractors
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::me};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
}
