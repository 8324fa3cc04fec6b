/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 * - Cloned per request, so everything inside is behind an Arc
 */
use std::sync::Arc;

use crate::middleware::auth::RequestAuthenticator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<RequestAuthenticator>,
}

impl AppState {
    pub fn new(authenticator: Arc<RequestAuthenticator>) -> Self {
        Self { authenticator }
    }
}
