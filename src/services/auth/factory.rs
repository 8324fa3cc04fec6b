/// Factory: build the token verifier from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{JwtConfigError, JwtTokenService};

pub fn build_token_service(config: &Config) -> Result<Arc<JwtTokenService>, JwtConfigError> {
    let tokens = JwtTokenService::new(
        &config.access_key,
        config.auth_issuer.as_deref(),
        config.auth_audience.as_deref(),
        config.access_token_leeway_seconds,
    )?;

    Ok(Arc::new(tokens))
}
