use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::fmt;

use crate::config::AccessKey;
use crate::services::auth::TokenService;
use crate::services::directory::Subject;

/// Raised while building the verifier (bad key material).
#[derive(Debug, thiserror::Error)]
pub enum JwtConfigError {
    #[error("invalid access token key: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("access token secret is empty")]
    EmptySecret,
}

// exp/iss/aud are enforced by `Validation`; only the subject is read back.
#[derive(Debug, Deserialize)]
struct AccessTokenClaims {
    sub: String,
}

/// JWT-backed [`TokenService`] (HS256 shared secret or EdDSA public key).
#[derive(Clone)]
pub struct JwtTokenService {
    decoding_key: DecodingKey,
    // signature + iss/aud, expiry ignored
    extraction: Validation,
    // signature + iss/aud + exp (with leeway)
    validation: Validation,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtTokenService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(
        key: &AccessKey,
        issuer: Option<&str>,
        audience: Option<&str>,
        leeway_seconds: u64,
    ) -> Result<Self, JwtConfigError> {
        let (decoding_key, algorithm) = match key {
            AccessKey::Secret(secret) => {
                if secret.is_empty() {
                    return Err(JwtConfigError::EmptySecret);
                }
                (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256)
            }
            AccessKey::Ed25519PublicPem(pem) => {
                (DecodingKey::from_ed_pem(pem.as_bytes())?, Algorithm::EdDSA)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = leeway_seconds;
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        if let Some(iss) = issuer {
            validation.set_issuer(&[iss]);
        }

        let mut extraction = validation.clone();
        extraction.validate_exp = false;
        extraction.set_required_spec_claims(&["sub"]);

        Ok(Self {
            decoding_key,
            extraction,
            validation,
        })
    }

    fn decode(
        &self,
        token: &str,
        validation: &Validation,
    ) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, validation)?;
        Ok(data.claims)
    }
}

impl TokenService for JwtTokenService {
    fn extract_subject_id(&self, token: &str) -> Option<String> {
        match self.decode(token, &self.extraction) {
            Ok(claims) => {
                let sub = claims.sub.trim();
                (!sub.is_empty()).then(|| sub.to_string())
            }
            Err(err) => {
                tracing::debug!(error = %err, "bearer token does not name a subject");
                None
            }
        }
    }

    fn is_valid(&self, token: &str, subject: &Subject) -> bool {
        match self.decode(token, &self.validation) {
            Ok(claims) => claims.sub.trim() == subject.id,
            Err(err) => {
                tracing::debug!(error = %err, subject = %subject.id, "bearer token rejected");
                false
            }
        }
    }
}
