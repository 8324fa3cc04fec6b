/*
 * Responsibility
 * - The per-request authentication slot as seen by handlers
 * - The authentication middleware fills it in request extensions; handlers only read it
 *
 * Notes
 * - Token verification and subject lookup belong to middleware/services
 * - This file is the contract between the two
 */
use std::net::SocketAddr;

use serde::Serialize;

use crate::services::directory::Subject;

/// Where the authenticated request came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestMetadata {
    pub remote_addr: Option<SocketAddr>,
    pub session_id: Option<String>,
    pub request_id: Option<String>,
}

/// A successful authentication: who, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub subject: Subject,
    pub metadata: RequestMetadata,
}

impl Authentication {
    pub fn new(subject: Subject, metadata: RequestMetadata) -> Self {
        Self { subject, metadata }
    }

    pub fn subject_id(&self) -> &str {
        &self.subject.id
    }

    pub fn has_authority(&self, authority: &str) -> bool {
        self.subject.authorities.iter().any(|a| a == authority)
    }
}

/// Authentication slot carried in request extensions.
///
/// Moves at most once per request, from `Unauthenticated` to `Authenticated`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Authentication),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn authentication(&self) -> Option<&Authentication> {
        match self {
            Self::Authenticated(auth) => Some(auth),
            Self::Unauthenticated => None,
        }
    }
}
