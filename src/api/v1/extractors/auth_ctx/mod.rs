/*!
 * Authentication context extractors
 *
 * Responsibility:
 * - Hand the per-request authentication state (AuthState) to handlers
 * - axum-specific code stays in core; the types live in types
 *
 * Public API:
 * - AuthState, Authentication, RequestMetadata
 * - CurrentAuth, RequireAuth
 */

mod core;
mod types;

pub use self::core::{CurrentAuth, RequireAuth};
pub use types::{AuthState, Authentication, RequestMetadata};
