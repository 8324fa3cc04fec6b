use crate::services::directory::Subject;

/// Verifies bearer tokens on behalf of the request authenticator.
///
/// Both calls are infallible from the caller's point of view: a token that
/// cannot be parsed, has a bad signature, or has expired simply yields
/// `None` / `false`.
pub trait TokenService: Send + Sync {
    /// Subject identifier embedded in `token`, if the token can be trusted to name one.
    fn extract_subject_id(&self, token: &str) -> Option<String>;

    /// Whether `token` is currently valid for `subject` (integrity, expiry, subject binding).
    fn is_valid(&self, token: &str, subject: &Subject) -> bool;
}
