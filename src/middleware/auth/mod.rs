pub mod access;
pub mod authenticator;

pub use authenticator::{BEARER_PREFIX, RequestAuthenticator, bearer_token};
