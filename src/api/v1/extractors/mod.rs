pub mod auth_ctx;

pub use auth_ctx::{AuthState, Authentication, CurrentAuth, RequestMetadata, RequireAuth};
