//! Bearer-token request authentication for axum services.
//!
//! Every request passes through [`middleware::auth::access`], which runs the
//! [`RequestAuthenticator`](middleware::auth::RequestAuthenticator) and leaves
//! an [`AuthState`](api::v1::extractors::AuthState) in the request
//! extensions. Handlers read it with
//! [`CurrentAuth`](api::v1::extractors::CurrentAuth) or demand it with
//! [`RequireAuth`](api::v1::extractors::RequireAuth).

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
