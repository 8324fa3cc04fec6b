/*
 * Responsibility
 * - Public surface of the middleware layers (auth::access::apply, http::apply)
 */
pub mod auth;
pub mod http;
