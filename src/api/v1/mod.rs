/*
 * Responsibility
 * - Public face of v1 (re-exports routes())
 */
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
