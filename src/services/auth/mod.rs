pub mod factory;
pub mod jwt;
pub mod token_service;

pub use factory::build_token_service;
pub use jwt::{JwtConfigError, JwtTokenService};
pub use token_service::TokenService;
