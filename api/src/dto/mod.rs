pub mod auth;

pub use auth::{AuthRequest, ClaimsResponse, TokenResponse};
