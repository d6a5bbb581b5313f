mod auth;
mod ytauth;

pub use auth::TokenManager;
pub use ytauth::YtTokenManager;
