mod error;
mod service;
mod types;

pub use error::AuthError;
pub use service::AuthService;
pub use types::Credentials;
