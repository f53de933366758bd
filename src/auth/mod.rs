pub mod authorize;
pub mod credentials;
pub mod token;
