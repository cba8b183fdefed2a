pub mod credentials;
pub mod crypto;
pub mod token;
