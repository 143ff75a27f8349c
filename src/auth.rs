//! OAuth client-credentials authentication against the gateway.

pub mod authenticator;
pub mod secret;
pub mod token;

pub use authenticator::*;
pub use secret::*;
pub use token::*;
