//! Credential models: redacted token secrets and the session credential pair.

pub mod credentials;
pub mod secret;

pub use credentials::*;
pub use secret::*;
