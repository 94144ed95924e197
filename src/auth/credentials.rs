//! Session credential pair and the wire shapes of the token endpoints.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Access + refresh tokens issued by the login endpoint.
///
/// The struct doubles as the decoded login response (`{"access": .., "refresh": ..}`);
/// unknown fields in that response are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
	/// Short-lived bearer credential.
	pub access: TokenSecret,
	/// Longer-lived credential exchanged for new access tokens.
	pub refresh: TokenSecret,
}
impl CredentialPair {
	/// Builds a pair from raw token strings.
	pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
		Self { access: TokenSecret::new(access), refresh: TokenSecret::new(refresh) }
	}
}

/// Body posted to the refresh endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct RefreshRequest<'a> {
	pub(crate) refresh: &'a str,
}

/// Success body returned by the refresh endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshGrant {
	pub(crate) access: String,
}

/// Body posted to the login endpoint.
#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
	pub(crate) username: &'a str,
	pub(crate) password: &'a str,
}
