//! JWT values held in session slots and rendered into `Authorization: Bearer` headers.

// self
use crate::_prelude::*;

/// An access or refresh JWT as stored in a session slot.
///
/// `Debug` and `Display` print `<redacted>`, so logged requests never carry credentials.
/// The raw value is reached through [`TokenSecret::expose`] when building the bearer header
/// or the refresh request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a token read from a session slot or a login reply.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Wraps the value unless it is blank; backend replies with an empty `access` count as missing.
	pub fn non_empty(value: impl Into<String>) -> Option<Self> {
		let value = value.into();

		if value.trim().is_empty() { None } else { Some(Self(value)) }
	}

	/// Returns the raw JWT for the bearer header or the refresh body.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn formatting_never_prints_the_jwt() {
		let secret = TokenSecret::new("eyJhbGciOiJIUzI1NiJ9.e30.sig");

		assert_eq!(format!("{secret:?}"), "TokenSecret(\"<redacted>\")");
		assert_eq!(format!("{secret}"), "<redacted>");
		assert_eq!(secret.expose(), "eyJhbGciOiJIUzI1NiJ9.e30.sig");
	}

	#[test]
	fn non_empty_rejects_blank_values() {
		assert!(TokenSecret::non_empty("").is_none());
		assert!(TokenSecret::non_empty("  ").is_none());
		assert_eq!(TokenSecret::non_empty("A2").map(|s| s.expose().to_owned()), Some("A2".into()));
	}

	#[test]
	fn session_slots_persist_the_plain_token() {
		let payload = serde_json::to_string(&TokenSecret::new("R1"))
			.expect("Session slot should serialize to JSON.");

		assert_eq!(payload, "\"R1\"");
	}
}
