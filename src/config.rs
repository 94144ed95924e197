//! Gateway configuration: one base origin shared by every call site, auth endpoint
//! paths, session key names, and the unauthenticated entry route.
//!
//! Values are assembled through [`GatewayConfigBuilder`] or deserialized from JSON with
//! [`GatewayConfig::from_json`]; both paths run the same validation.

/// Builder API for assembling gateway configurations.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Paths of the backend's authentication endpoints, relative to the base origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEndpoints {
	/// Credential exchange returning `{access, refresh}`.
	pub login: String,
	/// Account creation endpoint.
	pub register: String,
	/// Access-token refresh endpoint.
	pub refresh: String,
	/// Profile of the signed-in user.
	pub current_user: String,
}
impl Default for AuthEndpoints {
	fn default() -> Self {
		Self {
			login: "/api/auth/login/".into(),
			register: "/api/auth/register/".into(),
			refresh: "/api/auth/refresh/".into(),
			current_user: "/api/auth/current_user/".into(),
		}
	}
}

/// Names of the two session slots holding the credential pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionKeys {
	/// Slot holding the access token.
	pub access: String,
	/// Slot holding the refresh token.
	pub refresh: String,
}
impl Default for SessionKeys {
	fn default() -> Self {
		Self { access: "access".into(), refresh: "refresh".into() }
	}
}

/// Validated gateway configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
	/// Origin every relative request target is prefixed with.
	pub base_origin: Url,
	/// Authentication endpoint paths.
	#[serde(default)]
	pub endpoints: AuthEndpoints,
	/// Session slot names.
	#[serde(default)]
	pub session_keys: SessionKeys,
	/// Route handed to the invalidation hook when the session ends.
	#[serde(default = "default_login_route")]
	pub login_route: String,
}
impl GatewayConfig {
	/// Creates a new builder for the provided base origin.
	pub fn builder(base_origin: Url) -> GatewayConfigBuilder {
		GatewayConfigBuilder::new(base_origin)
	}

	/// Parses and validates a JSON document.
	pub fn from_json(raw: &str) -> Result<Self, GatewayConfigError> {
		let mut de = serde_json::Deserializer::from_str(raw);
		let config: Self = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| GatewayConfigError::Parse { source })?;

		config.validate()?;

		Ok(config)
	}

	/// Resolves a request target into a full URL.
	///
	/// Absolute `http`/`https` URLs are returned verbatim. Anything else is appended to the
	/// base origin as a string, so a base carrying a path prefix keeps it.
	pub fn resolve(&self, target: &str) -> Result<Url, ConfigError> {
		match Url::parse(target) {
			Ok(url) if matches!(url.scheme(), "http" | "https") => return Ok(url),
			_ => {},
		}

		let base = self.base_origin.as_str().trim_end_matches('/');
		let joined =
			if target.starts_with('/') { format!("{base}{target}") } else { format!("{base}/{target}") };

		Url::parse(&joined).map_err(|source| ConfigError::InvalidTarget { target: joined, source })
	}
}

fn default_login_route() -> String {
	"/login".into()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn config(base: &str) -> GatewayConfig {
		GatewayConfig::builder(Url::parse(base).expect("Base origin fixture should parse."))
			.build()
			.expect("Config fixture should build.")
	}

	#[test]
	fn relative_targets_are_prefixed_with_the_base_origin() {
		let config = config("https://api.example.com");

		assert_eq!(
			config.resolve("/api/projects/").expect("Relative path should resolve.").as_str(),
			"https://api.example.com/api/projects/",
		);
		assert_eq!(
			config.resolve("api/comments/").expect("Path without slash should resolve.").as_str(),
			"https://api.example.com/api/comments/",
		);
	}

	#[test]
	fn absolute_targets_are_used_verbatim() {
		let config = config("https://api.example.com");
		let resolved = config
			.resolve("http://files.example.org/blob/1?sig=abc")
			.expect("Absolute URL should resolve.");

		assert_eq!(resolved.as_str(), "http://files.example.org/blob/1?sig=abc");
	}

	#[test]
	fn base_path_prefix_is_preserved() {
		let config = config("https://example.com/backend/");

		assert_eq!(
			config.resolve("/api/auth/refresh/").expect("Refresh path should resolve.").as_str(),
			"https://example.com/backend/api/auth/refresh/",
		);
	}

	#[test]
	fn json_config_fills_defaults() {
		let config = GatewayConfig::from_json(r#"{"base_origin":"http://127.0.0.1:8000"}"#)
			.expect("Minimal JSON config should parse.");

		assert_eq!(config.endpoints, AuthEndpoints::default());
		assert_eq!(config.session_keys, SessionKeys::default());
		assert_eq!(config.login_route, "/login");
	}

	#[test]
	fn json_config_reports_the_failing_path() {
		let err = GatewayConfig::from_json(r#"{"base_origin":"http://h","endpoints":{"login":7}}"#)
			.expect_err("Numeric endpoint should be rejected.");

		match err {
			GatewayConfigError::Parse { source } =>
				assert_eq!(source.path().to_string(), "endpoints.login"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}
}
