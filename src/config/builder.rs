// self
use crate::{
	_prelude::*,
	config::{AuthEndpoints, GatewayConfig, SessionKeys, default_login_route},
};

/// Errors raised while constructing or validating configurations.
#[derive(Debug, ThisError)]
pub enum GatewayConfigError {
	/// JSON document could not be parsed.
	#[error("Gateway configuration is malformed.")]
	Parse {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Base origin must use HTTP or HTTPS.
	#[error("Base origin must use http or https: {url}.")]
	UnsupportedScheme {
		/// Origin that failed validation.
		url: String,
	},
	/// Base origin must not carry a query or fragment.
	#[error("Base origin must not carry a query or fragment: {url}.")]
	DecoratedOrigin {
		/// Origin that failed validation.
		url: String,
	},
	/// Endpoint paths are resolved against the base origin and must be absolute paths.
	#[error("The {endpoint} endpoint must start with '/': {path}.")]
	RelativeEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Path that failed validation.
		path: String,
	},
	/// Session slot names must be non-empty.
	#[error("Session key names cannot be empty.")]
	EmptySessionKey,
	/// Access and refresh tokens need separate slots.
	#[error("Access and refresh tokens share the session key `{key}`.")]
	SharedSessionKey {
		/// Key used by both slots.
		key: String,
	},
	/// Login route must be non-empty.
	#[error("Login route cannot be empty.")]
	EmptyLoginRoute,
}

/// Builder for [`GatewayConfig`] values.
#[derive(Debug)]
pub struct GatewayConfigBuilder {
	base_origin: Url,
	endpoints: AuthEndpoints,
	session_keys: SessionKeys,
	login_route: String,
}
impl GatewayConfigBuilder {
	/// Creates a new builder seeded with the provided base origin and default paths.
	pub fn new(base_origin: Url) -> Self {
		Self {
			base_origin,
			endpoints: AuthEndpoints::default(),
			session_keys: SessionKeys::default(),
			login_route: default_login_route(),
		}
	}

	/// Overrides the login endpoint path.
	pub fn login_path(mut self, path: impl Into<String>) -> Self {
		self.endpoints.login = path.into();

		self
	}

	/// Overrides the registration endpoint path.
	pub fn register_path(mut self, path: impl Into<String>) -> Self {
		self.endpoints.register = path.into();

		self
	}

	/// Overrides the refresh endpoint path.
	pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
		self.endpoints.refresh = path.into();

		self
	}

	/// Overrides the current-user endpoint path.
	pub fn current_user_path(mut self, path: impl Into<String>) -> Self {
		self.endpoints.current_user = path.into();

		self
	}

	/// Overrides the session slot names.
	pub fn session_keys(mut self, access: impl Into<String>, refresh: impl Into<String>) -> Self {
		self.session_keys = SessionKeys { access: access.into(), refresh: refresh.into() };

		self
	}

	/// Overrides the route passed to the invalidation hook.
	pub fn login_route(mut self, route: impl Into<String>) -> Self {
		self.login_route = route.into();

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<GatewayConfig, GatewayConfigError> {
		let config = GatewayConfig {
			base_origin: self.base_origin,
			endpoints: self.endpoints,
			session_keys: self.session_keys,
			login_route: self.login_route,
		};

		config.validate()?;

		Ok(config)
	}
}

impl GatewayConfig {
	/// Validates invariants for the configuration.
	pub(crate) fn validate(&self) -> Result<(), GatewayConfigError> {
		let origin = &self.base_origin;

		if !matches!(origin.scheme(), "http" | "https") || origin.cannot_be_a_base() {
			return Err(GatewayConfigError::UnsupportedScheme { url: origin.to_string() });
		}
		if origin.query().is_some() || origin.fragment().is_some() {
			return Err(GatewayConfigError::DecoratedOrigin { url: origin.to_string() });
		}

		validate_endpoint("login", &self.endpoints.login)?;
		validate_endpoint("register", &self.endpoints.register)?;
		validate_endpoint("refresh", &self.endpoints.refresh)?;
		validate_endpoint("current_user", &self.endpoints.current_user)?;

		let keys = &self.session_keys;

		if keys.access.trim().is_empty() || keys.refresh.trim().is_empty() {
			return Err(GatewayConfigError::EmptySessionKey);
		}
		if keys.access == keys.refresh {
			return Err(GatewayConfigError::SharedSessionKey { key: keys.access.clone() });
		}
		if self.login_route.trim().is_empty() {
			return Err(GatewayConfigError::EmptyLoginRoute);
		}

		Ok(())
	}
}

fn validate_endpoint(name: &'static str, path: &str) -> Result<(), GatewayConfigError> {
	if path.starts_with('/') {
		Ok(())
	} else {
		Err(GatewayConfigError::RelativeEndpoint { endpoint: name, path: path.to_owned() })
	}
}
