//! Gateway-level error types shared across the session, transport, and resource layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical gateway error exposed by public APIs.
///
/// HTTP statuses never show up here when going through [`Gateway::send`]; only the
/// account and resource helpers turn non-2xx replies into [`Error::Api`].
///
/// [`Gateway::send`]: crate::gateway::Gateway::send
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session storage failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::session::StoreError,
	),
	/// Local configuration or request construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS); never retried by the gateway.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body did not match the expected JSON shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Backend answered with a non-success status.
	#[error("Backend rejected the request with status {status}: {detail}.")]
	Api {
		/// HTTP status code returned by the backend.
		status: u16,
		/// Backend `detail` message, or the raw body when none was supplied.
		detail: String,
	},
	/// No access token is stored for the current session.
	#[error("No access token is stored; sign in first.")]
	Unauthenticated,
}
impl Error {
	/// Returns the HTTP status carried by [`Error::Api`], if any.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration and request-construction failures raised locally.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// A request target could not be resolved into a URL.
	#[error("Request target `{target}` does not resolve to a valid URL.")]
	InvalidTarget {
		/// Target as supplied by the caller after base-origin prefixing.
		target: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A header value (usually the bearer token) contains forbidden characters.
	#[error(transparent)]
	InvalidHeaderValue(#[from] ::http::header::InvalidHeaderValue),
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	EncodeBody(#[source] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the backend.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures raised while interpreting response bodies.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Response body is malformed JSON or misses required fields.
	#[error("Response body (status {status}) does not match the expected JSON shape.")]
	Json {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status of the response being decoded.
		status: u16,
	},
}
