//! Buffered backend response with JSON and binary accessors.

// crates.io
use http::{HeaderMap, StatusCode, header::CONTENT_TYPE};
// self
use crate::{_prelude::*, error::DecodeError};

/// Fully buffered HTTP response.
///
/// Interpretation belongs to the caller: the gateway hands back whatever the backend
/// answered, error statuses included.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	status: StatusCode,
	headers: HeaderMap,
	body: Bytes,
}
impl ApiResponse {
	/// Assembles a response from its parts.
	pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
		Self { status, headers, body: body.into() }
	}

	/// Builds a JSON response; handy for scripted transports.
	pub fn json_body(status: StatusCode, value: &serde_json::Value) -> Self {
		let mut headers = HeaderMap::new();

		headers.insert(CONTENT_TYPE, http::HeaderValue::from_static("application/json"));

		Self::new(status, headers, value.to_string())
	}

	/// HTTP status code.
	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// Returns `true` for 2xx statuses.
	pub fn ok(&self) -> bool {
		self.status.is_success()
	}

	/// Response headers.
	pub fn headers(&self) -> &HeaderMap {
		&self.headers
	}

	/// Returns a header value when it is valid visible ASCII.
	pub fn header_str(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	/// Decodes the body as JSON into `T`, reporting the failing path on mismatch.
	pub fn json<T>(&self) -> Result<T, DecodeError>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_slice(&self.body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| DecodeError::Json { source, status: self.status.as_u16() })
	}

	/// Raw body bytes (the blob view).
	pub fn bytes(&self) -> &Bytes {
		&self.body
	}

	/// Body decoded as UTF-8, replacing invalid sequences.
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}

	/// Consumes the response, returning the body.
	pub fn into_bytes(self) -> Bytes {
		self.body
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Grant {
		access: String,
	}

	#[test]
	fn json_decodes_and_reports_paths() {
		let response =
			ApiResponse::json_body(StatusCode::OK, &serde_json::json!({ "access": "A2" }));
		let grant: Grant = response.json().expect("Grant body should decode.");

		assert!(response.ok());
		assert_eq!(grant.access, "A2");
		assert_eq!(response.header_str("content-type"), Some("application/json"));

		let response =
			ApiResponse::json_body(StatusCode::OK, &serde_json::json!({ "access": 42 }));
		let err = response.json::<Grant>().expect_err("Numeric access token should not decode.");

		match err {
			DecodeError::Json { source, status } => {
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "access");
			},
		}
	}

	#[test]
	fn binary_accessors_expose_raw_bytes() {
		let response =
			ApiResponse::new(StatusCode::UNAUTHORIZED, HeaderMap::new(), vec![0xff, b'o', b'k']);

		assert!(!response.ok());
		assert_eq!(response.bytes().as_ref(), &[0xff, b'o', b'k']);
		assert_eq!(response.text(), "\u{fffd}ok");
		assert_eq!(response.into_bytes().len(), 3);
	}
}
