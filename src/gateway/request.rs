//! Caller-facing request descriptor.

// crates.io
use http::{HeaderMap, HeaderName, HeaderValue, Method};
// self
use crate::{_prelude::*, http::MultipartForm};

/// Body of an [`ApiRequest`] before encoding.
#[derive(Clone, Debug)]
pub enum ApiBody {
	/// Value serialized as JSON; the gateway sets `Content-Type: application/json`.
	Json(serde_json::Value),
	/// Multipart upload; the gateway leaves `Content-Type` to the transport.
	Multipart(MultipartForm),
}

/// Partially specified request: target path (or absolute URL), method, extra headers,
/// and an optional body.
///
/// `Authorization` headers set here are discarded; the gateway always derives the
/// bearer header from the stored access token.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// Path relative to the base origin, or an absolute `http`/`https` URL.
	pub target: String,
	/// HTTP method.
	pub method: Method,
	/// Caller headers merged over the gateway defaults.
	pub headers: HeaderMap,
	/// Optional body.
	pub body: Option<ApiBody>,
}
impl ApiRequest {
	/// Creates a bodiless request.
	pub fn new(method: Method, target: impl Into<String>) -> Self {
		Self { target: target.into(), method, headers: HeaderMap::new(), body: None }
	}

	/// Shorthand for a `GET` request.
	pub fn get(target: impl Into<String>) -> Self {
		Self::new(Method::GET, target)
	}

	/// Shorthand for a `POST` request.
	pub fn post(target: impl Into<String>) -> Self {
		Self::new(Method::POST, target)
	}

	/// Shorthand for a `PUT` request.
	pub fn put(target: impl Into<String>) -> Self {
		Self::new(Method::PUT, target)
	}

	/// Shorthand for a `PATCH` request.
	pub fn patch(target: impl Into<String>) -> Self {
		Self::new(Method::PATCH, target)
	}

	/// Shorthand for a `DELETE` request.
	pub fn delete(target: impl Into<String>) -> Self {
		Self::new(Method::DELETE, target)
	}

	/// Adds (or appends another value to) a caller header.
	pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.append(name, value);

		self
	}

	/// Attaches a JSON body.
	pub fn json(mut self, body: serde_json::Value) -> Self {
		self.body = Some(ApiBody::Json(body));

		self
	}

	/// Attaches a multipart body.
	pub fn multipart(mut self, form: MultipartForm) -> Self {
		self.body = Some(ApiBody::Multipart(form));

		self
	}

	/// Returns `true` when the body is a multipart form.
	pub fn is_multipart(&self) -> bool {
		matches!(self.body, Some(ApiBody::Multipart(_)))
	}
}
