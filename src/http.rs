//! Transport primitives for backend calls.
//!
//! The module exposes [`HttpTransport`] alongside the transport-neutral
//! [`OutboundRequest`] and [`ApiResponse`] types so front ends can plug in any HTTP stack
//! (or a scripted fake in tests) without the gateway knowing about it. The default
//! `reqwest` feature provides [`ReqwestTransport`].

pub mod multipart;
pub mod response;

pub use multipart::*;
pub use response::*;

// crates.io
use http::{HeaderMap, Method};
// self
use crate::{_prelude::*, error::TransportError};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Boxed future returned by [`HttpTransport::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing gateway requests.
///
/// The trait is the gateway's only dependency on a network client. Implementations must
/// be `Send + Sync + 'static` so one transport can be shared by every clone of a
/// gateway, and must return HTTP error statuses as ordinary responses: only failures
/// that prevent a response from arriving belong in [`TransportError`].
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and buffers the full response body.
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_>;
}

/// Fully resolved request handed to an [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct OutboundRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute target URL.
	pub url: Url,
	/// Final header set; transports add only what the body encoding requires.
	pub headers: HeaderMap,
	/// Optional body.
	pub body: Option<RequestBody>,
}
impl OutboundRequest {
	/// Returns `true` when the body is a multipart form.
	pub fn is_multipart(&self) -> bool {
		matches!(self.body, Some(RequestBody::Multipart(_)))
	}
}

/// Encoded request body.
#[derive(Clone, Debug)]
pub enum RequestBody {
	/// Pre-encoded JSON document.
	Json(Bytes),
	/// Multipart form; the transport picks the boundary and sets `Content-Type`.
	Multipart(MultipartForm),
}

/// [`HttpTransport`] backed by a shared [`ReqwestClient`].
///
/// Redirects are not followed so a `Location` reply reaches the caller untouched.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestTransport(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestTransport {
	/// Builds a transport with a fresh client that never follows redirects.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().redirect(reqwest::redirect::Policy::none()).build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestTransport {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl HttpTransport for ReqwestTransport {
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let OutboundRequest { method, url, headers, body } = request;
			let builder = self.0.request(method, url).headers(headers);
			let builder = match body {
				Some(RequestBody::Json(bytes)) => builder.body(bytes),
				Some(RequestBody::Multipart(form)) => builder.multipart(form.into_reqwest()?),
				None => builder,
			};
			let response = builder.send().await?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await?;

			Ok(ApiResponse::new(status, headers, body))
		})
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
