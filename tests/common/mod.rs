//! Helpers shared by the integration tests: a scripted transport, a recording
//! invalidation hook, and gateway builders.

#![allow(dead_code)]

// std
use std::{collections::VecDeque, sync::Arc};
// crates.io
use parking_lot::Mutex;
// self
use collab_gateway::{
	auth::TokenSecret,
	config::GatewayConfig,
	error::TransportError,
	gateway::Gateway,
	http::{ApiResponse, HttpTransport, OutboundRequest, RequestBody, TransportFuture},
	http_types::{HeaderValue, StatusCode},
	session::{MemorySessionStore, SessionStore},
	url::Url,
};

/// Base origin used by transport-free tests.
pub const BASE: &str = "https://api.example.com";

/// Transport that replays queued replies and records every request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
	replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
	requests: Mutex<Vec<OutboundRequest>>,
}
impl ScriptedTransport {
	pub fn new(replies: impl IntoIterator<Item = Result<ApiResponse, TransportError>>) -> Self {
		Self { replies: Mutex::new(replies.into_iter().collect()), requests: Default::default() }
	}

	pub fn requests(&self) -> Vec<OutboundRequest> {
		self.requests.lock().clone()
	}

	pub fn remaining(&self) -> usize {
		self.replies.lock().len()
	}
}
impl HttpTransport for ScriptedTransport {
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
		let target = request.url.to_string();

		self.requests.lock().push(request);

		let reply = self.replies.lock().pop_front();

		Box::pin(async move {
			reply.unwrap_or_else(|| panic!("No scripted reply left for {target}."))
		})
	}
}

/// Collects every route handed to the invalidation hook.
#[derive(Clone, Default)]
pub struct RecordingHook(Arc<Mutex<Vec<String>>>);
impl RecordingHook {
	pub fn routes(&self) -> Vec<String> {
		self.0.lock().clone()
	}

	pub fn install<T>(&self, gateway: Gateway<T>) -> Gateway<T>
	where
		T: ?Sized + HttpTransport,
	{
		let routes = self.0.clone();

		gateway.with_invalidation_hook(move |route: &str| routes.lock().push(route.to_owned()))
	}
}

pub fn reply(status: u16, body: serde_json::Value) -> Result<ApiResponse, TransportError> {
	let status = StatusCode::from_u16(status).expect("Scripted status should be valid.");

	Ok(ApiResponse::json_body(status, &body))
}

pub fn config(base: &str) -> GatewayConfig {
	GatewayConfig::builder(Url::parse(base).expect("Base origin fixture should parse."))
		.build()
		.expect("Gateway config fixture should build.")
}

pub fn scripted_gateway(
	replies: impl IntoIterator<Item = Result<ApiResponse, TransportError>>,
) -> (Gateway<ScriptedTransport>, Arc<ScriptedTransport>, MemorySessionStore, RecordingHook) {
	let transport = Arc::new(ScriptedTransport::new(replies));
	let store = MemorySessionStore::default();
	let hook = RecordingHook::default();
	let gateway = hook.install(Gateway::with_transport(
		config(BASE),
		Arc::new(store.clone()),
		transport.clone(),
	));

	(gateway, transport, store, hook)
}

pub async fn seed(store: &MemorySessionStore, access: Option<&str>, refresh: Option<&str>) {
	if let Some(access) = access {
		store.set("access", TokenSecret::new(access)).await.expect("Seeding access should succeed.");
	}
	if let Some(refresh) = refresh {
		store.set("refresh", TokenSecret::new(refresh)).await.expect("Seeding refresh should succeed.");
	}
}

pub fn stored(store: &MemorySessionStore, key: &str) -> Option<String> {
	store.snapshot().get(key).map(|secret| secret.expose().to_owned())
}

pub fn header<'a>(request: &'a OutboundRequest, name: &str) -> Option<&'a str> {
	request.headers.get(name).and_then(|value: &HeaderValue| value.to_str().ok())
}

pub fn json_body(request: &OutboundRequest) -> serde_json::Value {
	match &request.body {
		Some(RequestBody::Json(bytes)) =>
			serde_json::from_slice(bytes).expect("Recorded JSON body should decode."),
		other => panic!("Expected a JSON body, got {other:?}."),
	}
}

#[cfg(feature = "reqwest")]
pub use reqwest_support::*;
#[cfg(feature = "reqwest")]
mod reqwest_support {
	// crates.io
	use httpmock::MockServer;
	// self
	use super::*;
	use collab_gateway::{
		http::ReqwestTransport,
		reqwest::{Client, redirect::Policy},
	};

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_transport() -> ReqwestTransport {
		let client = Client::builder()
			.danger_accept_invalid_certs(true)
			.redirect(Policy::none())
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestTransport::with_client(client)
	}

	pub fn mock_gateway(
		server: &MockServer,
	) -> (Gateway<ReqwestTransport>, MemorySessionStore, RecordingHook) {
		let store = MemorySessionStore::default();
		let hook = RecordingHook::default();
		let gateway = hook.install(Gateway::with_transport(
			config(&server.base_url()),
			Arc::new(store.clone()) as Arc<dyn SessionStore>,
			test_reqwest_transport(),
		));

		(gateway, store, hook)
	}
}
