//! Demonstrates logging in through the gateway with the default reqwest transport and an
//! in-memory session store, then listing projects with the stored bearer token.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use collab_gateway::{
	config::GatewayConfig,
	gateway::Gateway,
	http::ReqwestTransport,
	reqwest::{Client, redirect::Policy},
	session::{MemorySessionStore, SessionStore},
	url::Url,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let store: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::default());
	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/login/");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "refresh": "demo-refresh", "access": "demo-access" }));
		})
		.await;
	let projects_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/projects/").header("authorization", "Bearer demo-access");
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!([{ "id": 1, "project_name": "Thesis" }]));
		})
		.await;
	let config = GatewayConfig::builder(Url::parse(&server.base_url())?).build()?;
	let transport = ReqwestTransport::with_client(
		Client::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(Policy::none())
			.build()?,
	);
	let gateway = <Gateway<ReqwestTransport>>::with_transport(config, store, transport)
		.with_invalidation_hook(|route: &str| println!("Session ended; navigate to {route}."));

	gateway.login("ada", "lovelace").await?;

	for project in gateway.list_projects().await? {
		println!("Project: {}.", project.project_name);
	}

	login_mock.assert_async().await;
	projects_mock.assert_async().await;

	Ok(())
}
