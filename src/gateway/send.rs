//! Request dispatch with bearer attachment and the single refresh-and-retry cycle.
//!
//! [`Gateway::send`] resolves the target, attaches the stored access token, and hands
//! the request to the transport. A 401 reply triggers at most one refresh exchange; if
//! it succeeds the request is re-issued once with the new token and that reply is
//! returned as-is, otherwise both tokens are cleared and the invalidation hook fires.

// crates.io
use http::{
	HeaderMap, HeaderValue, Method, StatusCode,
	header::{AUTHORIZATION, CONTENT_TYPE},
};
// self
use crate::{
	_prelude::*,
	auth::{RefreshGrant, RefreshRequest, TokenSecret},
	error::ConfigError,
	gateway::{ApiBody, ApiRequest, Gateway},
	http::{ApiResponse, HttpTransport, OutboundRequest, RequestBody},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

const APPLICATION_JSON: &str = "application/json";

enum RefreshOutcome {
	Renewed(TokenSecret),
	Rejected,
	// Another caller ended the session while this one waited for the lock.
	Superseded,
}

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Sends `request` on behalf of the stored session.
	///
	/// Every HTTP status comes back as `Ok`; only local failures, storage failures, and
	/// transport failures are errors. When the first reply is 401 and a refresh token is
	/// stored, the refresh endpoint is called once:
	///
	/// - on success the new access token is stored and the request is re-issued exactly once;
	///   that second reply is returned whatever its status;
	/// - on rejection both tokens are cleared, the invalidation hook receives the login route,
	///   and the original 401 is returned.
	pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
		const KIND: CallKind = CallKind::Send;

		let span = CallSpan::new(KIND, "send");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.send_with_refresh(request)).await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Sends a JSON request without credentials and without the refresh cycle.
	pub(crate) async fn send_anonymous<B>(
		&self,
		method: Method,
		target: &str,
		body: &B,
	) -> Result<ApiResponse>
	where
		B: ?Sized + Serialize,
	{
		let url = self.config.resolve(target)?;
		let body = serde_json::to_vec(body).map_err(ConfigError::EncodeBody)?;
		let request = OutboundRequest {
			method,
			url,
			headers: json_headers(),
			body: Some(RequestBody::Json(body.into())),
		};

		Ok(self.transport.execute(request).await?)
	}

	async fn send_with_refresh(&self, request: ApiRequest) -> Result<ApiResponse> {
		let ApiRequest { target, method, headers: caller_headers, body } = request;
		let url = self.config.resolve(&target)?;
		let body = encode_body(body)?;
		let access = self.session.access().await?;
		let first = OutboundRequest {
			method: method.clone(),
			url: url.clone(),
			headers: compose_headers(&caller_headers, body.as_ref(), access.as_ref())?,
			body: body.clone(),
		};

		self.metrics.record_send();

		let response = self.transport.execute(first).await?;

		if response.status() != StatusCode::UNAUTHORIZED {
			return Ok(response);
		}

		let Some(refresh) = self.session.refresh().await? else {
			return Ok(response);
		};

		match self.refresh_access(&refresh).await? {
			RefreshOutcome::Renewed(access) => {
				let retry = OutboundRequest {
					method,
					url,
					headers: compose_headers(&caller_headers, body.as_ref(), Some(&access))?,
					body,
				};

				self.metrics.record_retry();

				Ok(self.transport.execute(retry).await?)
			},
			RefreshOutcome::Rejected | RefreshOutcome::Superseded => Ok(response),
		}
	}

	async fn refresh_access(&self, refresh: &TokenSecret) -> Result<RefreshOutcome> {
		const KIND: CallKind = CallKind::Refresh;

		let span = CallSpan::new(KIND, "refresh_access");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span.instrument(self.refresh_exchange(refresh)).await;

		match &result {
			Ok(RefreshOutcome::Renewed(_)) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Ok(RefreshOutcome::Rejected | RefreshOutcome::Superseded) | Err(_) =>
				obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	async fn refresh_exchange(&self, refresh: &TokenSecret) -> Result<RefreshOutcome> {
		// Serializes the exchange and the credential writes that follow it.
		let _exclusive = self.refresh_lock.lock().await;
		let current = self.session.refresh().await?;

		// The session changed while waiting: reuse a newer login, never refresh a stale token.
		if current.as_ref() != Some(refresh) {
			let outcome = match (current, self.session.access().await?) {
				(Some(_), Some(access)) => RefreshOutcome::Renewed(access),
				_ => RefreshOutcome::Superseded,
			};

			return Ok(outcome);
		}

		self.metrics.record_refresh_attempt();

		let body = serde_json::to_vec(&RefreshRequest { refresh: refresh.expose() })
			.map_err(ConfigError::EncodeBody)?;
		let request = OutboundRequest {
			method: Method::POST,
			url: self.config.resolve(&self.config.endpoints.refresh)?,
			headers: json_headers(),
			body: Some(RequestBody::Json(body.into())),
		};
		let response = self.transport.execute(request).await?;
		let renewed = if response.ok() {
			response
				.json::<RefreshGrant>()
				.ok()
				.and_then(|grant| TokenSecret::non_empty(grant.access))
		} else {
			None
		};

		match renewed {
			Some(access) => {
				self.session.replace_access(access.clone()).await?;

				Ok(RefreshOutcome::Renewed(access))
			},
			None => {
				self.metrics.record_refresh_failure();
				self.invalidate_session(response.status()).await?;

				Ok(RefreshOutcome::Rejected)
			},
		}
	}

	async fn invalidate_session(&self, status: StatusCode) -> Result<()> {
		let cleared = self.session.invalidate().await;

		self.metrics.record_invalidation();
		obs::note_session_invalidated(status.as_u16(), &self.config.login_route);
		self.invalidation.session_invalidated(&self.config.login_route);

		Ok(cleared?)
	}
}

fn encode_body(body: Option<ApiBody>) -> Result<Option<RequestBody>, ConfigError> {
	let encoded = match body {
		Some(ApiBody::Json(value)) => {
			let bytes = serde_json::to_vec(&value).map_err(ConfigError::EncodeBody)?;

			Some(RequestBody::Json(bytes.into()))
		},
		Some(ApiBody::Multipart(form)) => Some(RequestBody::Multipart(form)),
		None => None,
	};

	Ok(encoded)
}

fn json_headers() -> HeaderMap {
	let mut headers = HeaderMap::new();

	headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));

	headers
}

/// Builds the final header set: JSON content type unless multipart, caller headers on
/// top, and the bearer header derived from `access` last.
fn compose_headers(
	caller: &HeaderMap,
	body: Option<&RequestBody>,
	access: Option<&TokenSecret>,
) -> Result<HeaderMap, ConfigError> {
	let mut headers =
		if matches!(body, Some(RequestBody::Multipart(_))) { HeaderMap::new() } else { json_headers() };

	for name in caller.keys() {
		headers.remove(name);
	}
	for (name, value) in caller {
		headers.append(name, value.clone());
	}

	headers.remove(AUTHORIZATION);

	if let Some(access) = access {
		headers.insert(AUTHORIZATION, bearer(access)?);
	}

	Ok(headers)
}

fn bearer(access: &TokenSecret) -> Result<HeaderValue, ConfigError> {
	let mut value = HeaderValue::from_str(&format!("Bearer {}", access.expose()))?;

	value.set_sensitive(true);

	Ok(value)
}
