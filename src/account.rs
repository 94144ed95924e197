//! Account flows: sign-in, registration, sign-out, and session checks.
//!
//! Login and registration are anonymous calls against the gateway's base origin; they
//! bypass the bearer header and the refresh cycle. Everything else goes through
//! [`Gateway::send`].

// crates.io
use http::Method;
// self
use crate::{
	_prelude::*,
	api::{self, Registration, User},
	auth::{CredentialPair, LoginRequest},
	gateway::{ApiRequest, Gateway},
	http::HttpTransport,
	obs::{self, CallKind, CallOutcome, CallSpan},
};

#[derive(Serialize)]
struct RegisterRequest<'a> {
	username: &'a str,
	email: &'a str,
	password: &'a str,
}

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Exchanges credentials for a token pair and stores it in the session.
	///
	/// Rejected credentials surface as [`Error::Api`] and leave the session untouched.
	pub async fn login(&self, username: &str, password: &str) -> Result<()> {
		const KIND: CallKind = CallKind::Login;

		let span = CallSpan::new(KIND, "login");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self
					.send_anonymous(
						Method::POST,
						&self.config.endpoints.login,
						&LoginRequest { username, password },
					)
					.await?;
				let pair: CredentialPair = api::expect_success(response)?.json()?;

				self.session.install(pair).await?;

				Ok(())
			})
			.await;

		record(KIND, &result);

		result
	}

	/// Creates an account; the caller signs in separately afterwards.
	///
	/// Validation failures surface as [`Error::Api`] carrying the backend's error body.
	pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<Registration> {
		const KIND: CallKind = CallKind::Register;

		let span = CallSpan::new(KIND, "register");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let response = self
					.send_anonymous(
						Method::POST,
						&self.config.endpoints.register,
						&RegisterRequest { username, email, password },
					)
					.await?;

				Ok(api::expect_success(response)?.json::<Registration>()?)
			})
			.await;

		record(KIND, &result);

		result
	}

	/// Forgets both tokens. The invalidation hook is not called.
	pub async fn logout(&self) -> Result<()> {
		Ok(self.session.invalidate().await?)
	}

	/// Fetches the profile of the signed-in user.
	pub async fn current_user(&self) -> Result<User> {
		self.fetch(ApiRequest::get(self.config.endpoints.current_user.clone())).await
	}

	/// Returns `true` when an access token is stored.
	pub async fn is_authenticated(&self) -> Result<bool> {
		Ok(self.session.access().await?.is_some())
	}

	/// Guards a protected view.
	///
	/// Without a stored access token the invalidation hook receives the login route and
	/// [`Error::Unauthenticated`] is returned.
	pub async fn require_session(&self) -> Result<()> {
		if self.is_authenticated().await? {
			return Ok(());
		}

		self.invalidation.session_invalidated(&self.config.login_route);

		Err(Error::Unauthenticated)
	}
}

fn record<V>(kind: CallKind, result: &Result<V>) {
	match result {
		Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
		Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
	}
}
