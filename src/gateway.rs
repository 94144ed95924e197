//! The authenticated request gateway.
//!
//! [`Gateway`] owns the transport, the session view, the configuration, and the
//! invalidation hook, so individual operations (the raw [`Gateway::send`], the account
//! flows, and the typed resource calls) only describe what to request.

pub mod metrics;
pub mod request;

mod send;

pub use metrics::GatewayMetrics;
pub use request::*;

// self
use crate::{
	_prelude::*,
	config::GatewayConfig,
	http::HttpTransport,
	session::{Session, SessionStore},
};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestTransport};

#[cfg(feature = "reqwest")]
/// Gateway specialized for the crate's default reqwest transport.
pub type ReqwestGateway = Gateway<ReqwestTransport>;

/// Capability notified when the session has been terminated.
///
/// The gateway calls it after both tokens were cleared, passing the configured login
/// route; front ends navigate there. Any `Fn(&str) + Send + Sync` closure qualifies.
pub trait InvalidationHook: Send + Sync {
	/// Called once per terminated session with the unauthenticated entry route.
	fn session_invalidated(&self, login_route: &str);
}
impl<F> InvalidationHook for F
where
	F: Fn(&str) + Send + Sync,
{
	fn session_invalidated(&self, login_route: &str) {
		self(login_route)
	}
}

/// Sends requests against the configured backend on behalf of the stored session.
///
/// Cloning is cheap and every clone shares the transport, session, hook, counters, and
/// refresh lock.
pub struct Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Transport used for every outbound request.
	pub transport: Arc<T>,
	/// Session slots holding the credential pair.
	pub session: Session,
	/// Validated configuration.
	pub config: Arc<GatewayConfig>,
	/// Hook fired when a rejected refresh ends the session.
	pub invalidation: Arc<dyn InvalidationHook>,
	/// Counters for sends, refreshes, retries, and invalidations.
	pub metrics: Arc<GatewayMetrics>,
	refresh_lock: Arc<AsyncMutex<()>>,
}
impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Creates a gateway that reuses the caller-provided transport.
	///
	/// The invalidation hook defaults to a no-op; see [`Gateway::with_invalidation_hook`].
	pub fn with_transport(
		config: GatewayConfig,
		store: Arc<dyn SessionStore>,
		transport: impl Into<Arc<T>>,
	) -> Self {
		let session = Session::new(store, config.session_keys.clone());

		Self {
			transport: transport.into(),
			session,
			config: Arc::new(config),
			invalidation: Arc::new(|_: &str| {}),
			metrics: Default::default(),
			refresh_lock: Arc::new(AsyncMutex::new(())),
		}
	}

	/// Sets or replaces the hook fired on session invalidation.
	pub fn with_invalidation_hook(mut self, hook: impl 'static + InvalidationHook) -> Self {
		self.invalidation = Arc::new(hook);

		self
	}

	/// Sets or replaces the hook using an already shared handle.
	pub fn with_shared_invalidation_hook(mut self, hook: Arc<dyn InvalidationHook>) -> Self {
		self.invalidation = hook;

		self
	}
}
#[cfg(feature = "reqwest")]
impl Gateway<ReqwestTransport> {
	/// Creates a new gateway that provisions its own reqwest transport.
	pub fn new(config: GatewayConfig, store: Arc<dyn SessionStore>) -> Result<Self, ConfigError> {
		Ok(Self::with_transport(config, store, ReqwestTransport::new()?))
	}
}
impl<T> Clone for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn clone(&self) -> Self {
		Self {
			transport: self.transport.clone(),
			session: self.session.clone(),
			config: self.config.clone(),
			invalidation: self.invalidation.clone(),
			metrics: self.metrics.clone(),
			refresh_lock: self.refresh_lock.clone(),
		}
	}
}
impl<T> Debug for Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Gateway")
			.field("base_origin", &self.config.base_origin.as_str())
			.field("session", &self.session)
			.field("metrics", &self.metrics)
			.finish()
	}
}
