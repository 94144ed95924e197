//! Optional observability helpers for gateway calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `collab_gateway.call` with the `call`
//!   (operation) and `stage` (call site) fields, plus `warn!` events when a session is
//!   invalidated.
//! - Enable `metrics` to increment the `collab_gateway_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the gateway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Authenticated request through [`Gateway::send`](crate::gateway::Gateway::send).
	Send,
	/// Access-token refresh exchange.
	Refresh,
	/// Credential exchange at the login endpoint.
	Login,
	/// Account registration.
	Register,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Send => "send",
			CallKind::Refresh => "refresh",
			CallKind::Login => "login",
			CallKind::Register => "register",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a gateway helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller (or, for refreshes, a rejected refresh).
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Notes a terminated session (credentials cleared after a rejected refresh).
pub(crate) fn note_session_invalidated(status: u16, login_route: &str) {
	#[cfg(feature = "tracing")]
	{
		::tracing::warn!(status, login_route, "refresh rejected; session invalidated");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (status, login_route);
	}
}
