//! Always-on counters describing what the gateway did.

// std
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters shared by every clone of a gateway.
#[derive(Debug, Default)]
pub struct GatewayMetrics {
	sends: AtomicU64,
	refresh_attempts: AtomicU64,
	refresh_failures: AtomicU64,
	retries: AtomicU64,
	invalidations: AtomicU64,
}
impl GatewayMetrics {
	/// Requests handed to the transport on a first attempt.
	pub fn sends(&self) -> u64 {
		self.sends.load(Ordering::Relaxed)
	}

	/// Refresh exchanges started after a 401.
	pub fn refresh_attempts(&self) -> u64 {
		self.refresh_attempts.load(Ordering::Relaxed)
	}

	/// Refresh exchanges the backend rejected.
	pub fn refresh_failures(&self) -> u64 {
		self.refresh_failures.load(Ordering::Relaxed)
	}

	/// Requests re-issued with a refreshed token.
	pub fn retries(&self) -> u64 {
		self.retries.load(Ordering::Relaxed)
	}

	/// Sessions terminated by a rejected refresh.
	pub fn invalidations(&self) -> u64 {
		self.invalidations.load(Ordering::Relaxed)
	}

	pub(crate) fn record_send(&self) {
		self.sends.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_refresh_attempt(&self) {
		self.refresh_attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_refresh_failure(&self) {
		self.refresh_failures.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_retry(&self) {
		self.retries.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record_invalidation(&self) {
		self.invalidations.fetch_add(1, Ordering::Relaxed);
	}
}
