//! Thread-safe in-memory [`SessionStore`] for tests, demos, and short-lived processes.

// self
use crate::{
	_prelude::*,
	auth::TokenSecret,
	session::{SessionStore, StoreFuture},
};

type SlotMap = Arc<RwLock<HashMap<String, TokenSecret>>>;

/// Storage backend that keeps session secrets in-process; clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore(SlotMap);
impl MemorySessionStore {
	/// Returns a copy of every stored entry.
	pub fn snapshot(&self) -> HashMap<String, TokenSecret> {
		self.0.read().clone()
	}

	fn get_now(map: SlotMap, key: &str) -> Option<TokenSecret> {
		map.read().get(key).cloned()
	}

	fn set_now(map: SlotMap, key: &str, value: TokenSecret) {
		map.write().insert(key.to_owned(), value);
	}

	fn clear_now(map: SlotMap, key: &str) {
		map.write().remove(key);
	}
}
impl SessionStore for MemorySessionStore {
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<TokenSecret>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(Self::get_now(map, key)) })
	}

	fn set<'a>(&'a self, key: &'a str, value: TokenSecret) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			Self::set_now(map, key, value);

			Ok(())
		})
	}

	fn clear<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			Self::clear_now(map, key);

			Ok(())
		})
	}
}
