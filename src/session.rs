//! Session storage contracts, built-in backends, and the credential-pair view the
//! gateway works with.

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

// self
use crate::{
	_prelude::*,
	auth::{CredentialPair, TokenSecret},
	config::SessionKeys,
};

/// Boxed future returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Key/value capability holding session secrets.
///
/// The gateway only ever touches the two slots named in [`SessionKeys`], but stores are
/// free to hold other entries.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Reads the secret stored under `key`, if present.
	fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<TokenSecret>>;

	/// Writes or overwrites the secret stored under `key`.
	fn set<'a>(&'a self, key: &'a str, value: TokenSecret) -> StoreFuture<'a, ()>;

	/// Deletes the entry stored under `key`; missing entries are not an error.
	fn clear<'a>(&'a self, key: &'a str) -> StoreFuture<'a, ()>;
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

/// A [`SessionStore`] bound to the configured access/refresh slot names.
#[derive(Clone)]
pub struct Session {
	store: Arc<dyn SessionStore>,
	keys: SessionKeys,
}
impl Session {
	/// Binds `store` to the provided slot names.
	pub fn new(store: Arc<dyn SessionStore>, keys: SessionKeys) -> Self {
		Self { store, keys }
	}

	/// Returns the underlying store.
	pub fn store(&self) -> &Arc<dyn SessionStore> {
		&self.store
	}

	/// Returns the slot names in use.
	pub fn keys(&self) -> &SessionKeys {
		&self.keys
	}

	/// Reads the stored access token.
	pub async fn access(&self) -> Result<Option<TokenSecret>, StoreError> {
		self.store.get(&self.keys.access).await
	}

	/// Reads the stored refresh token.
	pub async fn refresh(&self) -> Result<Option<TokenSecret>, StoreError> {
		self.store.get(&self.keys.refresh).await
	}

	/// Returns both tokens when both slots are populated.
	pub async fn credentials(&self) -> Result<Option<CredentialPair>, StoreError> {
		let access = self.access().await?;
		let refresh = self.refresh().await?;

		Ok(access.zip(refresh).map(|(access, refresh)| CredentialPair { access, refresh }))
	}

	/// Stores a freshly issued credential pair.
	pub async fn install(&self, pair: CredentialPair) -> Result<(), StoreError> {
		self.store.set(&self.keys.access, pair.access).await?;
		self.store.set(&self.keys.refresh, pair.refresh).await
	}

	/// Overwrites the access token, leaving the refresh token untouched.
	pub async fn replace_access(&self, access: TokenSecret) -> Result<(), StoreError> {
		self.store.set(&self.keys.access, access).await
	}

	/// Deletes both tokens.
	///
	/// Both slots are cleared even if the first deletion fails; the first error wins.
	pub async fn invalidate(&self) -> Result<(), StoreError> {
		let access = self.store.clear(&self.keys.access).await;
		let refresh = self.store.clear(&self.keys.refresh).await;

		access.and(refresh)
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session").field("keys", &self.keys).finish()
	}
}
