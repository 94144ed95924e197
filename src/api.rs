//! Typed calls against the collaboration backend's resource endpoints.
//!
//! Every call goes through [`Gateway::send`], so bearer attachment and the refresh cycle
//! apply. Unlike `send`, these helpers turn non-2xx replies into [`Error::Api`], using the
//! backend's `detail` message when it supplies one.

pub mod comments;
pub mod documents;
pub mod id;
pub mod members;
pub mod models;
pub mod projects;

pub use documents::{DocumentUpload, DownloadedFile};
pub use id::*;
pub use models::*;

// self
use crate::{
	_prelude::*,
	gateway::{ApiRequest, Gateway},
	http::{ApiResponse, HttpTransport},
};

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Sends `request` and decodes a successful JSON reply into `R`.
	pub(crate) async fn fetch<R>(&self, request: ApiRequest) -> Result<R>
	where
		R: DeserializeOwned,
	{
		let response = expect_success(self.send(request).await?)?;

		Ok(response.json()?)
	}

	/// Sends `request`, discarding a successful reply's body.
	pub(crate) async fn fetch_empty(&self, request: ApiRequest) -> Result<()> {
		expect_success(self.send(request).await?)?;

		Ok(())
	}
}

/// Passes 2xx replies through and converts everything else into [`Error::Api`].
pub(crate) fn expect_success(response: ApiResponse) -> Result<ApiResponse> {
	if response.ok() {
		return Ok(response);
	}

	Err(Error::Api { status: response.status().as_u16(), detail: failure_detail(&response) })
}

/// The backend's `detail` message, or the raw body when the reply has none.
fn failure_detail(response: &ApiResponse) -> String {
	response.json::<Detail>().ok().and_then(|body| body.detail).unwrap_or_else(|| response.text())
}
