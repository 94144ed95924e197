//! Project comment threads.

// self
use crate::{
	_prelude::*,
	api::{Comment, CommentId, ProjectId, UserId},
	gateway::{ApiRequest, Gateway},
	http::HttpTransport,
};

const COMMENTS: &str = "/api/comments/";

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Posts a comment on `project` as the signed-in user.
	pub async fn post_comment(&self, project: ProjectId, text: &str) -> Result<Comment> {
		self.fetch(
			ApiRequest::post(COMMENTS).json(serde_json::json!({ "project": project, "text": text })),
		)
		.await
	}

	/// Lists the comments posted on `project`.
	pub async fn project_comments(&self, project: ProjectId) -> Result<Vec<Comment>> {
		self.fetch(ApiRequest::get(format!("{COMMENTS}by-project/{project}/"))).await
	}

	/// Lists the comments written by `user` across projects.
	pub async fn user_comments(&self, user: UserId) -> Result<Vec<Comment>> {
		self.fetch(ApiRequest::get(format!("{COMMENTS}by-user/{user}/"))).await
	}

	/// Deletes a comment; allowed for its author and the project owner.
	pub async fn delete_comment(&self, id: CommentId) -> Result<()> {
		self.fetch_empty(ApiRequest::delete(format!("{COMMENTS}{id}/"))).await
	}
}
