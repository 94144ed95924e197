//! Project membership management.
//!
//! Only the project owner may add, invite, or remove members; the backend answers 403
//! otherwise, which surfaces as [`Error::Api`].

// self
use crate::{
	_prelude::*,
	api::{Detail, Member, MemberRoster, ProjectId, UserId, projects},
	gateway::{ApiRequest, Gateway},
	http::HttpTransport,
};

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Lists the members of `project`.
	pub async fn members(&self, project: ProjectId) -> Result<MemberRoster> {
		self.fetch(ApiRequest::get(members_path(project))).await
	}

	/// Adds an existing user to `project`.
	pub async fn add_member(&self, project: ProjectId, user: UserId) -> Result<Member> {
		self.fetch(ApiRequest::post(members_path(project)).json(serde_json::json!({ "member": user })))
			.await
	}

	/// Invites `email` to `project` and returns the backend's confirmation message.
	///
	/// Known addresses are added directly; unknown ones receive an invitation mail.
	pub async fn invite_member(&self, project: ProjectId, email: &str) -> Result<String> {
		let request = ApiRequest::post(format!("{}invite/", members_path(project)))
			.json(serde_json::json!({ "email": email }));
		let reply: Detail = self.fetch(request).await?;

		Ok(reply.detail.unwrap_or_else(|| format!("Invite sent to {email}.")))
	}

	/// Removes `member` from `project`.
	pub async fn remove_member(&self, project: ProjectId, member: UserId) -> Result<()> {
		self.fetch_empty(ApiRequest::delete(format!("{}{member}/", members_path(project)))).await
	}
}

fn members_path(project: ProjectId) -> String {
	format!("{}members/", projects::project_path(project))
}
