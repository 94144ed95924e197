//! Project listing, creation, lookup, and deletion.

// self
use crate::{
	_prelude::*,
	api::{Project, ProjectId},
	gateway::{ApiRequest, Gateway},
	http::HttpTransport,
};

const PROJECTS: &str = "/api/projects/";

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Lists the projects the signed-in user owns or belongs to.
	pub async fn list_projects(&self) -> Result<Vec<Project>> {
		self.fetch(ApiRequest::get(PROJECTS)).await
	}

	/// Creates a project owned by the signed-in user.
	pub async fn create_project(&self, name: &str) -> Result<Project> {
		self.fetch(ApiRequest::post(PROJECTS).json(serde_json::json!({ "project_name": name })))
			.await
	}

	/// Fetches one project with its documents and comments.
	pub async fn project(&self, id: ProjectId) -> Result<Project> {
		self.fetch(ApiRequest::get(project_path(id))).await
	}

	/// Deletes a project.
	pub async fn delete_project(&self, id: ProjectId) -> Result<()> {
		self.fetch_empty(ApiRequest::delete(project_path(id))).await
	}
}

pub(crate) fn project_path(id: ProjectId) -> String {
	format!("{PROJECTS}{id}/")
}
