//! Wire models returned by the collaboration backend.

// self
use crate::{
	_prelude::*,
	api::{CommentId, DocumentId, ProjectId, UserId},
};

/// Account summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	/// Primary key.
	pub id: UserId,
	/// Login name.
	pub username: String,
	/// Contact address; empty when the backend omits it.
	#[serde(default)]
	pub email: String,
}

/// Project with its embedded documents and comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
	/// Primary key.
	pub id: ProjectId,
	/// Display name.
	pub project_name: String,
	/// Owning user.
	#[serde(default)]
	pub owner: Option<User>,
	/// Uploaded documents.
	#[serde(default)]
	pub documents: Vec<Document>,
	/// Comment thread.
	#[serde(default)]
	pub comments: Vec<Comment>,
}

/// Uploaded document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
	/// Primary key.
	pub id: DocumentId,
	/// Owning project.
	pub project: ProjectId,
	/// Display name.
	pub name: String,
	/// Storage URL of the blob, when one is attached.
	#[serde(default)]
	pub file: Option<String>,
}

/// Comment posted on a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
	/// Primary key.
	pub id: CommentId,
	/// Project the comment belongs to.
	pub project: ProjectId,
	/// Author.
	pub user: UserId,
	/// Body.
	pub text: String,
	/// Creation time.
	#[serde(with = "time::serde::rfc3339")]
	pub created_at: OffsetDateTime,
	/// Whether the signed-in user wrote the comment.
	#[serde(default)]
	pub is_owner: bool,
	/// Whether the signed-in user owns the project.
	#[serde(default)]
	pub is_project_owner: bool,
	/// Author's login name.
	#[serde(default)]
	pub username: String,
}

/// Project membership entry; `id` is the member's user id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
	/// User id of the member.
	pub id: UserId,
	/// Login name.
	pub username: String,
	/// Whether the member owns the project.
	#[serde(default)]
	pub is_owner: bool,
}

/// Member listing together with the caller's and the owner's ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRoster {
	/// Project members, owner included.
	pub members: Vec<Member>,
	/// Id of the signed-in user.
	pub current_user_id: UserId,
	/// Id of the project owner.
	pub owner_id: UserId,
}
impl MemberRoster {
	/// Returns `true` when the signed-in user owns the project.
	pub fn viewer_is_owner(&self) -> bool {
		self.current_user_id == self.owner_id
	}
}

/// Message-style reply (`{"detail": ...}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
	/// Human-readable message.
	#[serde(default)]
	pub detail: Option<String>,
}

/// Reply of the registration endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
	/// Confirmation message.
	pub message: String,
	/// Username of the created account.
	pub user: String,
}
