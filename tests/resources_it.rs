#![cfg(feature = "reqwest")]

mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use collab_gateway::{
	api::{CommentId, DocumentId, DocumentUpload, ProjectId, UserId},
	error::Error,
	http::FilePart,
};
use common::*;

#[tokio::test]
async fn projects_round_trip_through_the_api() {
	let server = MockServer::start_async().await;
	let (gateway, store, _) = mock_gateway(&server);

	seed(&store, Some("A1"), Some("R1")).await;

	let create = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/projects/")
				.header("authorization", "Bearer A1")
				.json_body(json!({ "project_name": "Thesis" }));
			then.status(201).header("content-type", "application/json").json_body(json!({
				"id": 3,
				"project_name": "Thesis",
				"owner": { "id": 1, "username": "ada", "email": "ada@example.com" },
				"documents": [],
				"comments": []
			}));
		})
		.await;
	let missing = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/projects/99/");
			then.status(404).header("content-type", "application/json").json_body(json!({ "detail": "Not found." }));
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/projects/3/");
			then.status(204);
		})
		.await;
	let project = gateway.create_project("Thesis").await.expect("Project creation should succeed.");

	assert_eq!(project.id, ProjectId::new(3));
	assert_eq!(project.owner.map(|owner| owner.id), Some(UserId::new(1)));

	let err = gateway.project(ProjectId::new(99)).await.expect_err("Unknown project should 404.");

	match err {
		Error::Api { status, detail } => {
			assert_eq!(status, 404);
			assert_eq!(detail, "Not found.");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	gateway.delete_project(project.id).await.expect("Project deletion should succeed.");

	create.assert_async().await;
	missing.assert_async().await;
	delete.assert_async().await;
}

#[tokio::test]
async fn members_are_listed_added_invited_and_removed() {
	let server = MockServer::start_async().await;
	let (gateway, store, _) = mock_gateway(&server);

	seed(&store, Some("A1"), Some("R1")).await;

	let list = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/projects/3/members/");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"members": [
					{ "id": 1, "username": "ada", "is_owner": true },
					{ "id": 2, "username": "grace", "is_owner": false }
				],
				"current_user_id": 1,
				"owner_id": 1
			}));
		})
		.await;
	let add = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/projects/3/members/").json_body(json!({ "member": 4 }));
			then.status(201)
				.header("content-type", "application/json")
				.json_body(json!({ "id": 4, "username": "linus", "is_owner": false }));
		})
		.await;
	let invite = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/projects/3/members/invite/")
				.json_body(json!({ "email": "new@example.com" }));
			then.status(200)
				.header("content-type", "application/json")
				.json_body(json!({ "detail": "Invite sent to new@example.com." }));
		})
		.await;
	let remove = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/projects/3/members/2/");
			then.status(204);
		})
		.await;
	let roster = gateway.members(ProjectId::new(3)).await.expect("Roster should load.");

	assert!(roster.viewer_is_owner());
	assert_eq!(roster.members.len(), 2);

	let member =
		gateway.add_member(ProjectId::new(3), UserId::new(4)).await.expect("Adding should succeed.");

	assert_eq!(member.username, "linus");

	let message = gateway
		.invite_member(ProjectId::new(3), "new@example.com")
		.await
		.expect("Invite should succeed.");

	assert_eq!(message, "Invite sent to new@example.com.");

	gateway
		.remove_member(ProjectId::new(3), UserId::new(2))
		.await
		.expect("Removing should succeed.");

	list.assert_async().await;
	add.assert_async().await;
	invite.assert_async().await;
	remove.assert_async().await;
}

#[tokio::test]
async fn non_owner_member_changes_surface_the_backend_detail() {
	let server = MockServer::start_async().await;
	let (gateway, store, _) = mock_gateway(&server);

	seed(&store, Some("A1"), Some("R1")).await;

	server
		.mock_async(|when, then| {
			when.method(POST).path("/api/projects/3/members/");
			then.status(403)
				.header("content-type", "application/json")
				.json_body(json!({ "detail": "Only owner can add members." }));
		})
		.await;

	let err = gateway
		.add_member(ProjectId::new(3), UserId::new(4))
		.await
		.expect_err("Non-owner should be rejected.");

	assert_eq!(err.status(), Some(403));
	assert!(err.to_string().contains("Only owner can add members."));
}

#[tokio::test]
async fn documents_upload_download_and_delete() {
	let server = MockServer::start_async().await;
	let (gateway, store, _) = mock_gateway(&server);

	seed(&store, Some("A1"), Some("R1")).await;

	let upload = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/documents/").header("authorization", "Bearer A1");
			then.status(201).header("content-type", "application/json").json_body(json!({
				"id": 9,
				"project": 3,
				"name": "draft.pdf",
				"file": "http://minio.local/documents/draft.pdf"
			}));
		})
		.await;
	let download = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/documents/9/download/");
			then.status(200)
				.header("content-type", "application/pdf")
				.header("content-disposition", "attachment; filename=\"draft.pdf\"")
				.body("%PDF-1.7");
		})
		.await;
	let delete = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/documents/9/");
			then.status(204);
		})
		.await;
	let document = gateway
		.upload_document(
			ProjectId::new(3),
			DocumentUpload::new(FilePart::new("draft.pdf", b"%PDF-1.7".to_vec())),
		)
		.await
		.expect("Upload should succeed.");

	assert_eq!(document.id, DocumentId::new(9));
	assert_eq!(document.project, ProjectId::new(3));

	let file = gateway.download_document(document.id).await.expect("Download should succeed.");

	assert_eq!(file.file_name.as_deref(), Some("draft.pdf"));
	assert_eq!(file.content_type.as_deref(), Some("application/pdf"));
	assert_eq!(file.bytes.as_ref(), b"%PDF-1.7");

	gateway.delete_document(document.id).await.expect("Deletion should succeed.");

	upload.assert_async().await;
	download.assert_async().await;
	delete.assert_async().await;
}

#[tokio::test]
async fn comments_are_posted_listed_and_deleted() {
	let server = MockServer::start_async().await;
	let (gateway, store, _) = mock_gateway(&server);

	seed(&store, Some("A1"), Some("R1")).await;

	let comment = json!({
		"id": 5,
		"project": 3,
		"user": 1,
		"text": "Looks good.",
		"created_at": "2024-05-01T12:30:45.123456Z",
		"is_owner": true,
		"is_project_owner": true,
		"username": "ada"
	});
	let post = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/api/comments/")
				.json_body(json!({ "project": 3, "text": "Looks good." }));
			then.status(201).header("content-type", "application/json").json_body(comment.clone());
		})
		.await;
	let by_project = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/comments/by-project/3/");
			then.status(200).header("content-type", "application/json").json_body(json!([comment.clone()]));
		})
		.await;
	let by_user = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/comments/by-user/1/");
			then.status(200).header("content-type", "application/json").json_body(json!([comment.clone()]));
		})
		.await;
	let forbidden = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/api/comments/5/");
			then.status(403)
				.header("content-type", "application/json")
				.json_body(json!({ "detail": "Not allowed to delete this comment." }));
		})
		.await;
	let posted =
		gateway.post_comment(ProjectId::new(3), "Looks good.").await.expect("Posting should succeed.");

	assert_eq!(posted.id, CommentId::new(5));
	assert_eq!(posted.username, "ada");

	let thread = gateway.project_comments(ProjectId::new(3)).await.expect("Thread should load.");

	assert_eq!(thread, vec![posted.clone()]);

	let authored = gateway.user_comments(UserId::new(1)).await.expect("Comments should load.");

	assert_eq!(authored.len(), 1);

	let err = gateway.delete_comment(posted.id).await.expect_err("Deletion should be refused.");

	assert_eq!(err.status(), Some(403));

	post.assert_async().await;
	by_project.assert_async().await;
	by_user.assert_async().await;
	forbidden.assert_async().await;
}
