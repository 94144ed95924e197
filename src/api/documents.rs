//! Document upload, download, and deletion.

// crates.io
use http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	api::{self, Document, DocumentId, ProjectId},
	gateway::{ApiRequest, Gateway},
	http::{FilePart, HttpTransport, MultipartForm},
};

const DOCUMENTS: &str = "/api/documents/";

/// File plus optional display name for [`Gateway::upload_document`].
#[derive(Clone, Debug)]
pub struct DocumentUpload {
	/// File contents and metadata.
	pub file: FilePart,
	/// Display name; defaults to the file name.
	pub name: Option<String>,
}
impl DocumentUpload {
	/// Uploads `file` under its own file name.
	pub fn new(file: FilePart) -> Self {
		Self { file, name: None }
	}

	/// Overrides the display name.
	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());

		self
	}

	fn into_form(self, project: ProjectId) -> MultipartForm {
		let name = self.name.unwrap_or_else(|| self.file.file_name.clone());

		MultipartForm::new()
			.file("file", self.file)
			.text("name", name)
			.text("project", project.to_string())
	}
}

/// Downloaded document blob.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadedFile {
	/// File name announced in `Content-Disposition`, if any.
	pub file_name: Option<String>,
	/// `Content-Type` of the reply, if any.
	pub content_type: Option<String>,
	/// Raw contents.
	pub bytes: Bytes,
}

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// Uploads a document into `project` as a multipart form.
	pub async fn upload_document(
		&self,
		project: ProjectId,
		upload: DocumentUpload,
	) -> Result<Document> {
		self.fetch(ApiRequest::post(DOCUMENTS).multipart(upload.into_form(project))).await
	}

	/// Downloads the blob behind a document.
	pub async fn download_document(&self, id: DocumentId) -> Result<DownloadedFile> {
		let response = self.send(ApiRequest::get(format!("{DOCUMENTS}{id}/download/"))).await?;
		let response = api::expect_success(response)?;
		let file_name = response
			.headers()
			.get(CONTENT_DISPOSITION)
			.and_then(|value| value.to_str().ok())
			.and_then(disposition_file_name);
		let content_type = response.header_str(CONTENT_TYPE.as_str()).map(ToOwned::to_owned);

		Ok(DownloadedFile { file_name, content_type, bytes: response.into_bytes() })
	}

	/// Deletes a document.
	pub async fn delete_document(&self, id: DocumentId) -> Result<()> {
		self.fetch_empty(ApiRequest::delete(format!("{DOCUMENTS}{id}/"))).await
	}
}

/// Extracts the file name from a `Content-Disposition` value.
///
/// The extended `filename*=charset''value` form wins over the plain `filename=` form.
fn disposition_file_name(value: &str) -> Option<String> {
	let mut plain = None;

	for param in value.split(';').skip(1) {
		let Some((key, raw)) = param.split_once('=') else {
			continue;
		};
		let key = key.trim();
		let raw = raw.trim();

		if key.eq_ignore_ascii_case("filename*") {
			if let Some(name) = extended_value(raw) {
				return Some(name);
			}
		} else if key.eq_ignore_ascii_case("filename") {
			plain = Some(unquote(raw));
		}
	}

	plain.filter(|name| !name.is_empty())
}

fn unquote(raw: &str) -> String {
	match raw.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
		Some(inner) => inner.replace("\\\"", "\"").replace("\\\\", "\\"),
		None => raw.to_owned(),
	}
}

fn extended_value(raw: &str) -> Option<String> {
	let mut segments = raw.splitn(3, '\'');
	let _charset = segments.next()?;
	let _language = segments.next()?;
	let encoded = segments.next()?;

	// `urlencoding` passes malformed escapes through verbatim; those fall back to `filename=`.
	if !escapes_are_well_formed(encoded) {
		return None;
	}

	let decoded = urlencoding::decode(encoded).ok()?.into_owned();

	(!decoded.is_empty()).then_some(decoded)
}

fn escapes_are_well_formed(encoded: &str) -> bool {
	encoded.split('%').skip(1).all(|escape| {
		escape.as_bytes().get(..2).is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
	})
}
