//! Cloneable multipart form model.
//!
//! Transport forms (e.g. `reqwest::multipart::Form`) are single-use, while the gateway
//! may need to send the same upload twice (original attempt plus the post-refresh
//! retry). [`MultipartForm`] keeps the parts as owned bytes and is converted into the
//! transport's form on every attempt.

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")] use crate::error::TransportError;

/// One named part of a [`MultipartForm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
	/// Plain text field.
	Text {
		/// Field name.
		name: String,
		/// Field value.
		value: String,
	},
	/// File attachment.
	File {
		/// Field name.
		name: String,
		/// Attached file.
		file: FilePart,
	},
}
impl FormPart {
	/// Returns the field name.
	pub fn name(&self) -> &str {
		match self {
			Self::Text { name, .. } | Self::File { name, .. } => name,
		}
	}
}

/// In-memory file attachment.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
	/// File name reported to the backend.
	pub file_name: String,
	/// MIME type of the content.
	pub content_type: String,
	/// Raw file content.
	pub bytes: Bytes,
}
impl FilePart {
	/// Wraps file content, guessing the MIME type from the file name's extension.
	pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
		let file_name = file_name.into();
		let content_type = mime_guess::from_path(&file_name).first_or_octet_stream().to_string();

		Self { file_name, content_type, bytes: bytes.into() }
	}

	/// Overrides the guessed MIME type.
	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = content_type.into();

		self
	}
}
impl Debug for FilePart {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("FilePart")
			.field("file_name", &self.file_name)
			.field("content_type", &self.content_type)
			.field("len", &self.bytes.len())
			.finish()
	}
}

/// Ordered list of form parts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
	parts: Vec<FormPart>,
}
impl MultipartForm {
	/// Creates an empty form.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a text field.
	pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.parts.push(FormPart::Text { name: name.into(), value: value.into() });

		self
	}

	/// Appends a file field.
	pub fn file(mut self, name: impl Into<String>, file: FilePart) -> Self {
		self.parts.push(FormPart::File { name: name.into(), file });

		self
	}

	/// Returns the parts in insertion order.
	pub fn parts(&self) -> &[FormPart] {
		&self.parts
	}

	/// Returns the first text value stored under `name`.
	pub fn text_value(&self, name: &str) -> Option<&str> {
		self.parts.iter().find_map(|part| match part {
			FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
			_ => None,
		})
	}

	/// Returns the first file stored under `name`.
	pub fn file_part(&self, name: &str) -> Option<&FilePart> {
		self.parts.iter().find_map(|part| match part {
			FormPart::File { name: n, file } if n == name => Some(file),
			_ => None,
		})
	}

	#[cfg(feature = "reqwest")]
	pub(crate) fn into_reqwest(self) -> Result<reqwest::multipart::Form, TransportError> {
		let mut form = reqwest::multipart::Form::new();

		for part in self.parts {
			form = match part {
				FormPart::Text { name, value } => form.text(name, value),
				FormPart::File { name, file } => {
					let part = reqwest::multipart::Part::bytes(file.bytes.to_vec())
						.file_name(file.file_name)
						.mime_str(&file.content_type)?;

					form.part(name, part)
				},
			};
		}

		Ok(form)
	}
}
