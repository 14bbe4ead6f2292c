// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// MIME types accepted for qualification documents
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// Value for the `accept` attribute of the qualification file input
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.jpg,.jpeg,.png,application/pdf,image/jpeg,image/png";

/// Largest accepted qualification document, in bytes (5 MiB)
pub const MAX_UPLOAD_SIZE: u64 = 5 * 1024 * 1024;

/// Client-side description of a file the user selected. Nothing here touches the file contents.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct FileDescriptor {
	pub name: String,
	pub mime_type: String,
	pub size: u64,
}

impl AsRef<FileDescriptor> for FileDescriptor {
	fn as_ref(&self) -> &FileDescriptor {
		self
	}
}

/// Reasons a selected file is turned away before upload
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UploadRejection {
	UnsupportedType,
	TooLarge,
}

impl UploadRejection {
	pub fn message(&self) -> &'static str {
		match self {
			Self::UnsupportedType => "Only PDF, JPG, JPEG, and PNG files are allowed",
			Self::TooLarge => "File size should not exceed 5MB",
		}
	}
}

impl fmt::Display for UploadRejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

/// Checks a selected file against the accepted types and the size limit.
/// The type is checked first; a file failing both is reported as an unsupported type.
pub fn screen_upload(file: &FileDescriptor) -> Result<(), UploadRejection> {
	if !ACCEPTED_MIME_TYPES.contains(&file.mime_type.as_str()) {
		return Err(UploadRejection::UnsupportedType);
	}
	if file.size > MAX_UPLOAD_SIZE {
		return Err(UploadRejection::TooLarge);
	}
	Ok(())
}

/// Applies a new file selection to the tracked document. An accepted file replaces whatever was
/// tracked; a rejected one clears it, so a document the user replaced is never submitted.
pub fn apply_selection<T: AsRef<FileDescriptor>>(tracked: &mut Option<T>, selection: T) -> Result<(), UploadRejection> {
	match screen_upload(selection.as_ref()) {
		Ok(()) => {
			*tracked = Some(selection);
			Ok(())
		}
		Err(rejection) => {
			*tracked = None;
			Err(rejection)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn file(mime_type: &str, size: u64) -> FileDescriptor {
		FileDescriptor {
			name: String::from("diploma"),
			mime_type: mime_type.to_string(),
			size,
		}
	}

	#[test]
	fn accepts_documents_and_images() {
		assert_eq!(screen_upload(&file("image/png", 4 * 1024 * 1024)), Ok(()));
		assert_eq!(screen_upload(&file("image/jpeg", 1024)), Ok(()));
		assert_eq!(screen_upload(&file("application/pdf", MAX_UPLOAD_SIZE)), Ok(()));
	}

	#[test]
	fn rejects_other_types() {
		assert_eq!(
			screen_upload(&file("text/plain", 10)),
			Err(UploadRejection::UnsupportedType)
		);
		assert_eq!(screen_upload(&file("image/jpg", 10)), Err(UploadRejection::UnsupportedType));
		assert_eq!(screen_upload(&file("", 10)), Err(UploadRejection::UnsupportedType));
	}

	#[test]
	fn rejects_files_over_limit() {
		assert_eq!(
			screen_upload(&file("image/png", MAX_UPLOAD_SIZE + 1)),
			Err(UploadRejection::TooLarge)
		);
		assert_eq!(
			screen_upload(&file("text/plain", MAX_UPLOAD_SIZE + 1)),
			Err(UploadRejection::UnsupportedType)
		);
	}

	#[test]
	fn accepted_selection_is_tracked() {
		let mut tracked = None;
		let image = file("image/png", 4 * 1024 * 1024);
		assert_eq!(apply_selection(&mut tracked, image.clone()), Ok(()));
		assert_eq!(tracked, Some(image));
	}

	#[test]
	fn rejected_selection_clears_earlier_document() {
		let mut tracked = None;
		assert_eq!(apply_selection(&mut tracked, file("application/pdf", 2048)), Ok(()));
		assert_eq!(
			apply_selection(&mut tracked, file("text/plain", 10)),
			Err(UploadRejection::UnsupportedType)
		);
		assert_eq!(tracked, None);

		assert_eq!(apply_selection(&mut tracked, file("image/jpeg", 1024)), Ok(()));
		assert_eq!(
			apply_selection(&mut tracked, file("image/png", MAX_UPLOAD_SIZE + 1)),
			Err(UploadRejection::TooLarge)
		);
		assert_eq!(tracked, None);
	}
}
