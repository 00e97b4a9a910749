//! Client-side upload checks, mirroring what the service enforces so a
//! bad file is rejected before it leaves the machine.

use std::path::Path;

use crate::error::ClassifierError;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// An image ready to send as the `file` field of a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    file_name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ClassifierError> {
        let file_name = file_name.into();
        let extension = validate_file_name(&file_name)?;
        check_size(bytes.len() as u64)?;

        Ok(Self {
            mime: mime_for(&extension),
            file_name,
            bytes,
        })
    }

    /// Read and validate an image from disk. The size is checked from
    /// metadata before the file is read.
    pub async fn from_path(path: &Path) -> Result<Self, ClassifierError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        validate_file_name(&file_name)?;

        let size = tokio::fs::metadata(path).await?.len();
        check_size(size)?;

        let bytes = tokio::fs::read(path).await?;
        Self::from_bytes(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Check the extension (case-insensitive) and return it lowercased.
pub fn validate_file_name(file_name: &str) -> Result<String, ClassifierError> {
    if file_name.trim().is_empty() {
        return Err(ClassifierError::EmptyFile);
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(ClassifierError::UnsupportedFormat {
            extension,
            allowed: ALLOWED_EXTENSIONS.join(", "),
        })
    }
}

fn check_size(size: u64) -> Result<(), ClassifierError> {
    if size == 0 {
        return Err(ClassifierError::EmptyFile);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(ClassifierError::FileTooLarge {
            size,
            max_mb: MAX_UPLOAD_BYTES / (1024 * 1024),
        });
    }
    Ok(())
}

fn mime_for(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}
