use crate::consts::MAX_UPLOAD_BYTES;
use crate::exceptions::DrynessError;
use image::ImageFormat;
use std::fs;
use std::path::Path;

pub const TOO_LARGE_MESSAGE: &str = "File is too large. Maximum size is 10MB.";
pub const NOT_AN_IMAGE_MESSAGE: &str = "The selected file is not an image.";

/// An image that passed the size and type checks and is ready to be sent.
#[derive(Debug, Clone)]
pub struct UploadImage {
    pub filename: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl UploadImage {
    pub fn from_path(path: &Path) -> Result<Self, DrynessError> {
        let meta = fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                DrynessError::InvalidInput(format!("File not found: {}", path.display()))
            }
            _ => DrynessError::Io(e),
        })?;

        if meta.is_dir() {
            return Err(DrynessError::InvalidInput(format!(
                "Expected an image file, got a directory: {}",
                path.display()
            )));
        }

        // Size is checked before reading so oversized files are never loaded.
        check_size(meta.len())?;

        let bytes = fs::read(path)?;
        let format = detect_format(path, &bytes)
            .ok_or_else(|| DrynessError::InvalidInput(NOT_AN_IMAGE_MESSAGE.into()))?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        tracing::debug!(
            "Validated {} ({} bytes, {})",
            filename,
            bytes.len(),
            format.to_mime_type()
        );

        Ok(Self {
            filename,
            mime_type: format.to_mime_type(),
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

pub fn check_size(len: u64) -> Result<(), DrynessError> {
    if len > MAX_UPLOAD_BYTES {
        return Err(DrynessError::InvalidInput(TOO_LARGE_MESSAGE.into()));
    }
    Ok(())
}

/// Magic bytes take priority; the extension is only consulted when the content is not recognised.
pub fn detect_format(path: &Path, bytes: &[u8]) -> Option<ImageFormat> {
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format);
    }
    if bytes.is_empty() {
        return None;
    }
    ImageFormat::from_path(path).ok()
}
