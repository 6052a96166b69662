//! Image file selection for uploads
//!
//! Files arrive either from the native picker or from a window drop. Both
//! paths end in `load`, which reads the bytes and refuses anything that is
//! not a recognisable image.

use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::data::{ImageFile, ProjectImage};

/// Extensions offered by the file picker
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff"];

/// Show the native file picker. Returns `None` if the operator cancels.
pub async fn pick() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Select Project Image")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Read a file from disk and check that it holds an image
pub async fn load(path: PathBuf) -> ApiResult<ImageFile> {
    let bytes = tokio::fs::read(&path).await?;
    let file_name = file_name(&path);

    let image = from_bytes(file_name, bytes)?;
    info!(
        "📸 Selected {} ({}, {} KB)",
        image.file_name,
        image.mime,
        image.image.bytes().len() / 1024
    );
    Ok(image)
}

/// Sniff the format of in-memory bytes
pub fn from_bytes(file_name: String, bytes: Vec<u8>) -> ApiResult<ImageFile> {
    let format = match image::guess_format(&bytes) {
        Ok(format) => format,
        Err(e) => {
            warn!("Refusing {}: {}", file_name, e);
            return Err(ApiError::NotAnImage(file_name));
        }
    };

    Ok(ImageFile {
        file_name,
        mime: format.to_mime_type(),
        image: ProjectImage::new(bytes),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
