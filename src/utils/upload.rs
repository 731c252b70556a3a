use std::path::Path;

use axum::http::{header, HeaderMap};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Accepted image content types and the extension stored files get.
const MIME_TYPES: &[(&str, &str)] = &[
    ("image/jpg", "jpg"),
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
];

pub fn extension_for(content_type: &str) -> Option<&'static str> {
    MIME_TYPES
        .iter()
        .find(|(mime, _)| mime.eq_ignore_ascii_case(content_type))
        .map(|(_, ext)| *ext)
}

/// Write an uploaded image under `dir` and return the generated file name.
pub async fn store_image(dir: &Path, content_type: &str, bytes: &[u8]) -> AppResult<String> {
    let ext = extension_for(content_type).ok_or_else(|| {
        AppError::Validation(format!("Unsupported image type: {}", content_type))
    })?;

    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded image is empty".to_string()));
    }

    let filename = format!("{}.{}", Uuid::new_v4(), ext);

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create upload dir: {}", e)))?;
    tokio::fs::write(dir.join(&filename), bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to store image: {}", e)))?;

    tracing::debug!(%filename, size = bytes.len(), "Stored uploaded image");
    Ok(filename)
}

pub async fn remove_image(dir: &Path, filename: &str) {
    if let Err(e) = tokio::fs::remove_file(dir.join(filename)).await {
        tracing::warn!(%filename, error = %e, "Failed to remove orphaned image");
    }
}

/// `<protocol>://<host>/images/<filename>`, honouring reverse proxy headers.
pub fn public_image_url(headers: &HeaderMap, filename: &str) -> String {
    let protocol = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(header::HOST))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");

    format!("{}://{}/images/{}", protocol, host, filename)
}
