//! Image Upload Handler
//!
//! Accepts one image per request, validates it by decoding, re-encodes
//! to JPEG and stores it under a content-hash filename so identical
//! uploads share one file.

use std::io::Cursor;

use axum::Json;
use axum::extract::{Multipart, State};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum accepted upload size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Stored images keep their appeal at 85% while staying small
const JPEG_QUALITY: u8 = 85;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Value entities store in `image_file_path`
    pub file_path: String,
    /// URL the site can fetch immediately
    pub url: String,
    pub original_name: String,
    pub size: usize,
}

fn validate(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large, maximum is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }
    let ext = ext.to_lowercase();
    if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }
    Ok(())
}

/// Decode-validate and re-encode as JPEG.
fn reencode_jpeg(data: &[u8]) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("Invalid image: {e}")))?;
    let mut buffer = Vec::new();
    let mut cursor = Cursor::new(&mut buffer);
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut cursor, JPEG_QUALITY);
    img.to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| AppError::internal(format!("Failed to encode image: {e}")))?;
    Ok(buffer)
}

/// POST /api/upload
pub async fn upload(
    State(state): State<ServerState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_name = None;

    while let Some(field) = multipart.next_field().await? {
        if matches!(field.name(), Some("file") | Some("") | None) {
            original_name = field.file_name().map(|s| s.to_string());
            field_data = Some(field.bytes().await?.to_vec());
            break;
        }
    }

    let data = field_data.ok_or_else(|| AppError::validation("No 'file' field in request"))?;
    let original_name =
        original_name.ok_or_else(|| AppError::validation("No filename in file field"))?;
    if data.is_empty() {
        return Err(AppError::validation("Empty file provided"));
    }

    let ext = std::path::Path::new(&original_name)
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| AppError::validation(format!("No file extension on: {original_name}")))?;
    validate(&data, ext)?;

    let jpeg = reencode_jpeg(&data)?;

    let hash = hex::encode(Sha256::digest(&jpeg));
    let filename = format!("{hash}.jpg");
    let images_dir = state.config.images_dir();
    tokio::fs::create_dir_all(&images_dir)
        .await
        .map_err(|e| AppError::internal(format!("Failed to create images dir: {e}")))?;

    let file_path = images_dir.join(&filename);
    if file_path.exists() {
        tracing::info!(original_name = %original_name, file = %filename, "Duplicate image, reusing stored file");
    } else {
        tokio::fs::write(&file_path, &jpeg)
            .await
            .map_err(|e| AppError::internal(format!("Failed to save file: {e}")))?;
        tracing::info!(original_name = %original_name, file = %filename, size = jpeg.len(), "Image stored");
    }

    Ok(Json(UploadResponse {
        url: format!("/images/{filename}"),
        file_path: filename,
        original_name,
        size: jpeg.len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(4, 4, image::Rgb([120, 40, 200]));
        let mut buffer = Vec::new();
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), image::ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn reencode_accepts_png_and_emits_jpeg() {
        let jpeg = reencode_jpeg(&sample_png()).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);
        assert!(image::load_from_memory(&jpeg).is_ok());
    }

    #[test]
    fn reencode_rejects_garbage() {
        assert!(reencode_jpeg(b"not an image at all").is_err());
    }

    #[test]
    fn identical_content_hashes_identically() {
        let a = reencode_jpeg(&sample_png()).unwrap();
        let b = reencode_jpeg(&sample_png()).unwrap();
        assert_eq!(hex::encode(Sha256::digest(&a)), hex::encode(Sha256::digest(&b)));
    }

    #[test]
    fn oversized_and_unknown_extensions_are_rejected() {
        assert!(validate(&vec![0u8; MAX_FILE_SIZE + 1], "png").is_err());
        assert!(validate(&[0u8; 10], "gif").is_err());
        assert!(validate(&[0u8; 10], "PNG").is_ok());
    }
}
