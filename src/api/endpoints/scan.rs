//! `POST /scan` — prescription photo in, structured record out.
//!
//! The upload is a multipart `image` field. The MIME type is detected
//! from magic bytes, never trusted from headers or extensions. Scanning
//! persists nothing; saving is a separate, explicit call.

use axum::extract::{Multipart, State};
use axum::http::HeaderMap;
use axum::Json;

use crate::api::endpoints::authenticate;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Prescription;

/// Maximum accepted image size (10 MB).
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub async fn scan(
    State(ctx): State<ApiContext>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<Prescription>, ApiError> {
    if ctx.scan_requires_auth {
        authenticate(&ctx, &headers).await?;
    }

    let mut image: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("failed to read image data: {e}")))?;
            image = Some(bytes.to_vec());
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("no image field in upload".into()))?;
    if image.len() > MAX_IMAGE_BYTES {
        return Err(ApiError::BadRequest(format!(
            "image too large, maximum {}MB",
            MAX_IMAGE_BYTES / (1024 * 1024)
        )));
    }

    let mime_type = detect_image_mime(&image).ok_or_else(|| {
        ApiError::BadRequest("file type not supported; send a JPEG, PNG, WebP or HEIC image".into())
    })?;

    let prescription = ctx.scanner.scan(&image, mime_type).await?;
    Ok(Json(prescription))
}

/// Detect a supported image MIME type from file magic bytes.
fn detect_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.len() < 4 {
        return None;
    }

    // JPEG: FF D8 FF
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }
    // PNG: 89 50 4E 47
    if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Some("image/png");
    }
    // WebP: RIFF....WEBP
    if bytes.len() >= 12 && bytes[..4] == *b"RIFF" && bytes[8..12] == *b"WEBP" {
        return Some("image/webp");
    }
    // HEIF/HEIC: ....ftyp at offset 4
    if bytes.len() >= 12 && bytes[4..8] == *b"ftyp" {
        if let Ok(brand) = std::str::from_utf8(&bytes[8..12]) {
            if brand.starts_with("heic") || brand.starts_with("heix") || brand.starts_with("mif1")
            {
                return Some("image/heic");
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_jpeg() {
        assert_eq!(
            detect_image_mime(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]),
            Some("image/jpeg")
        );
    }

    #[test]
    fn detect_png() {
        assert_eq!(
            detect_image_mime(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]),
            Some("image/png")
        );
    }

    #[test]
    fn detect_webp() {
        let mut bytes = vec![0u8; 12];
        bytes[..4].copy_from_slice(b"RIFF");
        bytes[8..12].copy_from_slice(b"WEBP");
        assert_eq!(detect_image_mime(&bytes), Some("image/webp"));
    }

    #[test]
    fn detect_heic() {
        let mut bytes = vec![0u8; 12];
        bytes[4..8].copy_from_slice(b"ftyp");
        bytes[8..12].copy_from_slice(b"heic");
        assert_eq!(detect_image_mime(&bytes), Some("image/heic"));
    }

    #[test]
    fn pdf_is_not_a_supported_image() {
        assert_eq!(detect_image_mime(b"%PDF-1.4 content"), None);
    }

    #[test]
    fn unknown_and_short_payloads_are_rejected() {
        assert_eq!(detect_image_mime(&[0x00, 0x01, 0x02, 0x03]), None);
        assert_eq!(detect_image_mime(&[0xFF]), None);
        assert_eq!(detect_image_mime(&[]), None);
    }
}
