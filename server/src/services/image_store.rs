use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::DynamicImage;
use sha2::{Digest, Sha256};

use crate::utils::{AppError, AppResult};

const JPEG_QUALITY: u8 = 85;

/// Materialized menu images
///
/// Draft menu items arrive from the back office carrying inline
/// `data:` URLs. On deploy those are decoded, validated, re-encoded as
/// JPEG and written under a content-hash filename, so the deployed
/// menu only ever references stable `/api/image/...` URLs and
/// identical uploads share one file.
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn is_data_url(value: &str) -> bool {
        value.starts_with("data:")
    }

    /// Decode, validate and store an inline image. Returns the public
    /// URL path for the stored file.
    pub fn store_data_url(&self, data_url: &str) -> AppResult<String> {
        let payload = data_url
            .split_once("base64,")
            .map(|(_, rest)| rest)
            .ok_or_else(|| AppError::invalid("image data URL is not base64-encoded"))?;

        let bytes = BASE64
            .decode(payload.trim())
            .map_err(|e| AppError::invalid(format!("invalid base64 image data: {e}")))?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| AppError::invalid(format!("unrecognized image format: {e}")))?;

        let jpeg = encode_jpeg(&decoded)?;

        let mut hasher = Sha256::new();
        hasher.update(&jpeg);
        let file_name = format!("{}.jpg", hex::encode(hasher.finalize()));

        let path = self.dir.join(&file_name);
        if !path.exists() {
            std::fs::write(&path, &jpeg)
                .map_err(|e| AppError::internal(format!("failed to write image: {e}")))?;
            tracing::debug!(file = %file_name, bytes = jpeg.len(), "Stored menu image");
        }

        Ok(format!("/api/image/{file_name}"))
    }

    /// Resolve a stored image by file name. Rejects anything that is
    /// not a plain file name so the route cannot escape the image
    /// directory.
    pub fn resolve(&self, file_name: &str) -> AppResult<PathBuf> {
        if file_name.is_empty()
            || file_name.contains("..")
            || file_name.contains('/')
            || file_name.contains('\\')
        {
            return Err(AppError::invalid("invalid image file name"));
        }
        let path = self.dir.join(file_name);
        if !path.is_file() {
            return Err(AppError::not_found(format!("image '{file_name}'")));
        }
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn encode_jpeg(img: &DynamicImage) -> AppResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buf = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| AppError::internal(format!("failed to encode image: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_data_url() -> String {
        // 2x2 red PNG, encoded fresh so the fixture can't rot
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([255u8, 0, 0]));
        let mut buf = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        format!("data:image/png;base64,{}", BASE64.encode(buf.into_inner()))
    }

    #[test]
    fn stores_and_dedups_by_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let url1 = store.store_data_url(&png_data_url()).unwrap();
        let url2 = store.store_data_url(&png_data_url()).unwrap();

        assert!(url1.starts_with("/api/image/"));
        assert!(url1.ends_with(".jpg"));
        assert_eq!(url1, url2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn rejects_garbage_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        assert!(store.store_data_url("data:image/png;base64,!!!").is_err());
        assert!(store
            .store_data_url("data:text/plain,hello")
            .is_err());
    }

    #[test]
    fn resolve_refuses_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        assert!(store.resolve("../secrets.txt").is_err());
        assert!(store.resolve("a/b.jpg").is_err());
        assert!(store.resolve("").is_err());
    }
}
