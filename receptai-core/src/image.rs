//! Upload validation for product photos.
//!
//! The declared content type is checked first, then the bytes themselves are
//! sniffed and decoded so a renamed text file never reaches the detector.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};

use crate::error::ImageError;

/// Formats the detector accepts.
pub const ALLOWED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP];

/// Declared content types accepted on upload.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];

/// Maximum upload size (10MB).
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

/// Validate image data: detect the format from magic bytes, check it is
/// allowed and that the image decodes.
///
/// Returns the detected content type (e.g. "image/png").
pub fn validate_image(data: &[u8]) -> Result<String, ImageError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ImageError::Unreadable(e.to_string()))?;

    let format = reader.format().ok_or(ImageError::UnknownFormat)?;

    if !ALLOWED_FORMATS.contains(&format) {
        return Err(ImageError::UnsupportedFormat(format!("{:?}", format)));
    }

    reader
        .decode()
        .map_err(|e| ImageError::Undecodable(e.to_string()))?;

    Ok(format.to_mime_type().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_validate_png() {
        assert_eq!(validate_image(&encode(ImageFormat::Png)).unwrap(), "image/png");
    }

    #[test]
    fn test_validate_jpeg() {
        assert_eq!(validate_image(&encode(ImageFormat::Jpeg)).unwrap(), "image/jpeg");
    }

    #[test]
    fn test_truncated_jpeg_is_rejected() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0];
        assert!(matches!(
            validate_image(&jpeg_header),
            Err(ImageError::Undecodable(_))
        ));
    }

    #[test]
    fn test_validate_invalid_format() {
        assert_eq!(validate_image(b"not an image"), Err(ImageError::UnknownFormat));
    }

    #[test]
    fn test_content_types() {
        assert!(is_allowed_content_type("image/webp"));
        assert!(!is_allowed_content_type("image/gif"));
        assert!(!is_allowed_content_type("text/plain"));
    }
}
