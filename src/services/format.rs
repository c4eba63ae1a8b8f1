//! Output format handling service
//!
//! This module separates output format conversion logic from business logic,
//! making the system more testable and maintainable.

use image::{DynamicImage, ImageFormat, RgbaImage};

/// Service for handling output format conversions
pub struct OutputFormatHandler;

impl OutputFormatHandler {
    /// Prepare an RGBA image for encoding in the given format
    ///
    /// Formats without an alpha channel receive the RGB channels only; everything
    /// else keeps RGBA.
    ///
    /// # Examples
    /// ```rust
    /// use image::{ImageFormat, RgbaImage};
    /// use imgtrim::services::OutputFormatHandler;
    ///
    /// let image = RgbaImage::new(4, 4);
    /// let jpeg = OutputFormatHandler::prepare_for_format(image.clone(), ImageFormat::Jpeg);
    /// assert!(!jpeg.color().has_alpha());
    /// let png = OutputFormatHandler::prepare_for_format(image, ImageFormat::Png);
    /// assert!(png.color().has_alpha());
    /// ```
    #[must_use]
    pub fn prepare_for_format(rgba_image: RgbaImage, format: ImageFormat) -> DynamicImage {
        let image = DynamicImage::ImageRgba8(rgba_image);
        if Self::supports_transparency(format) {
            image
        } else {
            log::debug!(
                "Output format {:?} has no alpha channel, dropping transparency",
                format
            );
            DynamicImage::ImageRgb8(image.to_rgb8())
        }
    }

    /// Check if a format supports transparency (alpha channel)
    ///
    /// # Examples
    /// ```rust
    /// use image::ImageFormat;
    /// use imgtrim::services::OutputFormatHandler;
    ///
    /// assert!(OutputFormatHandler::supports_transparency(ImageFormat::Png));
    /// assert!(!OutputFormatHandler::supports_transparency(ImageFormat::Jpeg));
    /// ```
    #[must_use]
    pub fn supports_transparency(format: ImageFormat) -> bool {
        !matches!(
            format,
            ImageFormat::Jpeg | ImageFormat::Pnm | ImageFormat::Hdr
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    #[test]
    fn test_jpeg_drops_alpha_but_keeps_color() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 128]));
        let prepared = OutputFormatHandler::prepare_for_format(rgba, ImageFormat::Jpeg);
        assert_eq!(prepared.dimensions(), (2, 2));
        let rgb = prepared.as_rgb8().unwrap();
        assert_eq!(rgb.get_pixel(1, 1).0, [200, 100, 50]);
    }

    #[test]
    fn test_png_keeps_rgba_untouched() {
        let rgba = RgbaImage::from_pixel(3, 1, Rgba([1, 2, 3, 4]));
        let prepared = OutputFormatHandler::prepare_for_format(rgba.clone(), ImageFormat::Png);
        assert_eq!(prepared.as_rgba8(), Some(&rgba));
    }

    #[test]
    fn test_transparency_support() {
        for format in [
            ImageFormat::Png,
            ImageFormat::WebP,
            ImageFormat::Tiff,
            ImageFormat::Gif,
            ImageFormat::Bmp,
        ] {
            assert!(OutputFormatHandler::supports_transparency(format));
        }
        assert!(!OutputFormatHandler::supports_transparency(ImageFormat::Jpeg));
    }
}
