//! Image I/O operations service
//!
//! This module separates file I/O operations from business logic,
//! making the system more testable and maintainable.

use crate::error::{Result, TrimError};
use crate::services::OutputFormatHandler;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Service for handling image file input/output operations
pub struct ImageIOService;

impl ImageIOService {
    /// Load an image from a file path
    ///
    /// The format is detected from the file contents, falling back to the
    /// extension when the contents are not recognized.
    ///
    /// # Errors
    /// * `TrimError::InputNotFound` - the path does not exist
    /// * `TrimError::CodecUnavailable` - the format is known but its decoder is not compiled in
    /// * `TrimError::Io` / `TrimError::Image` - read or decode failure
    ///
    /// # Examples
    /// ```rust,no_run
    /// use imgtrim::services::ImageIOService;
    ///
    /// let image = ImageIOService::load_image("logo.png")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(TrimError::input_not_found(path_ref));
        }

        let reader = ImageReader::open(path_ref)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| TrimError::file_io_error("read image file", path_ref, &e))?;

        if let Some(format) = reader.format() {
            if !format.reading_enabled() {
                return Err(TrimError::codec_unavailable(format, "decode"));
            }
            log::debug!("Detected {:?} input at {}", format, path_ref.display());
        }

        let image = reader.decode()?;
        log::debug!(
            "Decoded {} ({}x{}, {:?})",
            path_ref.display(),
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    /// Save an RGBA image, inferring the format from the path's extension
    ///
    /// The parent directory must already exist.
    ///
    /// # Errors
    /// * `TrimError::Image` - unknown extension or encode failure
    /// * `TrimError::CodecUnavailable` - the format is known but its encoder is not compiled in
    ///
    /// # Examples
    /// ```rust,no_run
    /// use image::RgbaImage;
    /// use imgtrim::services::ImageIOService;
    ///
    /// let image = RgbaImage::new(10, 10);
    /// ImageIOService::save_image(&image, "trimmed.png")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn save_image<P: AsRef<Path>>(image: &RgbaImage, path: P) -> Result<()> {
        let path_ref = path.as_ref();
        let format = Self::output_format(path_ref)?;

        let prepared = OutputFormatHandler::prepare_for_format(image.clone(), format);
        prepared.save_with_format(path_ref, format)?;

        log::debug!("Wrote {:?} output to {}", format, path_ref.display());
        Ok(())
    }

    /// Resolve the encoder for an output path from its extension
    ///
    /// # Errors
    /// * `TrimError::Image` - the extension is missing or not a known image format
    /// * `TrimError::CodecUnavailable` - the format is known but its encoder is not compiled in
    pub fn output_format<P: AsRef<Path>>(path: P) -> Result<ImageFormat> {
        let format = ImageFormat::from_path(path.as_ref())?;
        if !format.writing_enabled() {
            return Err(TrimError::codec_unavailable(format, "encode"));
        }
        Ok(format)
    }
}
