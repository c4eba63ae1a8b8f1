//! Trim processor
//!
//! This module provides the `TrimProcessor` that runs the full trim pipeline:
//! decode, normalize to RGBA, measure content bounds, crop, encode. Both the
//! library convenience functions and the CLI go through it.

use crate::{
    bounds::content_bounds,
    config::TrimConfig,
    error::Result,
    services::ImageIOService,
    types::{Dimensions, TrimOutcome, TrimReport, TrimmedImage},
};
use image::{imageops, DynamicImage};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Crops images to the bounding box of their visible pixels
#[derive(Debug, Clone, Default)]
pub struct TrimProcessor {
    config: TrimConfig,
}

impl TrimProcessor {
    /// Create a processor with a validated configuration
    ///
    /// # Errors
    /// - Invalid configuration values
    pub fn new(config: TrimConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Trim an in-memory image
    ///
    /// The image is normalized to RGBA8 first, so sources without an alpha channel
    /// are fully opaque and come back at their original size. Returns `None` when
    /// every pixel is at or below the alpha threshold.
    #[must_use]
    pub fn trim_image(&self, image: &DynamicImage) -> Option<TrimmedImage> {
        let rgba = image.to_rgba8();
        let original = Dimensions::from(rgba.dimensions());

        let bounds = content_bounds(&rgba, self.config.alpha_threshold)?;
        debug!(%original, %bounds, "Content bounds found");

        let cropped = imageops::crop_imm(
            &rgba,
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height(),
        )
        .to_image();

        Some(TrimmedImage {
            image: cropped,
            bounds,
            original,
        })
    }

    /// Trim an image file and write the result
    ///
    /// The input is fully decoded before anything is written, so `output` may be the
    /// same path as `input`. Nothing is written when the image is fully transparent.
    ///
    /// # Errors
    /// - `TrimError::InputNotFound` if `input` does not exist
    /// - `TrimError::CodecUnavailable` if a required codec is not compiled in
    /// - Decode, encode or I/O failures
    #[instrument(skip(self, input, output), fields(input = %input.as_ref().display(), output = %output.as_ref().display()))]
    pub fn trim_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<TrimOutcome> {
        let start = Instant::now();
        let output = output.as_ref();

        let image = ImageIOService::load_image(input.as_ref())?;

        let Some(trimmed) = self.trim_image(&image) else {
            let dimensions = Dimensions::new(image.width(), image.height());
            info!(%dimensions, "Image is fully transparent, skipping write");
            return Ok(TrimOutcome::FullyTransparent { dimensions });
        };

        ImageIOService::save_image(&trimmed.image, output)?;

        let report = TrimReport {
            original: trimmed.original,
            trimmed: trimmed.dimensions(),
            bounds: trimmed.bounds,
            output_path: output.to_path_buf(),
        };
        info!(
            original = %report.original,
            trimmed = %report.trimmed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trim complete"
        );

        Ok(TrimOutcome::Cropped(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrimError;
    use crate::types::BoundingBox;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    fn square_on_transparent(size: u32, offset: u32, side: u32) -> RgbaImage {
        let mut image = RgbaImage::new(size, size);
        for y in offset..offset + side {
            for x in offset..offset + side {
                image.put_pixel(x, y, Rgba([0, 128, 255, 255]));
            }
        }
        image
    }

    #[test]
    fn test_trim_centered_square() {
        let processor = TrimProcessor::default();
        let image = DynamicImage::ImageRgba8(square_on_transparent(100, 45, 10));

        let trimmed = processor.trim_image(&image).unwrap();
        assert_eq!(trimmed.original, Dimensions::new(100, 100));
        assert_eq!(trimmed.dimensions(), Dimensions::new(10, 10));
        assert_eq!(
            trimmed.bounds,
            BoundingBox {
                left: 45,
                top: 45,
                right: 55,
                bottom: 55
            }
        );
        assert!(trimmed.image.pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_opaque_rgb_keeps_full_extent() {
        let processor = TrimProcessor::default();
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(12, 7, Rgb([1, 2, 3])));

        let trimmed = processor.trim_image(&image).unwrap();
        assert_eq!(trimmed.dimensions(), Dimensions::new(12, 7));
        assert!(trimmed.bounds.is_full(trimmed.original));
    }

    #[test]
    fn test_fully_transparent_returns_none() {
        let processor = TrimProcessor::default();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(5, 5));
        assert!(processor.trim_image(&image).is_none());
    }

    #[test]
    fn test_trim_is_idempotent() {
        let processor = TrimProcessor::default();
        let mut source = square_on_transparent(40, 5, 20);
        source.put_pixel(30, 2, Rgba([0, 0, 0, 10]));

        let first = processor
            .trim_image(&DynamicImage::ImageRgba8(source))
            .unwrap();
        let second = processor
            .trim_image(&DynamicImage::ImageRgba8(first.image.clone()))
            .unwrap();
        assert_eq!(second.dimensions(), first.dimensions());
        assert_eq!(second.image, first.image);
    }

    #[test]
    fn test_threshold_trims_faint_halo() {
        let processor = TrimProcessor::new(TrimConfig { alpha_threshold: 64 }).unwrap();
        let mut source = square_on_transparent(30, 10, 5);
        source.put_pixel(0, 0, Rgba([255, 255, 255, 32]));

        let trimmed = processor
            .trim_image(&DynamicImage::ImageRgba8(source))
            .unwrap();
        assert_eq!(trimmed.dimensions(), Dimensions::new(5, 5));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = TrimProcessor::new(TrimConfig {
            alpha_threshold: 255,
        })
        .unwrap_err();
        assert!(matches!(err, TrimError::InvalidConfig(_)));
    }

    #[test]
    fn test_trim_file_writes_cropped_png() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("logo.png");
        let output = dir.path().join("logo-trimmed.png");
        square_on_transparent(100, 45, 10).save(&input).unwrap();

        let outcome = TrimProcessor::default().trim_file(&input, &output).unwrap();
        match outcome {
            TrimOutcome::Cropped(report) => {
                assert_eq!(report.original.to_string(), "(100, 100)");
                assert_eq!(report.trimmed.to_string(), "(10, 10)");
                assert_eq!(report.output_path, output);
            },
            other @ TrimOutcome::FullyTransparent { .. } => panic!("unexpected {other:?}"),
        }

        let written = image::open(&output).unwrap();
        assert_eq!((written.width(), written.height()), (10, 10));
    }

    #[test]
    fn test_trim_file_transparent_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("blank.png");
        let output = dir.path().join("out.png");
        RgbaImage::new(8, 8).save(&input).unwrap();

        let outcome = TrimProcessor::default().trim_file(&input, &output).unwrap();
        assert_eq!(
            outcome,
            TrimOutcome::FullyTransparent {
                dimensions: Dimensions::new(8, 8)
            }
        );
        assert!(!output.exists());
    }

    #[test]
    fn test_trim_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        square_on_transparent(50, 10, 4).save(&path).unwrap();

        TrimProcessor::default().trim_file(&path, &path).unwrap();
        let written = image::open(&path).unwrap();
        assert_eq!((written.width(), written.height()), (4, 4));
    }

    #[test]
    fn test_trim_file_missing_input() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.png");
        let err = TrimProcessor::default()
            .trim_file(dir.path().join("missing.png"), &output)
            .unwrap_err();
        assert!(matches!(err, TrimError::InputNotFound(_)));
        assert!(!output.exists());
    }
}
