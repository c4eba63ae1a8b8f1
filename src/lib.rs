#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # imgtrim
//!
//! Trims uniform transparent padding from images by computing the bounding box of
//! visible pixels and cropping to it. Built for asset preparation, e.g. trimming a
//! logo before packaging.
//!
//! ## Features
//!
//! - **Alpha-aware bounds**: every pixel with alpha above the threshold (default 0) is content
//! - **Format Support**: PNG, JPEG, GIF, BMP, TIFF and WebP; output format follows the extension
//! - **CLI Integration**: Optional command-line interface (enable with `cli` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use imgtrim::{trim_file, TrimConfig, TrimOutcome};
//!
//! # fn example() -> imgtrim::Result<()> {
//! match trim_file("logo.png", "logo-trimmed.png", &TrimConfig::default())? {
//!     TrimOutcome::Cropped(report) => {
//!         println!("{} -> {}", report.original, report.trimmed);
//!     },
//!     TrimOutcome::FullyTransparent { .. } => println!("nothing to crop"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Feature Flags
//!
//! - `cli` (default): Command-line interface and tracing subscriber setup
//! - `webp-support` (default): WebP image format support
//! - `tracing-json`: JSON log output for the CLI

pub mod bounds;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod processor;
pub mod services;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod types;

use std::path::Path;

// Public API exports
pub use bounds::content_bounds;
pub use config::{TrimConfig, TrimConfigBuilder, DEFAULT_ALPHA_THRESHOLD};
pub use error::{Result, TrimError};
pub use processor::TrimProcessor;
pub use services::{ImageIOService, OutputFormatHandler};
pub use types::{BoundingBox, Dimensions, TrimOutcome, TrimReport, TrimmedImage};

#[cfg(feature = "cli")]
pub use tracing_config::{TracingConfig, TracingFormat};

/// Trim a `DynamicImage` in memory
///
/// Returns `Ok(None)` when the image has no pixel above the alpha threshold.
///
/// # Examples
/// ```rust
/// use image::{DynamicImage, Rgba, RgbaImage};
/// use imgtrim::{trim_image, TrimConfig};
///
/// let mut image = RgbaImage::new(20, 20);
/// image.put_pixel(4, 6, Rgba([255, 0, 0, 255]));
/// let trimmed = trim_image(&DynamicImage::ImageRgba8(image), &TrimConfig::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(trimmed.image.dimensions(), (1, 1));
/// ```
pub fn trim_image(
    image: &image::DynamicImage,
    config: &TrimConfig,
) -> Result<Option<TrimmedImage>> {
    let processor = TrimProcessor::new(config.clone())?;
    Ok(processor.trim_image(image))
}

/// Trim an image file and write the cropped result to `output`
///
/// The output format is inferred from the extension of `output`.
pub fn trim_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: &TrimConfig,
) -> Result<TrimOutcome> {
    TrimProcessor::new(config.clone())?.trim_file(input, output)
}
