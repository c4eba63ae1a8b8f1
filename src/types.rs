//! Core types for trim operations

use image::RgbaImage;
use std::fmt;
use std::path::PathBuf;

/// Width and height of an image in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Renders as `(w, h)`
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Axis-aligned rectangle in pixel coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` are exclusive, so the box covers
/// `right - left` columns and `bottom - top` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    /// True when the box spans an entire image of the given size
    #[must_use]
    pub fn is_full(&self, image: Dimensions) -> bool {
        self.left == 0 && self.top == 0 && self.right == image.width && self.bottom == image.height
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// An in-memory trim result
#[derive(Debug, Clone)]
pub struct TrimmedImage {
    /// The cropped RGBA image
    pub image: RgbaImage,
    /// Box the image was cropped to, in source coordinates
    pub bounds: BoundingBox,
    /// Size of the source image
    pub original: Dimensions,
}

impl TrimmedImage {
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.image.dimensions().into()
    }
}

/// Summary of a trim that produced an output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimReport {
    pub original: Dimensions,
    pub trimmed: Dimensions,
    pub bounds: BoundingBox,
    pub output_path: PathBuf,
}

/// Terminal state of a file trim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimOutcome {
    /// Output written
    Cropped(TrimReport),
    /// No pixel counted as content; nothing was written
    FullyTransparent { dimensions: Dimensions },
}
