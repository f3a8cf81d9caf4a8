//! `barcode-svg-core` provides the shared definitions for the `barcode-svg` crate.
//!
//! A barcode engine describes a symbol as a stream of orientation-agnostic
//! primitives (bars, modules, bullseye rings, human-readable text). This crate
//! holds everything a backend needs to turn that stream into vector output:
//!
//! - the [Drawing] protocol the engine calls,
//! - the [GlyphProvider] a backend consults for text outlines,
//! - the fixed [Transform] that bakes padding and rotation into coordinates.

mod error;
mod glyph;
mod transform;

pub use error::{DrawError, ParseOrientationError};
pub use glyph::{GlyphProvider, Outline, Segment};
pub use transform::{Coefficients, Orientation, Padding, Precision, Transform};

/// A point in either input (unrotated) or output (canvas) space.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Result of [Drawing::measure].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    /// Sum of glyph advances.
    pub width: f64,
    /// Tallest ascent of any glyph.
    pub ascent: f64,
    /// Deepest descent of any glyph, as a non-negative magnitude.
    pub descent: f64,
}

/// Font requested for a run of text.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Name handed to [GlyphProvider::lookup], typically `OCR-A` or `OCR-B`.
    pub name: String,
    /// Font cell width.
    pub width: f64,
    /// Font cell height.
    pub height: f64,
    /// Extra space between characters, usually zero.
    pub dx: f64,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            dx: 0.0,
        }
    }

    pub fn with_spacing(mut self, dx: f64) -> Self {
        self.dx = dx;
        self
    }
}

/// The drawing protocol a barcode engine drives.
///
/// Calls arrive in a fixed order: [scale](Drawing::scale) and
/// [measure](Drawing::measure) at any time, then [init](Drawing::init), then any
/// number of primitives, then [end](Drawing::end) exactly once. Implementors
/// reject primitives outside that window with [DrawError].
///
/// All coordinates are in the unrotated input space of the symbol.
pub trait Drawing {
    /// The finished document.
    type Output;

    /// Scaling hint from the engine.
    fn scale(&mut self, sx: f64, sy: f64);

    /// Measure a string in the named font at the given cell size.
    fn measure(&self, text: &str, font: &str, width: f64, height: f64) -> TextMetrics;

    /// Start a document whose unrotated, unpadded content box is `width` × `height`.
    fn init(&mut self, width: f64, height: f64) -> Result<(), DrawError>;

    /// An unconnected, axis-aligned stroked line.
    fn line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: f64,
        color: &str,
    ) -> Result<(), DrawError>;

    /// A closed contour added to the open fill path.
    fn polygon(&mut self, points: &[Point]) -> Result<(), DrawError>;

    /// A hexagon, drawn from the top, counter-clockwise.
    fn hexagon(&mut self, points: &[Point], color: &str) -> Result<(), DrawError>;

    /// A full ellipse added to the open fill path.
    fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, ccw: bool)
    -> Result<(), DrawError>;

    /// Fill the open path, if any, with the given colour.
    fn fill(&mut self, color: &str) -> Result<(), DrawError>;

    /// Draw a run of text whose baseline starts at `(x, y)`.
    fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        color: &str,
        font: &FontSpec,
    ) -> Result<(), DrawError>;

    /// Finish the document.
    fn end(&mut self) -> Result<Self::Output, DrawError>;
}
