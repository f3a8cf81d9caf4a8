//! `barcode-svg` is a drawing backend that turns the primitives of a barcode
//! renderer into a single SVG document.
//!
//! Rotation and padding are applied while drawing, so the resulting SVG holds
//! the already-rotated symbol without any outer transform. Linear barcodes
//! come out as a few stroked paths (one per bar width and colour), 2D
//! barcodes as even-odd filled paths, and human-readable text as glyph
//! outlines defined once and referenced with `<use>`.
//!
//! ```
//! use barcode_svg::{Drawing, GlyphProvider, Outline, SvgDrawing, SvgOptions};
//!
//! /// A font without any glyphs.
//! struct NoGlyphs;
//!
//! impl GlyphProvider for NoGlyphs {
//!     type Font = ();
//!     fn lookup(&self, _name: &str) -> Self::Font {}
//!     fn outline(&self, _: &(), _: u32, _: u32, _: u32) -> Option<Outline> {
//!         None
//!     }
//! }
//!
//! let mut drawing = SvgDrawing::new(SvgOptions::default().with_background("ffffff"), NoGlyphs);
//! drawing.init(20.0, 10.0)?;
//! drawing.line(2.0, 0.0, 2.0, 10.0, 1.0, "000000")?;
//! drawing.line(5.0, 0.0, 5.0, 10.0, 1.0, "000000")?;
//! let document = drawing.end()?;
//! assert!(document.to_string().contains("M2.5,0 L2.5,10 M5.5,0 L5.5,10"));
//! # Ok::<(), barcode_svg::DrawError>(())
//! ```

mod data;
mod document;
mod glyphs;
mod options;
mod shapes;
mod strokes;
mod text;

pub use barcode_svg_core::{
    DrawError, Drawing, FontSpec, GlyphProvider, Orientation, Outline, Padding, Point, Precision,
    Segment, TextMetrics, Transform,
};
pub use options::{SvgOptions, TextOffset, TextScale};
pub use shapes::ELLIPSE_MAGIC;

use glyphs::GlyphDefs;
use shapes::FillPath;
use strokes::StrokeBatches;
use svg::Document;
use svg::node::element::{Group, Path};

/// A sealed element, kept in drawing order.
#[derive(Debug)]
enum Shape {
    Fill(Path),
    Text(Group),
}

/// Everything drawn between `init` and `end`.
#[derive(Debug)]
struct Canvas {
    transform: Transform,
    text_scale: TextScale,
    text_offset: TextOffset,
    strokes: StrokeBatches,
    fill: FillPath,
    shapes: Vec<Shape>,
    glyphs: GlyphDefs,
}

#[derive(Debug)]
enum Stage {
    Pending,
    Drawing(Canvas),
    /// A text run failed; its partial glyph definitions are discarded.
    Aborted,
    Finished,
}

/// A [Drawing] that produces an [svg::Document].
///
/// One instance draws one document; the glyph provider is consulted for
/// [measure](Drawing::measure) and [text](Drawing::text).
#[derive(Debug)]
pub struct SvgDrawing<P> {
    options: SvgOptions,
    provider: P,
    stage: Stage,
}

impl<P: GlyphProvider> SvgDrawing<P> {
    pub fn new(options: SvgOptions, provider: P) -> Self {
        Self {
            options,
            provider,
            stage: Stage::Pending,
        }
    }

    /// The transform fixed by `init`, if drawing has started.
    pub fn transform(&self) -> Option<&Transform> {
        match &self.stage {
            Stage::Drawing(canvas) => Some(&canvas.transform),
            _ => None,
        }
    }

    fn canvas(&mut self) -> Result<&mut Canvas, DrawError> {
        self.canvas_and_provider().map(|(canvas, _)| canvas)
    }

    /// The open canvas, borrowed alongside the glyph provider.
    fn canvas_and_provider(&mut self) -> Result<(&mut Canvas, &P), DrawError> {
        match &mut self.stage {
            Stage::Drawing(canvas) => Ok((canvas, &self.provider)),
            Stage::Pending => Err(DrawError::NotInitialized),
            Stage::Aborted => Err(DrawError::Aborted),
            Stage::Finished => Err(DrawError::Finished),
        }
    }
}

impl<P: GlyphProvider> Drawing for SvgDrawing<P> {
    type Output = Document;

    /// Scaling is already folded into the coordinates the engine sends.
    fn scale(&mut self, _sx: f64, _sy: f64) {}

    fn measure(&self, text: &str, font: &str, width: f64, height: f64) -> TextMetrics {
        crate::text::measure(&self.provider, text, font, width, height)
    }

    fn init(&mut self, width: f64, height: f64) -> Result<(), DrawError> {
        if matches!(self.stage, Stage::Finished) {
            return Err(DrawError::Finished);
        }

        let options = &self.options;
        let transform = Transform::new(
            options.orientation,
            options.padding,
            width,
            height,
            options.precision,
        );
        log::debug!(
            "init {width}x{height} content as {}x{} {:?} canvas",
            transform.width(),
            transform.height(),
            options.orientation,
        );

        self.stage = Stage::Drawing(Canvas {
            transform,
            text_scale: options.text_scale,
            text_offset: options.text_offset,
            strokes: StrokeBatches::default(),
            fill: FillPath::default(),
            shapes: Vec::new(),
            glyphs: GlyphDefs::default(),
        });
        Ok(())
    }

    fn line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: f64,
        color: &str,
    ) -> Result<(), DrawError> {
        let canvas = self.canvas()?;
        canvas
            .strokes
            .line(&canvas.transform, (x0, y0), (x1, y1), width, color);
        Ok(())
    }

    fn polygon(&mut self, points: &[Point]) -> Result<(), DrawError> {
        let canvas = self.canvas()?;
        canvas.fill.polygon(&canvas.transform, points);
        Ok(())
    }

    /// A hexagon is just a polygon; the colour arrives with the next fill.
    fn hexagon(&mut self, points: &[Point], _color: &str) -> Result<(), DrawError> {
        self.polygon(points)
    }

    fn ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        _ccw: bool,
    ) -> Result<(), DrawError> {
        let canvas = self.canvas()?;
        canvas
            .fill
            .ellipse(&canvas.transform, Point::new(cx, cy), rx, ry);
        Ok(())
    }

    fn fill(&mut self, color: &str) -> Result<(), DrawError> {
        let canvas = self.canvas()?;
        if let Some(path) = canvas.fill.fill(color) {
            canvas.shapes.push(Shape::Fill(path));
        }
        Ok(())
    }

    fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        color: &str,
        font: &FontSpec,
    ) -> Result<(), DrawError> {
        let (canvas, provider) = self.canvas_and_provider()?;
        let result = canvas.text(provider, (x, y), text, color, font);
        if let Err(err) = result {
            log::error!("abandoning document: {err}");
            self.stage = Stage::Aborted;
        }
        result
    }

    fn end(&mut self) -> Result<Document, DrawError> {
        match std::mem::replace(&mut self.stage, Stage::Finished) {
            Stage::Drawing(canvas) => Ok(canvas.into_document(self.options.background_color())),
            Stage::Pending => {
                self.stage = Stage::Pending;
                Err(DrawError::NotInitialized)
            }
            Stage::Aborted => {
                self.stage = Stage::Aborted;
                Err(DrawError::Aborted)
            }
            Stage::Finished => Err(DrawError::Finished),
        }
    }
}
