use crate::{DrawError, Point};

/// One segment of a glyph outline, in font units with y pointing up,
/// relative to the pen position on the baseline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Move(Point),
    Line(Point),
    Quad { control: Point, to: Point },
    Cubic {
        control1: Point,
        control2: Point,
        to: Point,
    },
}

impl Segment {
    /// The point this segment ends on.
    pub fn end(&self) -> Point {
        match *self {
            Segment::Move(to) | Segment::Line(to) => to,
            Segment::Quad { to, .. } | Segment::Cubic { to, .. } => to,
        }
    }
}

/// A single glyph as supplied by a [GlyphProvider].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    pub segments: Vec<Segment>,
    /// Horizontal pen advance after this glyph.
    pub advance: f64,
    pub ascent: f64,
    /// Descent below the baseline; negative for glyphs that descend.
    pub descent: f64,
}

impl Outline {
    /// The starting point of this outline, which anchors its placement.
    ///
    /// Returns `Ok(None)` for an empty outline. An outline whose first segment
    /// isn't a [Segment::Move] is malformed.
    pub fn start(&self, code: u32) -> Result<Option<Point>, DrawError> {
        match self.segments.first() {
            None => Ok(None),
            Some(Segment::Move(point)) => Ok(Some(*point)),
            Some(_) => Err(DrawError::MalformedGlyph { code }),
        }
    }
}

/// Source of glyph outlines for text rendering.
///
/// Implementors may use any font handle type; it's obtained once per text run
/// through [lookup](GlyphProvider::lookup).
pub trait GlyphProvider {
    type Font;

    /// Resolve a font by name.
    fn lookup(&self, name: &str) -> Self::Font;

    /// Outline of the character `code` at the given cell size, or `None` if the
    /// font has no glyph for it.
    fn outline(&self, font: &Self::Font, code: u32, width: u32, height: u32) -> Option<Outline>;
}

impl<P: GlyphProvider + ?Sized> GlyphProvider for &P {
    type Font = P::Font;

    fn lookup(&self, name: &str) -> Self::Font {
        (**self).lookup(name)
    }

    fn outline(&self, font: &Self::Font, code: u32, width: u32, height: u32) -> Option<Outline> {
        (**self).outline(font, code, width, height)
    }
}
