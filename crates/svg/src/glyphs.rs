use barcode_svg_core::{DrawError, Outline, Point, Segment, Transform};
use rustc_hash::FxHashSet;
use svg::node::element::{Definitions, Group, Path};

use crate::data::PathData;

/// Glyph outlines defined once per document and referenced by `<use>`.
#[derive(Debug, Default)]
pub(crate) struct GlyphDefs {
    defined: FxHashSet<u32>,
    defs: Vec<Group>,
}

impl GlyphDefs {
    pub fn contains(&self, code: u32) -> bool {
        self.defined.contains(&code)
    }

    /// Define `code` unless it already is.
    pub fn define(&mut self, code: u32, data: PathData) {
        if !self.defined.insert(code) {
            return;
        }
        log::trace!("defining glyph U+{code:04X}");
        self.defs.push(
            Group::new()
                .set("id", glyph_id(code))
                .add(Path::new().set("class", "text").set("d", data.finish())),
        );
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn into_definitions(self) -> Definitions {
        self.defs
            .into_iter()
            .fold(Definitions::new(), |defs, glyph| defs.add(glyph))
    }
}

pub(crate) fn glyph_id(code: u32) -> String {
    format!("text_{code}")
}

/// Convert an outline drawn with its pen at `pen` into path data relative to
/// the outline's own starting point.
///
/// Points are transformed before deltas are taken, so the result already
/// carries the document's rotation. Returns `None` for an empty outline.
pub(crate) fn relative_outline(
    transform: &Transform,
    outline: &Outline,
    pen: Point,
    code: u32,
) -> Result<Option<PathData>, DrawError> {
    let Some(start) = outline.start(code)? else {
        return Ok(None);
    };

    // Font y points up, page y points down.
    let place = |p: Point| transform.apply(pen.x + p.x, pen.y - p.y);
    let delta = |to: Point, from: Point| {
        Point::new(transform.round(to.x - from.x), transform.round(to.y - from.y))
    };

    let mut data = PathData::default();
    data.command('M').point(Point::default());

    let mut prev = place(start);
    for segment in &outline.segments[1..] {
        let to = place(segment.end());
        match *segment {
            Segment::Move(_) => data.command('m').point(delta(to, prev)),
            Segment::Line(_) => data.command('l').point(delta(to, prev)),
            Segment::Quad { control, .. } => data
                .command('q')
                .point(delta(place(control), prev))
                .point(delta(to, prev)),
            Segment::Cubic {
                control1, control2, ..
            } => data
                .command('c')
                .point(delta(place(control1), prev))
                .point(delta(place(control2), prev))
                .point(delta(to, prev)),
        };
        prev = to;
    }
    data.command('Z');

    Ok(Some(data))
}
