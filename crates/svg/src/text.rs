use barcode_svg_core::{DrawError, FontSpec, GlyphProvider, Outline, Point, TextMetrics};
use rustc_hash::FxHashMap;
use svg::node::element::{Group, Use};

use crate::Canvas;
use crate::glyphs::{glyph_id, relative_outline};

/// Font cell size as the glyph provider expects it, in whole units.
fn cell(width: f64, height: f64) -> (u32, u32) {
    (width as u32, height as u32)
}

pub(crate) fn measure<P: GlyphProvider>(
    provider: &P,
    text: &str,
    font: &str,
    width: f64,
    height: f64,
) -> TextMetrics {
    let handle = provider.lookup(font);
    let (width, height) = cell(width, height);

    text.chars()
        .filter_map(|c| provider.outline(&handle, u32::from(c), width, height))
        .fold(TextMetrics::default(), |metrics, glyph| TextMetrics {
            width: metrics.width + glyph.advance,
            ascent: metrics.ascent.max(glyph.ascent),
            descent: metrics.descent.max(-glyph.descent),
        })
}

impl Canvas {
    /// Define any glyphs of `text` not yet in the document, then place the
    /// whole run as one group of references.
    pub(crate) fn text<P: GlyphProvider>(
        &mut self,
        provider: &P,
        (x, y): (f64, f64),
        text: &str,
        color: &str,
        font: &FontSpec,
    ) -> Result<(), DrawError> {
        let scale = self.text_scale;
        let handle = provider.lookup(&font.name);
        let (width, height) = cell(font.width * scale.width, font.height * scale.height);
        let spacing = (font.dx * scale.width).trunc();

        let mut outlines: FxHashMap<u32, Option<Outline>> = FxHashMap::default();
        for code in text.chars().map(u32::from) {
            outlines
                .entry(code)
                .or_insert_with(|| provider.outline(&handle, code, width, height));
        }
        let outline = |code: u32| outlines.get(&code).and_then(Option::as_ref);

        for code in text.chars().map(u32::from) {
            if self.glyphs.contains(code) {
                continue;
            }
            let Some(glyph) = outline(code) else {
                log::debug!("no glyph for U+{code:04X} in {}", font.name);
                continue;
            };
            if let Some(data) = relative_outline(&self.transform, glyph, Point::new(x, y), code)? {
                self.glyphs.define(code, data);
            }
        }

        let mut pen = x;
        let mut anchor: Option<Point> = None;
        let mut placements = Vec::new();
        for code in text.chars().map(u32::from) {
            let Some(glyph) = outline(code) else {
                continue;
            };
            match glyph.start(code)? {
                Some(start) => {
                    let at = self.transform.apply(pen + start.x, y - start.y);
                    let first = *anchor.get_or_insert(at);
                    placements.push(
                        Use::new()
                            .set("href", format!("#{}", glyph_id(code)))
                            .set("x", self.transform.round(at.x - first.x))
                            .set("y", self.transform.round(at.y - first.y)),
                    );
                }
                // Nothing to anchor the run to.
                None if anchor.is_none() => return Err(DrawError::UnresolvedPlacement { code }),
                None => {}
            }
            pen += glyph.advance + spacing;
        }

        let Some(anchor) = anchor else {
            return Ok(());
        };

        // The baseline turns with the page, so the scale axes do too.
        let (sx, sy) = if self.transform.orientation().swaps_axes() {
            (scale.height, scale.width)
        } else {
            (scale.width, scale.height)
        };
        let offset = self.text_offset;
        let transform = format!(
            "translate({}, {})translate({}, {})scale({}, {})",
            anchor.x, anchor.y, offset.x, offset.y, sx, sy
        );

        let group = placements.into_iter().fold(
            Group::new()
                .set("class", "text")
                .set("fill", format!("#{color}"))
                .set("transform", transform),
            |group, placement| group.add(placement),
        );
        self.shapes.push(crate::Shape::Text(group));
        Ok(())
    }
}
