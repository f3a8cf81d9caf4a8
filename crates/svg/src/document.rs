use svg::Document;
use svg::node::element::{Group, Rectangle};

use crate::{Canvas, Shape};

impl Canvas {
    /// Assemble the finished document: glyph definitions, background, the
    /// stroked lines, then fills and text in the order they were drawn.
    pub(crate) fn into_document(self, background: Option<&str>) -> Document {
        let (width, height) = (self.transform.width(), self.transform.height());
        log::debug!(
            "finishing {width}x{height} document: {} glyphs, {} stroke batches, {} shapes",
            self.glyphs.len(),
            self.strokes.len(),
            self.shapes.len(),
        );
        if self.fill.is_open() {
            log::warn!("discarding path that was never filled");
        }

        let mut document = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("version", "1.1")
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("preserveAspectRatio", "xMidYMid meet")
            .add(self.glyphs.into_definitions());

        if let Some(color) = background {
            document = document.add(
                Rectangle::new()
                    .set("id", "barcodeBG")
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", format!("#{color}")),
            );
        }

        let lines = self
            .strokes
            .into_paths()
            .fold(Group::new().set("id", "linesArea"), |group, path| {
                group.add(path)
            });
        document = document.add(lines);

        self.shapes
            .into_iter()
            .fold(document, |document, shape| match shape {
                Shape::Fill(path) => document.add(path),
                Shape::Text(group) => document.add(group),
            })
    }
}
