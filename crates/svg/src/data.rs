use std::fmt::Write;

use barcode_svg_core::Point;

/// Path data under construction.
///
/// Every point is written as `x,y ` straight after its command letter, so
/// `M1,2 L3,4 ` reads back as a move and a line. Coordinates must already be
/// rounded.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PathData(String);

impl PathData {
    pub fn command(&mut self, letter: char) -> &mut Self {
        self.0.push(letter);
        self
    }

    pub fn point(&mut self, point: Point) -> &mut Self {
        let _ = write!(self.0, "{},{} ", point.x, point.y);
        self
    }

    pub fn finish(mut self) -> String {
        self.0.truncate(self.0.trim_end().len());
        self.0
    }
}
