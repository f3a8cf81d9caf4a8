use barcode_svg_core::{Point, Transform};
use svg::node::element::Path;

use crate::data::PathData;

/// Offset of the control points when approximating a quarter ellipse with a
/// cubic Bézier, pulled in slightly so the four arcs meet without seams.
pub const ELLIPSE_MAGIC: f64 = 0.55228475 - 0.00045;

/// The unstroked path that polygons and ellipses accumulate into until the
/// next fill.
#[derive(Debug, Default)]
pub(crate) struct FillPath {
    open: Option<PathData>,
}

impl FillPath {
    fn open(&mut self) -> &mut PathData {
        self.open.get_or_insert_with(PathData::default)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn polygon(&mut self, transform: &Transform, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            log::warn!("ignoring polygon without points");
            return;
        };

        let data = self.open();
        data.command('M').point(transform.apply(first.x, first.y));
        for point in rest {
            data.command('L').point(transform.apply(point.x, point.y));
        }
        data.command('Z');
    }

    /// Four cubic arcs, starting from the leftmost point.
    ///
    /// Fills are even-odd, so winding direction doesn't matter.
    pub fn ellipse(&mut self, transform: &Transform, center: Point, rx: f64, ry: f64) {
        let Point { x, y } = center;
        let dx = rx * ELLIPSE_MAGIC;
        let dy = ry * ELLIPSE_MAGIC;
        let p = |x: f64, y: f64| transform.apply(x, y);

        let data = self.open();
        data.command('M').point(p(x - rx, y));
        data.command('C')
            .point(p(x - rx, y - dy))
            .point(p(x - dx, y - ry))
            .point(p(x, y - ry));
        data.command('C')
            .point(p(x + dx, y - ry))
            .point(p(x + rx, y - dy))
            .point(p(x + rx, y));
        data.command('C')
            .point(p(x + rx, y + dy))
            .point(p(x + dx, y + ry))
            .point(p(x, y + ry));
        data.command('C')
            .point(p(x - dx, y + ry))
            .point(p(x - rx, y + dy))
            .point(p(x - rx, y));
        data.command('Z');
    }

    /// Seal the open path with an even-odd fill, leaving nothing open.
    ///
    /// Returns `None` when no path is open.
    pub fn fill(&mut self, color: &str) -> Option<Path> {
        let data = self.open.take()?;
        Some(
            Path::new()
                .set("class", "not-text")
                .set("d", data.finish())
                .set("fill", format!("#{color}"))
                .set("fill-rule", "evenodd"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_svg_core::{Orientation, Padding, Precision};

    fn north() -> Transform {
        Transform::new(
            Orientation::North,
            Padding::default(),
            100.0,
            100.0,
            Precision::Hundredths,
        )
    }

    fn square(at: f64) -> [Point; 4] {
        [
            Point::new(at, at),
            Point::new(at + 2.0, at),
            Point::new(at + 2.0, at + 2.0),
            Point::new(at, at + 2.0),
        ]
    }

    #[test]
    fn polygons_share_one_fill() {
        let t = north();
        let mut path = FillPath::default();
        path.polygon(&t, &square(0.0));
        path.polygon(&t, &square(10.0));
        let sealed = path.fill("000000").expect("path was open").to_string();

        assert!(sealed.contains(
            r#"d="M0,0 L2,0 L2,2 L0,2 ZM10,10 L12,10 L12,12 L10,12 Z""#
        ));
        assert!(sealed.contains(r##"fill="#000000""##));
        assert!(sealed.contains(r#"fill-rule="evenodd""#));
        assert!(!path.is_open());
    }

    #[test]
    fn fill_without_open_path_does_nothing() {
        let mut path = FillPath::default();
        assert!(path.fill("000000").is_none());

        path.polygon(&north(), &square(0.0));
        assert!(path.fill("000000").is_some());
        assert!(path.fill("000000").is_none());
    }

    #[test]
    fn empty_polygon_opens_nothing() {
        let mut path = FillPath::default();
        path.polygon(&north(), &[]);
        assert!(!path.is_open());
    }

    #[test]
    fn ellipse_is_four_cubics() {
        let mut path = FillPath::default();
        path.ellipse(&north(), Point::new(50.0, 50.0), 10.0, 5.0);
        let data = path.open.take().expect("path was open").finish();

        assert_eq!(data.matches('C').count(), 4);
        assert!(data.starts_with("M40,50 C40,47.24 44.48,45 50,45 "));
        assert!(data.ends_with("40,50 Z"));
    }
}
