use barcode_svg_core::Transform;
use rustc_hash::FxHashMap;
use svg::node::element::Path;

use crate::data::PathData;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StrokeKey {
    width: i64,
    color: String,
}

/// Stroked lines grouped by width and colour.
///
/// Every line sharing a key ends up in one `<path>`, which keeps linear
/// barcodes (hundreds of bars, a handful of widths) small.
#[derive(Debug, Default)]
pub(crate) struct StrokeBatches {
    index: FxHashMap<StrokeKey, usize>,
    batches: Vec<(StrokeKey, PathData)>,
}

impl StrokeBatches {
    pub fn line(
        &mut self,
        transform: &Transform,
        (x0, y0): (f64, f64),
        (x1, y1): (f64, f64),
        width: f64,
        color: &str,
    ) {
        let (mut x0, mut y0, mut x1, mut y1) = (x0.floor(), y0.floor(), x1.floor(), y1.floor());
        let width = width.round() as i64;

        // An odd width centred on a whole coordinate straddles pixel
        // boundaries; shift it onto the half pixel so edges stay crisp.
        if width % 2 != 0 {
            if x0 == x1 {
                x0 += 0.5;
                x1 += 0.5;
            }
            if y0 == y1 {
                y0 += 0.5;
                y1 += 0.5;
            }
        }

        let key = StrokeKey {
            width,
            color: color.to_owned(),
        };
        let slot = *self.index.entry(key.clone()).or_insert_with(|| {
            self.batches.push((key, PathData::default()));
            self.batches.len() - 1
        });

        log::trace!("line {x0},{y0} -> {x1},{y1} into batch {slot}");
        self.batches[slot]
            .1
            .command('M')
            .point(transform.apply(x0, y0))
            .command('L')
            .point(transform.apply(x1, y1));
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// One path per batch, in the order the batches were first used.
    pub fn into_paths(self) -> impl Iterator<Item = Path> {
        self.batches.into_iter().map(|(key, data)| {
            Path::new()
                .set("class", "not-text")
                .set("stroke", format!("#{}", key.color))
                .set("stroke-width", key.width)
                .set("d", data.finish())
        })
    }
}
