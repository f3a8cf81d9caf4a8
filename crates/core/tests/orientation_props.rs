//! Property tests for the orientation transform.

use barcode_svg_core::{Orientation, Padding, Point, Precision, Transform};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::North),
        Just(Orientation::Right90),
        Just(Orientation::UpsideDown),
        Just(Orientation::Left90),
    ]
}

fn corners(width: f64, height: f64) -> Vec<(i64, i64)> {
    let mut corners = vec![
        (0, 0),
        (width as i64 - 1, 0),
        (0, height as i64 - 1),
        (width as i64 - 1, height as i64 - 1),
    ];
    corners.sort();
    corners
}

/// Property: input corners land exactly on the output canvas corners
proptest! {
    #[test]
    fn prop_corners_map_to_corners(
        orientation in orientation(),
        width in 1u32..500,
        height in 1u32..500,
    ) {
        let (w, h) = (f64::from(width), f64::from(height));
        let t = Transform::new(orientation, Padding::default(), w, h, Precision::Integer);

        let mut mapped = [(0.0, 0.0), (w - 1.0, 0.0), (0.0, h - 1.0), (w - 1.0, h - 1.0)]
            .into_iter()
            .map(|(x, y)| t.apply(x, y))
            .map(|Point { x, y }| (x as i64, y as i64))
            .collect::<Vec<_>>();
        mapped.sort();

        prop_assert_eq!(mapped, corners(t.width(), t.height()));
    }
}

/// Property: the transform is a rigid permutation, so distances are preserved
proptest! {
    #[test]
    fn prop_distances_preserved(
        orientation in orientation(),
        x0 in 0.0f64..100.0,
        y0 in 0.0f64..100.0,
        x1 in 0.0f64..100.0,
        y1 in 0.0f64..100.0,
    ) {
        let t = Transform::new(orientation, Padding::uniform(3.0), 100.0, 100.0, Precision::Hundredths);
        let a = t.apply_exact(x0, y0);
        let b = t.apply_exact(x1, y1);

        prop_assert!(((a.x - b.x).abs() + (a.y - b.y).abs() - ((x0 - x1).abs() + (y0 - y1).abs())).abs() < 1e-9);
    }
}

#[test]
fn padding_applies_before_rotation() {
    let padding = Padding {
        left: 1.0,
        right: 0.0,
        top: 2.0,
        bottom: 0.0,
    };
    let t = Transform::new(Orientation::Left90, padding, 10.0, 20.0, Precision::Integer);

    // Padded box is 11 × 22, rotated canvas is 22 × 11.
    assert_eq!((t.width(), t.height()), (22.0, 11.0));
    // tx = y + top, ty = (h - 1) - (x + left)
    assert_eq!(t.apply(0.0, 0.0), Point::new(2.0, 9.0));
}
