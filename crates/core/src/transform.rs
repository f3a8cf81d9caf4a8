use std::str::FromStr;

use crate::{ParseOrientationError, Point};

/// Rotation of the finished symbol on the page.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Unrotated.
    #[default]
    North,
    /// Rotated 90° clockwise.
    Right90,
    /// Rotated 180°.
    UpsideDown,
    /// Rotated 90° counter-clockwise.
    Left90,
}

/// Linear mapping of one output axis over `(x, y, width - 1, height - 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coefficients {
    pub x: [f64; 4],
    pub y: [f64; 4],
}

impl Orientation {
    pub fn coefficients(self) -> Coefficients {
        match self {
            // tx = x, ty = y
            Orientation::North => Coefficients {
                x: [1.0, 0.0, 0.0, 0.0],
                y: [0.0, 1.0, 0.0, 0.0],
            },
            // tx = w - y, ty = x
            Orientation::Right90 => Coefficients {
                x: [0.0, -1.0, 1.0, 0.0],
                y: [1.0, 0.0, 0.0, 0.0],
            },
            // tx = w - x, ty = h - y
            Orientation::UpsideDown => Coefficients {
                x: [-1.0, 0.0, 1.0, 0.0],
                y: [0.0, -1.0, 0.0, 1.0],
            },
            // tx = y, ty = h - x
            Orientation::Left90 => Coefficients {
                x: [0.0, 1.0, 0.0, 0.0],
                y: [-1.0, 0.0, 0.0, 1.0],
            },
        }
    }

    /// Does this orientation exchange the page's horizontal and vertical axes?
    pub fn swaps_axes(self) -> bool {
        matches!(self, Orientation::Right90 | Orientation::Left90)
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Orientation::North),
            "R" => Ok(Orientation::Right90),
            "I" => Ok(Orientation::UpsideDown),
            "L" => Ok(Orientation::Left90),
            other => Err(ParseOrientationError(other.to_owned())),
        }
    }
}

/// Empty space around the symbol, in unrotated input units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub const fn uniform(amount: f64) -> Self {
        Self {
            left: amount,
            right: amount,
            top: amount,
            bottom: amount,
        }
    }
}

/// How output coordinates are rounded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Whole numbers only. Smallest documents.
    Integer,
    /// Two decimal places.
    #[default]
    Hundredths,
}

impl Precision {
    /// Round to the nearest step, with ties going towards positive infinity
    /// so that `-0.5` and `0.5` land one step apart.
    pub fn round(self, value: f64) -> f64 {
        let rounded = match self {
            Precision::Integer => (value + 0.5).floor(),
            Precision::Hundredths => (value * 100.0 + 0.5).floor() / 100.0,
        };
        // Normalize negative zero.
        if rounded == 0.0 { 0.0 } else { rounded }
    }
}

/// The padding, rotation and rounding applied to every point of a document.
///
/// Built once per document; the canvas size and coefficients never change
/// afterwards.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    orientation: Orientation,
    coefficients: Coefficients,
    dx: f64,
    dy: f64,
    width: f64,
    height: f64,
    precision: Precision,
}

impl Transform {
    /// Set up the transform for an unrotated content box of `width` × `height`.
    pub fn new(
        orientation: Orientation,
        padding: Padding,
        width: f64,
        height: f64,
        precision: Precision,
    ) -> Self {
        let width = width + padding.left + padding.right;
        let height = height + padding.top + padding.bottom;
        let (width, height) = if orientation.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        };

        Self {
            orientation,
            coefficients: orientation.coefficients(),
            dx: padding.left,
            dy: padding.top,
            width,
            height,
            precision,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Output canvas width, after padding and rotation.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Output canvas height, after padding and rotation.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map an input point onto the canvas without rounding.
    pub fn apply_exact(&self, x: f64, y: f64) -> Point {
        let x = x + self.dx;
        let y = y + self.dy;
        let terms = [x, y, self.width - 1.0, self.height - 1.0];
        let dot = |c: &[f64; 4]| c.iter().zip(terms).map(|(c, t)| c * t).sum::<f64>();

        Point {
            x: dot(&self.coefficients.x),
            y: dot(&self.coefficients.y),
        }
    }

    /// Map an input point onto the canvas, rounded to the configured precision.
    pub fn apply(&self, x: f64, y: f64) -> Point {
        let exact = self.apply_exact(x, y);
        Point {
            x: self.round(exact.x),
            y: self.round(exact.y),
        }
    }

    pub fn round(&self, value: f64) -> f64 {
        self.precision.round(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::Right90,
        Orientation::UpsideDown,
        Orientation::Left90,
    ];

    #[test]
    fn coefficients_are_axis_permutations() {
        for orientation in ALL {
            let c = orientation.coefficients();
            for axis in [c.x, c.y] {
                let linear = axis[..2].iter().filter(|v| **v != 0.0).count();
                assert_eq!(linear, 1, "{orientation:?}");
                let offset = axis[2..].iter().filter(|v| **v != 0.0).count();
                assert!(offset <= 1, "{orientation:?}");
            }
        }
    }

    #[test]
    fn canvas_swaps_for_quarter_turns() {
        let padding = Padding::default();
        for orientation in ALL {
            let t = Transform::new(orientation, padding, 30.0, 10.0, Precision::Integer);
            if orientation.swaps_axes() {
                assert_eq!((t.width(), t.height()), (10.0, 30.0));
            } else {
                assert_eq!((t.width(), t.height()), (30.0, 10.0));
            }
        }
    }

    #[test]
    fn padding_grows_canvas_and_shifts_points() {
        let padding = Padding {
            left: 2.0,
            right: 3.0,
            top: 4.0,
            bottom: 5.0,
        };
        let t = Transform::new(Orientation::North, padding, 10.0, 10.0, Precision::Integer);
        assert_eq!((t.width(), t.height()), (15.0, 19.0));
        assert_eq!(t.apply(0.0, 0.0), Point::new(2.0, 4.0));
    }

    #[test]
    fn right_turn_maps_origin_to_top_right() {
        let t = Transform::new(
            Orientation::Right90,
            Padding::default(),
            20.0,
            10.0,
            Precision::Integer,
        );
        // Canvas is 10 wide, 20 tall.
        assert_eq!(t.apply(0.0, 0.0), Point::new(9.0, 0.0));
        assert_eq!(t.apply(19.0, 0.0), Point::new(9.0, 19.0));
        assert_eq!(t.apply(0.0, 9.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn rounding_modes() {
        assert_eq!(Precision::Integer.round(2.5), 3.0);
        assert_eq!(Precision::Hundredths.round(1.23456), 1.23);
        assert_eq!(Precision::Hundredths.round(-0.001), 0.0);
        assert!(Precision::Hundredths.round(-0.001).is_sign_positive());
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(Precision::Integer.round(-0.5), 0.0);
        assert!(Precision::Integer.round(-0.5).is_sign_positive());
        assert_eq!(Precision::Integer.round(-1.5), -1.0);
        assert_eq!(Precision::Integer.round(-1.6), -2.0);
        assert_eq!(Precision::Hundredths.round(-0.125), -0.12);
        assert_eq!(Precision::Hundredths.round(0.125), 0.13);
    }

    #[test]
    fn left_turn_keeps_edge_half_pixel_on_canvas() {
        let t = Transform::new(
            Orientation::Left90,
            Padding::default(),
            10.0,
            10.0,
            Precision::Integer,
        );
        // ty = 9 - x, so the three columns land on adjacent rows.
        let rows: Vec<f64> = [7.5, 8.5, 9.5].iter().map(|&x| t.apply(x, 0.0).y).collect();
        assert_eq!(rows, [2.0, 1.0, 0.0]);
    }

    #[test]
    fn parse_rotate_codes() {
        assert_eq!("N".parse::<Orientation>(), Ok(Orientation::North));
        assert_eq!("R".parse::<Orientation>(), Ok(Orientation::Right90));
        assert_eq!("I".parse::<Orientation>(), Ok(Orientation::UpsideDown));
        assert_eq!("L".parse::<Orientation>(), Ok(Orientation::Left90));
        assert!("X".parse::<Orientation>().is_err());
    }
}
