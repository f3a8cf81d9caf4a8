use barcode_svg_core::{Orientation, Padding, Precision};

/// Scale applied to text on top of the symbol's own transform.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextScale {
    pub width: f64,
    pub height: f64,
}

impl Default for TextScale {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Offset applied to text groups after they are anchored.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextOffset {
    pub x: f64,
    pub y: f64,
}

/// Construction-time configuration of an [SvgDrawing](crate::SvgDrawing).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SvgOptions {
    pub padding: Padding,
    pub orientation: Orientation,
    /// Background colour as six hex digits. Anything else draws no background.
    pub background: Option<String>,
    pub precision: Precision,
    pub text_scale: TextScale,
    pub text_offset: TextOffset,
}

impl SvgOptions {
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_text_scale(mut self, width: f64, height: f64) -> Self {
        self.text_scale = TextScale { width, height };
        self
    }

    pub fn with_text_offset(mut self, x: f64, y: f64) -> Self {
        self.text_offset = TextOffset { x, y };
        self
    }

    /// The background colour, if it is a valid `RRGGBB` hex string.
    pub fn background_color(&self) -> Option<&str> {
        self.background.as_deref().filter(|color| is_hex_color(color))
    }
}

/// Matches `^[0-9A-Fa-f]{6}$`.
fn is_hex_color(color: &str) -> bool {
    color.len() == 6 && color.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("ffffff"));
        assert!(is_hex_color("00AAff"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color(""));
        assert!(!is_hex_color("red"));
        assert!(!is_hex_color("#ffffff"));
        assert!(!is_hex_color("fffffff"));
        assert!(!is_hex_color("gggggg"));
    }

    #[test]
    fn background_requires_valid_hex() {
        let options = SvgOptions::default();
        assert_eq!(options.background_color(), None);

        let options = options.with_background("FFFFFF");
        assert_eq!(options.background_color(), Some("FFFFFF"));

        let options = options.with_background("white");
        assert_eq!(options.background_color(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_config_fills_defaults() {
        let options: SvgOptions = toml::from_str(
            r#"
            orientation = "Left90"
            background = "ffffff"

            [text_scale]
            width = 2.0
            height = 1.5
            "#,
        )
        .unwrap();
        assert_eq!(
            options,
            SvgOptions::default()
                .with_orientation(Orientation::Left90)
                .with_background("ffffff")
                .with_text_scale(2.0, 1.5)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_round_trips() {
        let options = SvgOptions::default()
            .with_padding(Padding::uniform(10.0))
            .with_precision(Precision::Integer)
            .with_text_offset(1.5, -2.0);
        let text = toml::to_string(&options).unwrap();
        assert_eq!(toml::from_str::<SvgOptions>(&text).unwrap(), options);
    }
}
