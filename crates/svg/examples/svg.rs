use barcode_svg::{
    Drawing, FontSpec, GlyphProvider, Orientation, Outline, Padding, Point, Segment, SvgDrawing,
    SvgOptions,
};

/// Digits drawn as seven-segment displays, enough for human-readable text
/// under a linear barcode.
struct SevenSegment;

// Segments a to g, as bits 0 to 6.
const DIGITS: [u8; 10] = [
    0b0111111, 0b0000110, 0b1011011, 0b1001111, 0b1100110, 0b1101101, 0b1111101, 0b0000111,
    0b1111111, 0b1101111,
];

fn bar(segments: &mut Vec<Segment>, x0: f64, y0: f64, x1: f64, y1: f64) {
    segments.push(Segment::Move(Point::new(x0, y0)));
    segments.push(Segment::Line(Point::new(x1, y0)));
    segments.push(Segment::Line(Point::new(x1, y1)));
    segments.push(Segment::Line(Point::new(x0, y1)));
}

impl GlyphProvider for SevenSegment {
    type Font = ();

    fn lookup(&self, _name: &str) -> Self::Font {}

    fn outline(&self, _font: &(), code: u32, width: u32, height: u32) -> Option<Outline> {
        let digit = char::from_u32(code)?.to_digit(10)?;
        let mask = DIGITS[digit as usize];

        let (w, h) = (f64::from(width), f64::from(height));
        let t = (w / 6.0).max(1.0);
        let (left, right, mid) = (t / 2.0, w - t * 1.5, h / 2.0);

        // Font coordinates: y up from the baseline.
        let strokes = [
            (left, h - t, right + t, h),
            (right, mid, right + t, h),
            (right, 0.0, right + t, mid),
            (left, 0.0, right + t, t),
            (left, 0.0, left + t, mid),
            (left, mid, left + t, h),
            (left, mid - t / 2.0, right + t, mid + t / 2.0),
        ];

        let mut segments = Vec::new();
        for (bit, &(x0, y0, x1, y1)) in strokes.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                bar(&mut segments, x0, y0, x1, y1);
            }
        }

        Some(Outline {
            segments,
            advance: w,
            ascent: h,
            descent: 0.0,
        })
    }
}

/// Bar widths of a made-up linear symbol, alternating bar and space.
const MODULES: &[u8] = &[
    1, 1, 1, 3, 2, 1, 1, 2, 2, 2, 1, 2, 2, 1, 4, 1, 1, 1, 1, 3, 1, 1, 1, 1, 1, 2, 3, 1, 1, 2, 1, 3,
    2, 1, 1, 1, 1, 1,
];

fn draw(drawing: &mut impl Drawing, text: &str) -> Result<(), barcode_svg::DrawError> {
    let scale = 2.0;
    let bar_height = 60.0;
    let font = FontSpec::new("seven-segment", 10.0, 14.0).with_spacing(2.0);

    let metrics = drawing.measure(text, &font.name, font.width, font.height);
    let width = MODULES.iter().map(|&m| f64::from(m)).sum::<f64>() * scale;
    let height = bar_height + 4.0 + metrics.ascent + metrics.descent;

    drawing.init(width, height)?;

    let mut x = 0.0;
    for (i, &modules) in MODULES.iter().enumerate() {
        let w = f64::from(modules) * scale;
        if i % 2 == 0 {
            let center = x + w / 2.0;
            drawing.line(center, 0.0, center, bar_height, w, "000000")?;
        }
        x += w;
    }

    let text_width = metrics.width + font.dx * (text.chars().count() as f64 - 1.0);
    drawing.text(
        (width - text_width) / 2.0,
        height,
        text,
        "000000",
        &font,
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for (orientation, path) in [
        (Orientation::North, "barcode_north.svg"),
        (Orientation::Right90, "barcode_right.svg"),
    ] {
        let options = SvgOptions::default()
            .with_padding(Padding::uniform(10.0))
            .with_orientation(orientation)
            .with_background("ffffff");
        let mut drawing = SvgDrawing::new(options, SevenSegment);

        draw(&mut drawing, "0123456789")?;
        let document = drawing.end()?;

        svg::save(path, &document)?;
        println!("Wrote {path}");
    }

    Ok(())
}
