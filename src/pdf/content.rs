//! PDF content stream generation for grid lines, markers and text.
//!
//! This module provides:
//! - Stroke and fill style operators
//! - Line and circle path construction
//! - Text rendering with the standard fonts
//! - String and number encoding for PDF

use anyhow::Result;
use std::io::Write;

use super::fonts::StandardFont;

/// Bezier control point distance for a quarter circle, as a fraction of the radius
const KAPPA: f64 = 0.552_284_749_8;

/// Color and width applied to subsequent outlines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// DeviceGray level, 0 is black
    pub gray: f64,
    pub width: f64,
}

impl StrokeStyle {
    /// Thin gray used for the background grid
    pub const GRID: StrokeStyle = StrokeStyle { gray: 0.5, width: 0.5 };
    /// Black used for the axes and markers
    pub const AXIS: StrokeStyle = StrokeStyle { gray: 0.0, width: 1.0 };
}

/// Builder for generating a page content stream
#[derive(Default)]
pub struct ContentBuilder {
    pub content_parts: Vec<String>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke color and line width
    pub fn set_stroke(&mut self, style: StrokeStyle) {
        self.content_parts
            .push(format!("{} G {} w ", num(style.gray), num(style.width)));
    }

    /// Set the fill color, used for text
    pub fn set_fill_gray(&mut self, gray: f64) {
        self.content_parts.push(format!("{} g ", num(gray)));
    }

    /// Stroke a straight segment
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.content_parts.push(format!(
            "{} {} m {} {} l S ",
            num(x1),
            num(y1),
            num(x2),
            num(y2)
        ));
    }

    /// Stroke an unfilled circle as four Bezier quarter arcs, starting at
    /// the rightmost point and running counter-clockwise
    pub fn circle(&mut self, cx: f64, cy: f64, r: f64) {
        let k = r * KAPPA;
        let mut ops = format!("{} {} m ", num(cx + r), num(cy));
        let arcs = [
            [(cx + r, cy + k), (cx + k, cy + r), (cx, cy + r)],
            [(cx - k, cy + r), (cx - r, cy + k), (cx - r, cy)],
            [(cx - r, cy - k), (cx - k, cy - r), (cx, cy - r)],
            [(cx + k, cy - r), (cx + r, cy - k), (cx + r, cy)],
        ];
        for [(x1, y1), (x2, y2), (x3, y3)] in arcs {
            ops.push_str(&format!(
                "{} {} {} {} {} {} c ",
                num(x1),
                num(y1),
                num(x2),
                num(y2),
                num(x3),
                num(y3)
            ));
        }
        ops.push_str("h S ");
        self.content_parts.push(ops);
    }

    /// Draw a single line of text with its baseline starting at (x, y)
    pub fn text(&mut self, value: &str, font: StandardFont, size: f64, x: f64, y: f64) {
        let escaped_value = escape_pdf_string(value);
        self.content_parts.push(format!(
            "BT /{} {} Tf {} {} Td ({}) Tj ET ",
            font.resource_name(),
            num(size),
            num(x),
            num(y),
            escaped_value
        ));
    }

    /// Build the final content bytes
    pub fn build_content_bytes(&self) -> Vec<u8> {
        self.content_parts.join("").into_bytes()
    }
}

/// Format a number for a content stream: integral values without a
/// fraction, everything else with at most four decimals
pub fn num(value: f64) -> String {
    if value.fract() == 0.0 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{:.4}", value);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Escape special characters in PDF strings
pub fn escape_pdf_string(s: &str) -> String {
    let mut result = String::new();
    for c in s.chars() {
        match c {
            '(' => result.push_str(r"\("),
            ')' => result.push_str(r"\)"),
            '\\' => result.push_str(r"\\"),
            '\n' => result.push_str(r"\n"),
            '\r' => result.push_str(r"\r"),
            '\t' => result.push_str(r"\t"),
            _ => result.push(c),
        }
    }
    result
}

/// Compress data using zlib/flate2
pub fn compress_data(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    #[test]
    fn test_escape_pdf_string() {
        assert_eq!(escape_pdf_string("hello"), "hello");
        assert_eq!(escape_pdf_string("Target A (100, 692)"), r"Target A \(100, 692\)");
        assert_eq!(escape_pdf_string("hello\\world"), r"hello\\world");
    }

    #[test]
    fn test_num() {
        assert_eq!(num(0.0), "0");
        assert_eq!(num(306.0), "306");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-2.0), "-2");
        assert_eq!(num(2.761_423_749), "2.7614");
        assert_eq!(num(1.000_01), "1");
    }

    #[test]
    fn test_set_stroke() {
        let mut builder = ContentBuilder::new();
        builder.set_stroke(StrokeStyle::GRID);
        builder.set_stroke(StrokeStyle::AXIS);
        assert_eq!(builder.content_parts, vec!["0.5 G 0.5 w ", "0 G 1 w "]);
    }

    #[test]
    fn test_line() {
        let mut builder = ContentBuilder::new();
        builder.line(50.0, 0.0, 50.0, 792.0);
        assert_eq!(builder.content_parts, vec!["50 0 m 50 792 l S "]);
    }

    #[test]
    fn test_circle_stays_on_radius() {
        let mut builder = ContentBuilder::new();
        builder.circle(100.0, 692.0, 5.0);

        let ops = &builder.content_parts[0];
        assert!(ops.starts_with("105 692 m "));
        assert_eq!(ops.matches(" c ").count(), 4);
        assert!(ops.ends_with("h S "));
        // Arc end points are the four extremes of the circle
        assert!(ops.contains(" 100 697 c "));
        assert!(ops.contains(" 95 692 c "));
        assert!(ops.contains(" 100 687 c "));
        assert!(ops.contains(" 105 692 c "));
        assert!(!ops.contains(" f"));
    }

    #[test]
    fn test_text() {
        let mut builder = ContentBuilder::new();
        builder.text("Target B (306, 396)", StandardFont::HelveticaBold, 10.0, 316.0, 391.0);
        assert_eq!(
            builder.content_parts,
            vec![r"BT /F2 10 Tf 316 391 Td (Target B \(306, 396\)) Tj ET "]
        );
    }

    #[test]
    fn test_build_content_bytes() {
        let mut builder = ContentBuilder::new();
        builder.set_fill_gray(0.0);
        builder.line(0.0, 0.0, 1.0, 1.0);
        assert_eq!(builder.build_content_bytes(), b"0 g 0 0 m 1 1 l S ".to_vec());
    }

    #[test]
    fn test_compress_data() {
        let data = b"0.5 G 0.5 w 0 0 m 0 792 l S ".repeat(20);
        let compressed = compress_data(&data).unwrap();
        assert!(compressed.len() < data.len());

        let mut decoded = Vec::new();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_end(&mut decoded)
            .unwrap();
        assert_eq!(decoded, data);
    }
}
