//! The coordinate test grid page.
//!
//! Draws, in order: the gray background grid with its numeric labels, the
//! two center axes, the title block and the three target markers.

use anyhow::{Context, Result};
use lopdf::Document;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{GridLayout, OUTPUT_FILE};
use crate::pdf::{ContentBuilder, StandardFont, StrokeStyle, create_single_page_pdf};

pub const TITLE: &str = "Coordinate Test Grid";
pub const SUBTITLE: &str = "Click to place annotations, then drag to reposition";

const GRID_LABEL_SIZE: f64 = 8.0;
const TITLE_SIZE: f64 = 12.0;
const SUBTITLE_SIZE: f64 = 10.0;
const TARGET_LABEL_SIZE: f64 = 10.0;

fn draw_grid(builder: &mut ContentBuilder, layout: &GridLayout) {
    builder.set_stroke(StrokeStyle::GRID);

    let vertical = layout.vertical_lines();
    debug!(count = vertical.len(), "drawing vertical grid lines");
    for x in vertical {
        let xf = f64::from(x);
        builder.line(xf, 0.0, xf, layout.height);
        if layout.is_labeled(x) {
            for (lx, ly) in layout.x_label_anchors(x) {
                builder.text(&x.to_string(), StandardFont::Helvetica, GRID_LABEL_SIZE, lx, ly);
            }
        }
    }

    let horizontal = layout.horizontal_lines();
    debug!(count = horizontal.len(), "drawing horizontal grid lines");
    for y in horizontal {
        let yf = f64::from(y);
        builder.line(0.0, yf, layout.width, yf);
        if layout.is_labeled(y) {
            for (lx, ly) in layout.y_label_anchors(y) {
                builder.text(&y.to_string(), StandardFont::Helvetica, GRID_LABEL_SIZE, lx, ly);
            }
        }
    }
}

fn draw_axes(builder: &mut ContentBuilder, layout: &GridLayout) {
    let (cx, cy) = layout.center();
    builder.set_stroke(StrokeStyle::AXIS);
    builder.line(0.0, cy, layout.width, cy);
    builder.line(cx, 0.0, cx, layout.height);
}

fn draw_titles(builder: &mut ContentBuilder, layout: &GridLayout) {
    let (x, y) = layout.title_anchor();
    builder.text(TITLE, StandardFont::HelveticaBold, TITLE_SIZE, x, y);
    let (x, y) = layout.subtitle_anchor();
    builder.text(SUBTITLE, StandardFont::Helvetica, SUBTITLE_SIZE, x, y);
}

fn draw_targets(builder: &mut ContentBuilder, layout: &GridLayout) {
    builder.set_stroke(StrokeStyle::AXIS);
    builder.set_fill_gray(0.0);
    for target in layout.targets() {
        debug!(id = %target.id, x = target.x, y = target.y, "placing target marker");
        builder.circle(target.x, target.y, target.radius);
        builder.text(
            &target.label(),
            StandardFont::HelveticaBold,
            TARGET_LABEL_SIZE,
            target.label_x,
            target.label_y,
        );
    }
}

/// Build the content stream for the whole page
pub fn build_grid_content(layout: &GridLayout) -> ContentBuilder {
    let mut builder = ContentBuilder::new();

    // Background grid with numeric labels
    draw_grid(&mut builder, layout);

    // Center axes go over the grid
    draw_axes(&mut builder, layout);

    draw_titles(&mut builder, layout);

    // Markers last so nothing is drawn over them
    draw_targets(&mut builder, layout);
    builder
}

/// Build the single-page grid document without writing it
pub fn build_grid_document(layout: &GridLayout) -> Result<Document> {
    let builder = build_grid_content(layout);
    create_single_page_pdf(&builder, layout.width, layout.height, TITLE)
}

/// Render the grid page to `test_coordinate_grid.pdf` in the current
/// working directory, overwriting any previous file
///
/// Prints `Created <file>` on success and returns the file name.
pub fn generate_coordinate_test_pdf() -> Result<PathBuf> {
    let layout = GridLayout::default();
    let output_path = PathBuf::from(OUTPUT_FILE);

    // Build the page and its document objects
    let mut doc = build_grid_document(&layout)?;

    // Overwrites any file left by a previous run
    doc.save(&output_path)
        .with_context(|| format!("Failed to write {:?}", output_path))?;
    info!(path = %output_path.display(), "saved coordinate grid");

    println!("Created {}", OUTPUT_FILE);
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page_content() -> String {
        String::from_utf8(build_grid_content(&GridLayout::default()).build_content_bytes())
            .unwrap()
    }

    #[test]
    fn test_line_count() {
        // 13 vertical, 16 horizontal, 2 axes
        assert_eq!(page_content().matches(" l S ").count(), 31);
    }

    #[test]
    fn test_text_count() {
        // 14 x labels, 16 y labels, title, subtitle, 3 targets
        assert_eq!(page_content().matches(" Tj ET ").count(), 35);
    }

    #[test]
    fn test_axes_drawn_after_grid_in_black() {
        let content = page_content();
        let axis_style = content.find("0 G 1 w ").unwrap();
        let horizontal_axis = content.find("0 396 m 612 396 l S").unwrap();
        let vertical_axis = content.find("306 0 m 306 792 l S").unwrap();
        let last_grid_line = content.find("0 750 m 612 750 l S").unwrap();

        assert!(content.starts_with("0.5 G 0.5 w "));
        assert!(last_grid_line < axis_style);
        assert!(axis_style < horizontal_axis);
        assert!(horizontal_axis < vertical_axis);
    }

    #[test]
    fn test_grid_labels() {
        let content = page_content();
        assert!(content.contains("BT /F1 8 Tf 302 782 Td (300) Tj ET"));
        assert!(content.contains("BT /F1 8 Tf 302 10 Td (300) Tj ET"));
        assert!(content.contains("BT /F1 8 Tf 5 702 Td (700) Tj ET"));
        assert!(content.contains("BT /F1 8 Tf 582 702 Td (700) Tj ET"));
        assert!(!content.contains("(50)"));
    }

    #[test]
    fn test_titles() {
        let content = page_content();
        assert!(content.contains("BT /F2 12 Tf 250 762 Td (Coordinate Test Grid) Tj ET"));
        assert!(content.contains(
            "BT /F1 10 Tf 200 742 Td (Click to place annotations, then drag to reposition) Tj ET"
        ));
    }

    #[test]
    fn test_targets() {
        let content = page_content();
        assert_eq!(content.matches(" h S ").count(), 3);
        assert!(content.contains("105 692 m "));
        assert!(content.contains("311 396 m "));
        assert!(content.contains("517 100 m "));
        assert!(content.contains(r"BT /F2 10 Tf 110 687 Td (Target A \(100, 692\)) Tj ET"));
        assert!(content.contains(r"BT /F2 10 Tf 316 391 Td (Target B \(306, 396\)) Tj ET"));
        assert!(content.contains(r"BT /F2 10 Tf 412 95 Td (Target C \(512, 100\)) Tj ET"));
    }

    #[test]
    fn test_fill_color_set_only_for_targets() {
        let content = page_content();
        assert_eq!(content.matches(" g ").count(), 1);
        let fill = content.find("0 g ").unwrap();
        let title = content.find("(Coordinate Test Grid)").unwrap();
        let first_target = content.find("105 692 m ").unwrap();
        assert!(title < fill);
        assert!(fill < first_target);
    }

    #[test]
    fn test_build_grid_document() {
        let doc = build_grid_document(&GridLayout::default()).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}
