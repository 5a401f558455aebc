//! Layout constants and derived grid geometry.
//!
//! This module handles:
//! - The fixed page size (US Letter) and grid spacing
//! - Grid line positions and their label anchors
//! - The three target markers placed on the page
//!
//! All coordinates are PDF points with the origin at the bottom-left corner.

/// Name of the generated file, written to the current working directory
pub const OUTPUT_FILE: &str = "test_coordinate_grid.pdf";

/// US Letter, 8.5 x 11 in
pub const PAGE_WIDTH: f64 = 612.0;
pub const PAGE_HEIGHT: f64 = 792.0;

/// Distance between grid lines
pub const GRID_SPACING: u32 = 50;
/// Grid lines at multiples of this value get a numeric label
pub const LABEL_SPACING: u32 = 100;

pub const MARKER_RADIUS: f64 = 5.0;

/// Offset of the corner markers from the page edges
const MARKER_INSET: f64 = 100.0;

/// A circular marker with its text label
#[derive(Debug, Clone, PartialEq)]
pub struct TargetMarker {
    pub id: char,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub label_x: f64,
    pub label_y: f64,
}

impl TargetMarker {
    /// Label text, e.g. "Target A (100, 692)"
    ///
    /// Coordinates are truncated to integers so the label states the
    /// literal position a tester should click.
    pub fn label(&self) -> String {
        format!("Target {} ({}, {})", self.id, self.x as i64, self.y as i64)
    }
}

/// Geometry of the test page
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    pub width: f64,
    pub height: f64,
    pub spacing: u32,
    pub label_spacing: u32,
    pub marker_radius: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            width: PAGE_WIDTH,
            height: PAGE_HEIGHT,
            spacing: GRID_SPACING,
            label_spacing: LABEL_SPACING,
            marker_radius: MARKER_RADIUS,
        }
    }
}

impl GridLayout {
    /// x positions of the vertical grid lines, both page edges included
    pub fn vertical_lines(&self) -> Vec<u32> {
        steps(self.width, self.spacing)
    }

    /// y positions of the horizontal grid lines
    pub fn horizontal_lines(&self) -> Vec<u32> {
        steps(self.height, self.spacing)
    }

    pub fn is_labeled(&self, position: u32) -> bool {
        position % self.label_spacing == 0
    }

    /// Anchors for an x label: one near the top edge, one near the bottom
    pub fn x_label_anchors(&self, x: u32) -> [(f64, f64); 2] {
        let x = f64::from(x) + 2.0;
        [(x, self.height - 10.0), (x, 10.0)]
    }

    /// Anchors for a y label: one near the left edge, one near the right
    pub fn y_label_anchors(&self, y: u32) -> [(f64, f64); 2] {
        let y = f64::from(y) + 2.0;
        [(5.0, y), (self.width - 30.0, y)]
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    pub fn title_anchor(&self) -> (f64, f64) {
        (250.0, self.height - 30.0)
    }

    pub fn subtitle_anchor(&self) -> (f64, f64) {
        (200.0, self.height - 50.0)
    }

    /// Top-left, center and bottom-right markers
    pub fn targets(&self) -> [TargetMarker; 3] {
        let (cx, cy) = self.center();
        let top_y = self.height - MARKER_INSET;
        let right_x = self.width - MARKER_INSET;
        [
            TargetMarker {
                id: 'A',
                x: MARKER_INSET,
                y: top_y,
                radius: self.marker_radius,
                label_x: MARKER_INSET + 10.0,
                label_y: top_y - 5.0,
            },
            TargetMarker {
                id: 'B',
                x: cx,
                y: cy,
                radius: self.marker_radius,
                label_x: cx + 10.0,
                label_y: cy - 5.0,
            },
            // Label sits to the left so it stays on the page
            TargetMarker {
                id: 'C',
                x: right_x,
                y: MARKER_INSET,
                radius: self.marker_radius,
                label_x: self.width - 200.0,
                label_y: MARKER_INSET - 5.0,
            },
        ]
    }
}

fn steps(extent: f64, spacing: u32) -> Vec<u32> {
    (0..=extent as u32).step_by(spacing as usize).collect()
}
