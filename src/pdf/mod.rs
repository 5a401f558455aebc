//! PDF object and content stream construction.

mod content;
mod document;
mod fonts;
mod resources;

pub use content::{ContentBuilder, StrokeStyle};
pub use document::create_single_page_pdf;
pub use fonts::StandardFont;
