use lopdf::{Dictionary, Document, Object};

/// Standard PDF Type1 fonts used on the grid page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    /// Get the PDF BaseFont name for this font
    pub fn base_font_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Name under which the font is registered in the page resources
    pub fn resource_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
        }
    }
}

/// Create a font in the PDF document
///
/// Standard Type1 fonts need no embedded font program, so the object is
/// just the font dictionary.
pub fn create_font(doc: &mut Document, font: StandardFont) -> (u32, u16) {
    let mut font_dict = Dictionary::new();
    font_dict.set("Type", "Font");
    font_dict.set("Subtype", "Type1");
    font_dict.set("BaseFont", font.base_font_name());
    font_dict.set("Encoding", "WinAnsiEncoding");

    doc.add_object(Object::Dictionary(font_dict))
}
