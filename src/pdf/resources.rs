use lopdf::{Dictionary, Object};

use super::fonts::StandardFont;

/// Build a page resources dictionary referencing the given fonts
///
/// Each font is registered under its resource name (F1, F2, ...) so the
/// content stream can select it with `Tf`.
pub fn page_resources(fonts: &[(StandardFont, (u32, u16))]) -> Dictionary {
    let mut font_resources = Dictionary::new();
    for (font, font_id) in fonts {
        font_resources.set(font.resource_name(), Object::Reference(*font_id));
    }

    let mut resources = Dictionary::new();
    resources.set("Font", Object::Dictionary(font_resources));
    resources.set(
        "ProcSet",
        vec![Object::Name(b"PDF".to_vec()), Object::Name(b"Text".to_vec())],
    );
    resources
}
