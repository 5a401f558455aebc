use anyhow::{Context, Result};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};

use super::content::{ContentBuilder, compress_data};
use super::fonts::{StandardFont, create_font};
use super::resources::page_resources;

const PRODUCER: &str = concat!("coordinate_grid ", env!("CARGO_PKG_VERSION"));

/// Create a one-page document whose page shows the builder's content
///
/// The page is `width` x `height` points. No timestamps or file IDs are
/// written, so the same content always yields the same bytes.
pub fn create_single_page_pdf(
    builder: &ContentBuilder,
    width: f64,
    height: f64,
    title: &str,
) -> Result<Document> {
    // lopdf saves with a cross-reference stream, which needs PDF 1.5
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let fonts: Vec<(StandardFont, (u32, u16))> = StandardFont::ALL
        .iter()
        .map(|font| (*font, create_font(&mut doc, *font)))
        .collect();
    let resources_id = doc.add_object(Object::Dictionary(page_resources(&fonts)));

    let compressed = compress_data(&builder.build_content_bytes())
        .with_context(|| "Failed to compress page content")?;
    let mut stream_dict = Dictionary::new();
    stream_dict.set("Filter", "FlateDecode");
    let content_id = doc.add_object(Stream::new(stream_dict, compressed));

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", "Page");
    page_dict.set("Parent", Object::Reference(pages_id));
    page_dict.set(
        "MediaBox",
        vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(width as i64),
            Object::Integer(height as i64),
        ],
    );
    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Reference(resources_id));
    let page_id = doc.add_object(Object::Dictionary(page_dict));

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", "Pages");
    pages_dict.set("Kids", vec![Object::Reference(page_id)]);
    pages_dict.set("Count", 1_i64);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let mut catalog_dict = Dictionary::new();
    catalog_dict.set("Type", "Catalog");
    catalog_dict.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(Object::Dictionary(catalog_dict));

    let mut info_dict = Dictionary::new();
    info_dict.set("Title", Object::String(title.as_bytes().to_vec(), StringFormat::Literal));
    info_dict.set(
        "Producer",
        Object::String(PRODUCER.as_bytes().to_vec(), StringFormat::Literal),
    );
    let info_id = doc.add_object(Object::Dictionary(info_dict));

    doc.trailer.set("Root", Object::Reference(catalog_id));
    doc.trailer.set("Info", Object::Reference(info_id));

    Ok(doc)
}
