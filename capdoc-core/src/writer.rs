//! Document assembly: object numbering, payload construction and the
//! byte-exact file layout (header, objects, cross-reference table, trailer).
//!
//! Every object payload is built before anything is written. Offsets are then
//! taken from the running byte count of a single sequential pass.

use crate::error::{PdfError, Result};
use crate::graphics::format_number;
use crate::layout::PageGeometry;
use crate::objects::{Dictionary, Object, ObjectId};
use crate::text::Font;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n";

const CATALOG_NUMBER: u32 = 1;
const PAGES_NUMBER: u32 = 2;
const FIRST_PAGE_NUMBER: u32 = 3;

/// Object numbering for a document with a given page count.
///
/// 1 is the catalog and 2 the page tree. Page `i` and its content stream
/// take `3 + 2i` and `4 + 2i`. Font dictionaries follow the last content
/// stream, one per entry of [`Font::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectLayout {
    page_count: u32,
}

impl ObjectLayout {
    pub fn new(page_count: usize) -> Result<Self> {
        let max_pages = (u32::MAX - FIRST_PAGE_NUMBER - Font::ALL.len() as u32) / 2;
        match u32::try_from(page_count) {
            Ok(count) if count <= max_pages => Ok(Self { page_count: count }),
            _ => Err(PdfError::InvalidStructure(format!(
                "{page_count} pages exceed the object number space"
            ))),
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_count as usize
    }

    pub fn catalog(&self) -> ObjectId {
        ObjectId::new(CATALOG_NUMBER, 0)
    }

    pub fn pages_root(&self) -> ObjectId {
        ObjectId::new(PAGES_NUMBER, 0)
    }

    pub fn page(&self, index: usize) -> ObjectId {
        ObjectId::new(FIRST_PAGE_NUMBER + index as u32 * 2, 0)
    }

    pub fn content(&self, index: usize) -> ObjectId {
        ObjectId::new(FIRST_PAGE_NUMBER + 1 + index as u32 * 2, 0)
    }

    pub fn font(&self, font: Font) -> ObjectId {
        let slot = Font::ALL
            .iter()
            .position(|f| *f == font)
            .unwrap_or_default() as u32;
        ObjectId::new(FIRST_PAGE_NUMBER + self.page_count * 2 + slot, 0)
    }

    /// Highest object number in use.
    pub fn max_number(&self) -> u32 {
        FIRST_PAGE_NUMBER + self.page_count * 2 + Font::ALL.len() as u32 - 1
    }

    /// Cross-reference table size, including the free entry for object 0.
    pub fn size(&self) -> u32 {
        self.max_number() + 1
    }
}

/// A numbered object with its serialized body (the bytes between
/// `N 0 obj` and `endobj`).
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub id: ObjectId,
    pub payload: Vec<u8>,
}

impl IndirectObject {
    pub fn new(id: ObjectId, object: &Object) -> Self {
        let mut payload = Vec::new();
        write_object_value(&mut payload, object);
        Self { id, payload }
    }
}

/// Builds every object of the document, sorted by object number.
pub fn build_objects(
    page_streams: &[Vec<u8>],
    geometry: &PageGeometry,
) -> Result<Vec<IndirectObject>> {
    let layout = ObjectLayout::new(page_streams.len())?;
    let mut objects = Vec::with_capacity(layout.max_number() as usize);

    let catalog = Dictionary::new()
        .with("Type", Object::name("Catalog"))
        .with("Pages", layout.pages_root());
    objects.push(IndirectObject::new(layout.catalog(), &catalog.into()));

    let kids: Vec<Object> = (0..layout.page_count())
        .map(|i| Object::Reference(layout.page(i)))
        .collect();
    let pages = Dictionary::new()
        .with("Type", Object::name("Pages"))
        .with("Kids", kids)
        .with("Count", layout.page_count() as i64);
    objects.push(IndirectObject::new(layout.pages_root(), &pages.into()));

    let mut font_resources = Dictionary::new();
    for font in Font::ALL {
        font_resources.set(font.resource_name(), layout.font(font));
    }
    let resources = Dictionary::new().with("Font", font_resources);

    for (i, stream) in page_streams.iter().enumerate() {
        let page = Dictionary::new()
            .with("Type", Object::name("Page"))
            .with("Parent", layout.pages_root())
            .with(
                "MediaBox",
                vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(geometry.width),
                    Object::Real(geometry.height),
                ],
            )
            .with("Resources", resources.clone())
            .with("Contents", layout.content(i));
        objects.push(IndirectObject::new(layout.page(i), &page.into()));

        let stream_dict = Dictionary::new().with("Length", stream.len() as i64);
        objects.push(IndirectObject::new(
            layout.content(i),
            &Object::Stream(stream_dict, stream.clone()),
        ));
    }

    for font in Font::ALL {
        let dict = Dictionary::new()
            .with("Type", Object::name("Font"))
            .with("Subtype", Object::name("Type1"))
            .with("BaseFont", Object::name(font.base_font()));
        objects.push(IndirectObject::new(layout.font(font), &dict.into()));
    }

    tracing::debug!(
        pages = layout.page_count(),
        objects = objects.len(),
        "built document objects"
    );
    Ok(objects)
}

/// Serializes a complete document from per-page content streams.
pub fn serialize(page_streams: &[Vec<u8>], geometry: &PageGeometry) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PdfWriter::new_with_writer(&mut buffer).write_document(page_streams, geometry)?;
    Ok(buffer)
}

/// Writes a complete document to `path` and returns its length in bytes.
///
/// Every object is built before the file is created, so a document that
/// cannot be assembled leaves an existing file untouched.
pub fn write_file(
    path: impl AsRef<Path>,
    page_streams: &[Vec<u8>],
    geometry: &PageGeometry,
) -> Result<u64> {
    let layout = ObjectLayout::new(page_streams.len())?;
    let objects = build_objects(page_streams, geometry)?;

    let mut writer = PdfWriter::new(path)?;
    writer.write_objects(&layout, &objects)?;
    Ok(writer.bytes_written())
}

pub struct PdfWriter<W: Write> {
    writer: W,
    xref_positions: Vec<(ObjectId, u64)>,
    current_position: u64,
}

impl<W: Write> PdfWriter<W> {
    pub fn new_with_writer(writer: W) -> Self {
        Self {
            writer,
            xref_positions: Vec::new(),
            current_position: 0,
        }
    }

    /// Byte offsets recorded so far, by object.
    pub fn xref_positions(&self) -> &[(ObjectId, u64)] {
        &self.xref_positions
    }

    pub fn bytes_written(&self) -> u64 {
        self.current_position
    }

    pub fn write_document(
        &mut self,
        page_streams: &[Vec<u8>],
        geometry: &PageGeometry,
    ) -> Result<()> {
        let layout = ObjectLayout::new(page_streams.len())?;
        let objects = build_objects(page_streams, geometry)?;
        self.write_objects(&layout, &objects)
    }

    fn write_objects(&mut self, layout: &ObjectLayout, objects: &[IndirectObject]) -> Result<()> {
        self.write_header()?;
        for object in objects {
            self.write_object(object)?;
        }

        let xref_position = self.current_position;
        self.write_xref(layout.size())?;
        self.write_trailer(layout.size(), layout.catalog(), xref_position)?;

        self.writer.flush()?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write_bytes(PDF_HEADER)
    }

    fn write_object(&mut self, object: &IndirectObject) -> Result<()> {
        self.xref_positions
            .push((object.id, self.current_position));

        let header = format!("{} {} obj\n", object.id.number(), object.id.generation());
        self.write_bytes(header.as_bytes())?;
        self.write_bytes(&object.payload)?;
        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    fn write_xref(&mut self, size: u32) -> Result<()> {
        let mut entries = self.xref_positions.clone();
        entries.sort_by_key(|(id, _)| id.number());

        let dense = entries
            .iter()
            .enumerate()
            .all(|(i, (id, _))| id.number() as usize == i + 1);
        if !dense || entries.len() + 1 != size as usize {
            return Err(PdfError::InvalidStructure(format!(
                "object numbers are not 1..{} ({} objects written)",
                size.saturating_sub(1),
                entries.len()
            )));
        }

        self.write_bytes(format!("xref\n0 {size}\n").as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;
        for (_, position) in &entries {
            let entry = format!("{:010} {:05} n \n", position, 0);
            self.write_bytes(entry.as_bytes())?;
        }
        Ok(())
    }

    fn write_trailer(&mut self, size: u32, catalog_id: ObjectId, xref_position: u64) -> Result<()> {
        let trailer = Dictionary::new()
            .with("Size", size as i64)
            .with("Root", catalog_id);

        let mut bytes = b"trailer\n".to_vec();
        write_object_value(&mut bytes, &trailer.into());
        bytes.extend_from_slice(format!("\nstartxref\n{xref_position}\n%%EOF\n").as_bytes());
        self.write_bytes(&bytes)
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.writer.write_all(data)?;
        self.current_position += data.len() as u64;
        Ok(())
    }
}

impl PdfWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    ///
    /// The handle is closed when the writer is dropped.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new_with_writer(BufWriter::new(file)))
    }
}

/// Appends the inline form of `object`: `<< /Key value >>`, `[a b]`, `/Name`.
fn write_object_value(out: &mut Vec<u8>, object: &Object) {
    match object {
        Object::Integer(i) => out.extend_from_slice(i.to_string().as_bytes()),
        Object::Real(f) => out.extend_from_slice(format_number(*f).as_bytes()),
        Object::Name(n) => {
            out.push(b'/');
            out.extend_from_slice(n.as_bytes());
        }
        Object::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b' ');
                }
                write_object_value(out, item);
            }
            out.push(b']');
        }
        Object::Dictionary(dict) => {
            out.extend_from_slice(b"<<");
            for (key, value) in dict.entries() {
                out.extend_from_slice(b" /");
                out.extend_from_slice(key.as_bytes());
                out.push(b' ');
                write_object_value(out, value);
            }
            out.extend_from_slice(b" >>");
        }
        Object::Stream(dict, data) => {
            write_object_value(out, &Object::Dictionary(dict.clone()));
            out.extend_from_slice(b"\nstream\n");
            out.extend_from_slice(data);
            out.extend_from_slice(b"\nendstream");
        }
        Object::Reference(id) => out.extend_from_slice(id.to_string().as_bytes()),
    }
}
