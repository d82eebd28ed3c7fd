//! Default page source backed by lopdf.
//!
//! Walks each page's content stream, tracking the text matrix so every
//! text-showing operator yields a [`Span`] with its font, size, and
//! baseline position. Baselines are converted to top-down coordinates
//! (PDF y grows upward), so ascending `baseline_y` approximates reading
//! order.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, ObjectId};

use crate::error::{Error, Result};
use crate::model::Span;

use super::source::{DocumentSource, PageSource};

/// Opens PDF files from the filesystem via lopdf.
pub struct LopdfDocumentSource;

impl DocumentSource for LopdfDocumentSource {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>> {
        let doc = LopdfDocument::load(path)?;
        let pages = doc.get_pages();
        Ok(Box::new(LopdfPageSource { doc, pages }))
    }
}

/// One opened PDF document.
pub struct LopdfPageSource {
    doc: LopdfDocument,
    pages: BTreeMap<u32, ObjectId>,
}

impl PageSource for LopdfPageSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_spans(&self, page: u32) -> Result<Vec<Span>> {
        let page_id = *self
            .pages
            .get(&page)
            .ok_or_else(|| Error::PdfParse(format!("page {} out of range", page)))?;

        let fonts = self.page_font_names(page_id)?;
        let height = self.page_height(page_id);
        let content = self.page_content(page_id)?;
        self.walk_content(&content, &fonts, height)
    }
}

impl LopdfPageSource {
    /// Map font resource names (e.g. "F1") to their base font names.
    fn page_font_names(&self, page_id: ObjectId) -> Result<BTreeMap<Vec<u8>, String>> {
        let lopdf_fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut fonts = BTreeMap::new();
        for (name, font) in &lopdf_fonts {
            let base_font = font
                .get(b"BaseFont")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map(|n| String::from_utf8_lossy(n).to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            fonts.insert(name.clone(), base_font);
        }
        Ok(fonts)
    }

    /// Page height from the MediaBox, defaulting to Letter.
    fn page_height(&self, page_id: ObjectId) -> f32 {
        if let Ok(page_dict) = self.doc.get_dictionary(page_id) {
            if let Ok(media_box) = page_dict.get(b"MediaBox") {
                if let Ok(array) = media_box.as_array() {
                    if array.len() >= 4 {
                        if let Some(height) = get_number(&array[3]) {
                            return height;
                        }
                    }
                }
            }
        }
        792.0
    }

    /// Raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page_id: ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Walk the content stream and emit one span per text-showing op.
    fn walk_content(
        &self,
        content: &[u8],
        fonts: &BTreeMap<Vec<u8>, String>,
        page_height: f32,
    ) -> Result<Vec<Span>> {
        let content =
            lopdf::content::Content::decode(content).map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut spans = Vec::new();
        let mut current_font = String::new();
        let mut current_size: f32 = 0.0;
        let mut matrix = TextMatrix::default();
        let mut in_text_block = false;

        let mut emit = |text: String, matrix: &TextMatrix, size: f32, font: &str| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return;
            }
            let (_, y) = matrix.position();
            spans.push(Span::new(
                trimmed,
                font,
                page_height - y,
                size * matrix.scale(),
            ));
        };

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text_block = false;
                }
                "Tf" => {
                    if let Some(Object::Name(font_name)) = op.operands.first() {
                        current_font = fonts
                            .get(font_name.as_slice())
                            .cloned()
                            .unwrap_or_else(|| {
                                String::from_utf8_lossy(font_name.as_slice()).to_string()
                            });
                    }
                    // Absent size operand degrades to 0, never fails the page.
                    current_size = op.operands.get(1).and_then(get_number).unwrap_or(0.0);
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        let v: Vec<f32> = op
                            .operands
                            .iter()
                            .take(6)
                            .map(|o| get_number(o).unwrap_or(0.0))
                            .collect();
                        matrix.set(v[0], v[1], v[2], v[3], v[4], v[5]);
                    }
                }
                "T*" => {
                    matrix.next_line();
                }
                "Tj" => {
                    if in_text_block {
                        if let Some(Object::String(bytes, _)) = op.operands.first() {
                            emit(decode_text(bytes), &matrix, current_size, &current_font);
                        }
                    }
                }
                "TJ" => {
                    if in_text_block {
                        if let Some(Object::Array(arr)) = op.operands.first() {
                            emit(
                                decode_text_array(arr),
                                &matrix,
                                current_size,
                                &current_font,
                            );
                        }
                    }
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if in_text_block {
                        let text_idx = if op.operator == "\"" { 2 } else { 0 };
                        if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                            emit(decode_text(bytes), &matrix, current_size, &current_font);
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(spans)
    }
}

/// Text matrix state tracked through the content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; a TL-aware walk is not needed for span ordering.
        self.f -= 12.0 * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Decode a TJ array: strings interleaved with kerning adjustments.
/// Large negative adjustments (in 1/1000 text-space units) usually encode
/// word spaces.
fn decode_text_array(arr: &[Object]) -> String {
    const SPACE_THRESHOLD: f32 = 200.0;

    let mut combined = String::new();
    for item in arr {
        match item {
            Object::String(bytes, _) => combined.push_str(&decode_text(bytes)),
            Object::Integer(n) => {
                if -(*n as f32) > SPACE_THRESHOLD && !combined.ends_with(' ') {
                    combined.push(' ');
                }
            }
            Object::Real(n) => {
                if -n > SPACE_THRESHOLD && !combined.ends_with(' ') {
                    combined.push(' ');
                }
            }
            _ => {}
        }
    }
    combined
}

/// Decode a PDF text string: UTF-16BE when BOM-marked, then UTF-8, then
/// Latin-1 as a last resort.
fn decode_text(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    bytes.iter().map(|&b| b as char).collect()
}

/// Helper to extract a number from a PDF object.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
