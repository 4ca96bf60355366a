//! DOCX text extraction
//!
//! A `.docx` file is a zip archive; paragraph text lives in
//! `word/document.xml` as `<w:p>` elements holding `<w:t>` runs.

use crate::extract::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use zip::ZipArchive;

/// Archive member holding the main document body
const DOCUMENT_PART: &str = "word/document.xml";

/// Extracts lowercase text from an in-memory DOCX document
///
/// The bytes are spooled to a scratch file that is removed when this
/// function returns, on success and on every error path.
pub fn docx_to_text(bytes: &[u8]) -> Result<String, ExtractError> {
    docx_to_text_in(bytes, &std::env::temp_dir())
}

/// Same as [`docx_to_text`], with the scratch file created in `scratch_dir`
fn docx_to_text_in(bytes: &[u8], scratch_dir: &Path) -> Result<String, ExtractError> {
    let mut scratch = NamedTempFile::new_in(scratch_dir)?;
    scratch.write_all(bytes)?;
    scratch.flush()?;

    let paragraphs = read_paragraphs(scratch.reopen()?)?;
    Ok(paragraphs.join(" ").to_lowercase())
}

/// Reads the paragraph texts of a DOCX file
fn read_paragraphs(file: File) -> Result<Vec<String>, ExtractError> {
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    parse_document_xml(&xml)
}

/// Collects the text of every `<w:p>` paragraph in document order
///
/// Tabs and line breaks inside a paragraph are kept as `\t` and `\n`.
fn parse_document_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    // Paragraphs nest inside text boxes, so track them as a stack
    let mut open: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open.push(String::new()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_to_open(&mut open, "\t"),
                b"w:br" | b"w:cr" => push_to_open(&mut open, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape()?;
                push_to_open(&mut open, &text);
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    if let Some(paragraph) = open.pop() {
                        paragraphs.push(paragraph);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_to_open(open: &mut [String], text: &str) {
    if let Some(paragraph) = open.last_mut() {
        paragraph.push_str(text);
    }
}
