//! Office Open XML (DOCX/PPTX) text extraction
//!
//! Both formats are zip archives of XML parts. Only the parts carrying body
//! text are read; styles, media and metadata are ignored.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use quick_xml::{Reader, events::Event};
use tracing::debug;
use zip::{ZipArchive, result::ZipError};

use crate::error::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";
const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";
const SLIDE_PREFIX: &str = "ppt/slides/slide";

type Archive<'a> = ZipArchive<Cursor<&'a [u8]>>;

/// Extract a Word document's paragraphs, each followed by a newline
pub fn extract_word_document(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open(bytes)?;
    let xml = read_part(&mut archive, DOCUMENT_PART)?;
    word_document_text(&xml)
}

/// Extract a slide deck's shape texts, slide by slide
///
/// Every top-level shape contributes its paragraphs joined by newlines,
/// followed by a newline.
pub fn extract_slide_deck(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = open(bytes)?;
    let slides = slide_parts(&mut archive)?;
    debug!(slides = slides.len(), "Reading slide deck");

    let mut text = String::new();
    for slide in slides {
        let xml = read_part(&mut archive, &slide)?;
        for shape in slide_shape_texts(&xml)? {
            text.push_str(&shape);
            text.push('\n');
        }
    }

    Ok(text)
}

fn open(bytes: &[u8]) -> Result<Archive<'_>, ExtractionError> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

fn read_part(archive: &mut Archive<'_>, name: &str) -> Result<Vec<u8>, ExtractionError> {
    let mut part = archive.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => ExtractionError::MissingPart(name.to_string()),
        other => other.into(),
    })?;

    let mut data = Vec::new();
    part.read_to_end(&mut data)
        .map_err(|e| ExtractionError::Archive(format!("Failed to read {name}: {e}")))?;
    Ok(data)
}

fn word_document_text(xml: &[u8]) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut text = String::new();
    let mut in_run = false;
    let mut in_text = false;
    // Text boxes and markup-compatibility fallbacks sit inside body runs
    let mut skipped = 0usize;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:txbxContent" | b"mc:Fallback" => skipped += 1,
                _ if skipped > 0 => {},
                b"w:r" => in_run = true,
                b"w:t" => in_text = in_run,
                _ => {},
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:txbxContent" | b"mc:Fallback" => skipped = skipped.saturating_sub(1),
                _ if skipped > 0 => {},
                b"w:r" => in_run = false,
                b"w:t" => in_text = false,
                b"w:p" => text.push('\n'),
                _ => {},
            },
            Event::Empty(e) => match e.name().as_ref() {
                _ if skipped > 0 => {},
                b"w:p" => text.push('\n'),
                // Tab stops in paragraph properties also use w:tab
                b"w:tab" if in_run => text.push('\t'),
                b"w:br" | b"w:cr" if in_run => text.push('\n'),
                _ => {},
            },
            Event::Text(e) if in_text && skipped == 0 => text.push_str(&e.unescape()?),
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(text)
}

/// Slide part names in presentation order
fn slide_parts(archive: &mut Archive<'_>) -> Result<Vec<String>, ExtractionError> {
    match presentation_order(archive) {
        Ok(parts) if !parts.is_empty() => return Ok(parts),
        Ok(_) => {},
        Err(e) => debug!(error = %e, "Falling back to slide file numbering"),
    }

    let numbered = numbered_slide_parts(archive);
    if numbered.is_empty() && !archive.file_names().any(|name| name == PRESENTATION_PART) {
        return Err(ExtractionError::MissingPart(PRESENTATION_PART.to_string()));
    }
    Ok(numbered)
}

fn presentation_order(archive: &mut Archive<'_>) -> Result<Vec<String>, ExtractionError> {
    let presentation = read_part(archive, PRESENTATION_PART)?;
    let rels = read_part(archive, PRESENTATION_RELS_PART)?;

    let slide_ids = slide_relationship_ids(&presentation)?;
    let targets = relationship_targets(&rels)?;

    Ok(slide_ids
        .iter()
        .filter_map(|id| targets.get(id))
        .map(|target| resolve_target(target))
        .collect())
}

fn slide_relationship_ids(xml: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut ids = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"p:sldId" => {
                if let Some(attr) = e
                    .try_get_attribute("r:id")
                    .map_err(|err| ExtractionError::Xml(err.to_string()))?
                {
                    ids.push(attr.unescape_value()?.into_owned());
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(ids)
}

fn relationship_targets(xml: &[u8]) -> Result<HashMap<String, String>, ExtractionError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut targets = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"Relationship" => {
                let id = e
                    .try_get_attribute("Id")
                    .map_err(|err| ExtractionError::Xml(err.to_string()))?;
                let target = e
                    .try_get_attribute("Target")
                    .map_err(|err| ExtractionError::Xml(err.to_string()))?;
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(
                        id.unescape_value()?.into_owned(),
                        target.unescape_value()?.into_owned(),
                    );
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(targets)
}

/// Turn a relationship target (relative to `ppt/`, or absolute) into a part name
fn resolve_target(target: &str) -> String {
    target
        .strip_prefix('/')
        .map_or_else(|| format!("ppt/{target}"), ToString::to_string)
}

/// `ppt/slides/slideN.xml` parts sorted by N
fn numbered_slide_parts(archive: &Archive<'_>) -> Vec<String> {
    let mut numbered: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| {
            let number = name
                .strip_prefix(SLIDE_PREFIX)?
                .strip_suffix(".xml")?
                .parse()
                .ok()?;
            Some((number, name.to_string()))
        })
        .collect();
    numbered.sort_unstable();
    numbered.into_iter().map(|(_, name)| name).collect()
}

/// Texts of the slide's top-level shapes, in document order
///
/// Every `p:sp` directly under the shape tree yields one entry, empty when
/// it has no text body. Group shapes, pictures and graphic frames yield none.
fn slide_shape_texts(xml: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut shapes = Vec::new();
    let mut paragraphs: Option<Vec<String>> = None;
    let mut group_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"p:grpSp" => group_depth += 1,
                b"p:sp" if group_depth == 0 => paragraphs = Some(Vec::new()),
                b"a:p" => {
                    if let Some(current) = paragraphs.as_mut() {
                        current.push(String::new());
                    }
                },
                b"a:t" => in_text = paragraphs.is_some(),
                _ => {},
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"p:sp" if group_depth == 0 && paragraphs.is_none() => shapes.push(String::new()),
                b"a:p" => {
                    if let Some(current) = paragraphs.as_mut() {
                        current.push(String::new());
                    }
                },
                b"a:br" => {
                    if let Some(paragraph) = paragraphs.as_mut().and_then(|p| p.last_mut()) {
                        paragraph.push('\n');
                    }
                },
                _ => {},
            },
            Event::End(e) => match e.name().as_ref() {
                b"p:grpSp" => group_depth = group_depth.saturating_sub(1),
                b"a:t" => in_text = false,
                b"p:sp" if group_depth == 0 => {
                    if let Some(done) = paragraphs.take() {
                        shapes.push(done.join("\n"));
                    }
                },
                _ => {},
            },
            Event::Text(e) if in_text => {
                let fragment = e.unescape()?;
                if let Some(paragraph) = paragraphs.as_mut().and_then(|p| p.last_mut()) {
                    paragraph.push_str(&fragment);
                }
            },
            Event::Eof => break,
            _ => {},
        }
        buf.clear();
    }

    Ok(shapes)
}
