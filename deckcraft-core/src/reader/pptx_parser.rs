//! Streaming parsers for the PPTX package parts
//!
//! Shared between the reader (deck model) and the writer (package
//! rewriting): relationship tables, the presentation slide-id list and
//! the shape/text structure of a slide part.

use super::deck::{Cell, Paragraph, Shape, Table};
use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;

/// One entry of a `.rels` part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

/// One `p:sldId` entry of the presentation part
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideId {
    pub id: u32,
    pub rel_id: String,
}

/// Parse all `Relationship` entries of a relationships part
pub fn parse_relationships(xml: &str) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut rels = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.name().as_ref() == b"Relationship" =>
            {
                let mut rel = Relationship {
                    id: String::new(),
                    rel_type: String::new(),
                    target: String::new(),
                };
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"Id" => rel.id = String::from_utf8(attr.value.to_vec())?,
                        b"Type" => rel.rel_type = String::from_utf8(attr.value.to_vec())?,
                        b"Target" => rel.target = String::from_utf8(attr.value.to_vec())?,
                        _ => {}
                    }
                }
                rels.push(rel);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(rels)
}

/// Parse the ordered `p:sldId` entries of `ppt/presentation.xml`
pub fn parse_slide_id_list(xml: &str) -> Result<Vec<SlideId>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut slide_ids = Vec::new();
    let mut in_list = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"p:sldIdLst" => in_list = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"p:sldIdLst" => in_list = false,
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if in_list && e.name().as_ref() == b"p:sldId" =>
            {
                let mut id = 0u32;
                let mut rel_id = String::new();
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"id" => id = String::from_utf8(attr.value.to_vec())?.parse()?,
                        b"r:id" => rel_id = String::from_utf8(attr.value.to_vec())?,
                        _ => {}
                    }
                }
                slide_ids.push(SlideId { id, rel_id });
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(slide_ids)
}

/// Parse `p:sldSz` into (width, height) EMUs; (0, 0) when absent
pub fn parse_slide_size(xml: &str) -> Result<(i64, i64)> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == b"p:sldSz" => {
                let mut cx = 0i64;
                let mut cy = 0i64;
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"cx" => cx = String::from_utf8(attr.value.to_vec())?.parse()?,
                        b"cy" => cy = String::from_utf8(attr.value.to_vec())?.parse()?,
                        _ => {}
                    }
                }
                return Ok((cx, cy));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    Ok((0, 0))
}

/// Resolve a relationship target relative to `ppt/` into a part name
pub fn resolve_part_name(target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        absolute.to_string()
    } else if let Some(parent) = target.strip_prefix("../") {
        parent.to_string()
    } else {
        format!("ppt/{}", target)
    }
}

/// Parse the shapes and text runs of one slide part
///
/// Text boxes and placeholders come back as shapes with paragraphs;
/// graphic frames holding a table come back with the table's cell text.
/// Group nesting is flattened.
pub fn parse_slide_shapes(xml: &str) -> Result<Vec<Shape>> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut shapes: Vec<Shape> = Vec::new();
    let mut current: Option<Shape> = None;
    let mut in_cell = false;
    let mut in_t = false;
    let mut run_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"p:sp" | b"p:graphicFrame" => {
                    if let Some(shape) = current.take() {
                        shapes.push(shape);
                    }
                    current = Some(Shape::default());
                }
                b"p:cNvPr" => {
                    if let Some(shape) = current.as_mut() {
                        if shape.name.is_empty() {
                            for attr in e.attributes() {
                                let attr = attr?;
                                if attr.key.as_ref() == b"name" {
                                    shape.name = String::from_utf8(attr.value.to_vec())?;
                                }
                            }
                        }
                    }
                }
                b"a:tbl" => {
                    if let Some(shape) = current.as_mut() {
                        shape.table = Some(Table::default());
                    }
                }
                b"a:tr" => {
                    if let Some(table) = current.as_mut().and_then(|s| s.table.as_mut()) {
                        table.rows.push(Vec::new());
                    }
                }
                b"a:tc" => {
                    if let Some(row) = current
                        .as_mut()
                        .and_then(|s| s.table.as_mut())
                        .and_then(|t| t.rows.last_mut())
                    {
                        row.push(Cell::default());
                        in_cell = true;
                    }
                }
                b"a:p" => {
                    if let Some(shape) = current.as_mut() {
                        if in_cell {
                            if let Some(cell) = shape
                                .table
                                .as_mut()
                                .and_then(|t| t.rows.last_mut())
                                .and_then(|r| r.last_mut())
                            {
                                cell.paragraphs.push(Paragraph::default());
                            }
                        } else {
                            shape.paragraphs.push(Paragraph::default());
                        }
                    }
                }
                b"a:t" => {
                    in_t = true;
                    run_text.clear();
                }
                _ => {}
            },
            Ok(Event::Empty(e)) if e.name().as_ref() == b"p:cNvPr" => {
                if let Some(shape) = current.as_mut() {
                    if shape.name.is_empty() {
                        for attr in e.attributes() {
                            let attr = attr?;
                            if attr.key.as_ref() == b"name" {
                                shape.name = String::from_utf8(attr.value.to_vec())?;
                            }
                        }
                    }
                }
            }
            Ok(Event::Text(e)) if in_t => {
                run_text.push_str(&e.unescape()?);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"p:sp" | b"p:graphicFrame" => {
                    if let Some(shape) = current.take() {
                        shapes.push(shape);
                    }
                }
                b"a:tc" => in_cell = false,
                b"a:t" => {
                    in_t = false;
                    if let Some(shape) = current.as_mut() {
                        let paragraph = if in_cell {
                            shape
                                .table
                                .as_mut()
                                .and_then(|t| t.rows.last_mut())
                                .and_then(|r| r.last_mut())
                                .and_then(|c| c.paragraphs.last_mut())
                        } else {
                            shape.paragraphs.last_mut()
                        };
                        if let Some(paragraph) = paragraph {
                            paragraph.runs.push(run_text.clone());
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
            _ => {}
        }
        buf.clear();
    }

    if let Some(shape) = current.take() {
        shapes.push(shape);
    }

    Ok(shapes)
}
