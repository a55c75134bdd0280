//! PPTX writer: run-text rewriting, slide synthesis and deck reordering
//!
//! One streaming pass over the package: slide parts get their run text
//! rewritten, synthesized slides are appended as new parts, and the
//! presentation part, its relationships and `[Content_Types].xml` are
//! patched accordingly. Every other entry is copied through untouched.

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Write};
use std::path::Path;
use zip::{write::FileOptions, ZipArchive, ZipWriter};

use crate::error::PackageError;
use crate::reader::pptx_parser::{
    parse_relationships, parse_slide_id_list, resolve_part_name, SlideId,
};
use crate::reader::{read_part, PRESENTATION_PART, PRESENTATION_RELS_PART};
use crate::slides::SlideSpec;

const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
const SLIDE_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
const SLIDE_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const SLIDE_LAYOUT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const DEFAULT_LAYOUT_TARGET: &str = "../slideLayouts/slideLayout1.xml";

/// Targeted whole-run rewrite: when a run's text contains `contains`,
/// the entire run text becomes `replace_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRewrite {
    pub contains: String,
    pub replace_with: String,
}

impl RunRewrite {
    pub fn new(contains: &str, replace_with: &str) -> Self {
        Self {
            contains: contains.to_string(),
            replace_with: replace_with.to_string(),
        }
    }
}

/// Struct used to define edits to be applied to a deck
#[derive(Debug, Default, Clone)]
pub struct DeckEdits {
    /// Ordered literal replacements applied to every run of every slide
    pub replacements: Vec<(String, String)>,
    /// Whole-run rewrites keyed by 0-based slide index in deck order;
    /// the first matching rewrite wins per run
    pub run_rewrites: BTreeMap<usize, Vec<RunRewrite>>,
    /// Slides to synthesize and append after the existing slides
    pub new_slides: Vec<SlideSpec>,
    /// Permutation of the deck order after appends (indices 0..n)
    pub slide_order: Option<Vec<usize>>,
}

/// What one editing pass did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditSummary {
    /// Runs changed by the global replacements
    pub runs_replaced: usize,
    /// Runs overwritten by a targeted rewrite
    pub runs_rewritten: usize,
    pub slides_added: usize,
    pub reordered: bool,
}

struct NewSlidePart {
    part_name: String,
    rel_id: String,
    slide_id: u32,
    xml: String,
}

/// Apply the edits to `input_path`, writing the result to `output_path`
pub fn apply_edits(
    input_path: &Path,
    output_path: &Path,
    edits: &DeckEdits,
) -> Result<EditSummary> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open file: {}", input_path.display()))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).context("Failed to open zip archive")?;

    let presentation_xml = read_part(&mut archive, PRESENTATION_PART)?;
    let rels_xml = read_part(&mut archive, PRESENTATION_RELS_PART)?;

    let slide_ids = parse_slide_id_list(&presentation_xml)?;
    let rels = parse_relationships(&rels_xml)?;
    let rel_targets: HashMap<&str, &str> = rels
        .iter()
        .map(|r| (r.id.as_str(), r.target.as_str()))
        .collect();

    // Deck order -> slide part names, and the reverse lookup used when
    // streaming entries through.
    let mut slide_parts = Vec::with_capacity(slide_ids.len());
    for slide_id in &slide_ids {
        let target = rel_targets
            .get(slide_id.rel_id.as_str())
            .ok_or_else(|| PackageError::MissingSlideRel(slide_id.rel_id.clone()))?;
        slide_parts.push(resolve_part_name(target));
    }
    let part_index: HashMap<&str, usize> = slide_parts
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    validate_edits(edits, slide_parts.len())?;

    let new_parts = plan_new_parts(&mut archive, &rels, &slide_ids, edits)?;
    let layout_target = layout_target_for(&mut archive, slide_parts.first())?;

    // Final p:sldId list: existing entries, appended ones, then the
    // permutation if the edits carry one.
    let mut final_ids: Vec<SlideId> = slide_ids.clone();
    final_ids.extend(new_parts.iter().map(|p| SlideId {
        id: p.slide_id,
        rel_id: p.rel_id.clone(),
    }));
    if let Some(order) = &edits.slide_order {
        final_ids = order.iter().map(|&i| final_ids[i].clone()).collect();
    }

    let new_presentation_xml = rewrite_slide_id_list(&presentation_xml, &final_ids)?;
    let new_rels_xml = append_slide_relationships(&rels_xml, &new_parts)?;
    let content_types_xml = read_part(&mut archive, CONTENT_TYPES_PART)?;
    let new_content_types = append_slide_overrides(&content_types_xml, &new_parts)?;

    let output_file = File::create(output_path)
        .with_context(|| format!("Failed to create file: {}", output_path.display()))?;
    let mut zip_writer = ZipWriter::new(output_file);

    let mut summary = EditSummary {
        slides_added: edits.new_slides.len(),
        reordered: edits.slide_order.is_some(),
        ..Default::default()
    };

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        if name == PRESENTATION_PART {
            zip_writer.start_file(&name, FileOptions::<()>::default())?;
            zip_writer.write_all(new_presentation_xml.as_bytes())?;
        } else if name == PRESENTATION_RELS_PART {
            zip_writer.start_file(&name, FileOptions::<()>::default())?;
            zip_writer.write_all(new_rels_xml.as_bytes())?;
        } else if name == CONTENT_TYPES_PART {
            zip_writer.start_file(&name, FileOptions::<()>::default())?;
            zip_writer.write_all(new_content_types.as_bytes())?;
        } else if let Some(&slide_index) = part_index.get(name.as_str()) {
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            let rewrites = edits.run_rewrites.get(&slide_index).map(Vec::as_slice);
            let (rewritten, replaced, overwritten) =
                rewrite_slide_runs(&content, &edits.replacements, rewrites)?;
            summary.runs_replaced += replaced;
            summary.runs_rewritten += overwritten;
            zip_writer.start_file(&name, FileOptions::<()>::default())?;
            zip_writer.write_all(rewritten.as_bytes())?;
        } else {
            // Copy file as is
            zip_writer.start_file(&name, FileOptions::<()>::default())?;
            let mut buffer = Vec::new();
            file.read_to_end(&mut buffer)?;
            zip_writer.write_all(&buffer)?;
        }
    }

    for part in &new_parts {
        zip_writer.start_file(&part.part_name, FileOptions::<()>::default())?;
        zip_writer.write_all(part.xml.as_bytes())?;

        let rels_name = slide_rels_name(&part.part_name);
        zip_writer.start_file(&rels_name, FileOptions::<()>::default())?;
        zip_writer.write_all(slide_rels_xml(&layout_target).as_bytes())?;
    }

    zip_writer.finish()?;
    Ok(summary)
}

/// Reject structurally impossible edits before any output is written
fn validate_edits(edits: &DeckEdits, existing: usize) -> Result<()> {
    for &index in edits.run_rewrites.keys() {
        if index >= existing {
            return Err(PackageError::RewriteOutOfRange {
                index,
                count: existing,
            }
            .into());
        }
    }

    if let Some(order) = &edits.slide_order {
        let total = existing + edits.new_slides.len();
        if order.len() != total {
            return Err(PackageError::InvalidOrder(format!(
                "expected {} indices, got {}",
                total,
                order.len()
            ))
            .into());
        }
        let mut seen = HashSet::new();
        for &index in order {
            if index >= total {
                return Err(PackageError::InvalidOrder(format!(
                    "index {} out of range for {} slides",
                    index, total
                ))
                .into());
            }
            if !seen.insert(index) {
                return Err(
                    PackageError::InvalidOrder(format!("duplicate index {}", index)).into(),
                );
            }
        }
    }

    Ok(())
}

/// Assign part names, relationship ids and slide ids to the new slides
fn plan_new_parts<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    rels: &[crate::reader::pptx_parser::Relationship],
    slide_ids: &[SlideId],
    edits: &DeckEdits,
) -> Result<Vec<NewSlidePart>> {
    let max_slide_num = archive
        .file_names()
        .filter_map(|name| {
            name.strip_prefix("ppt/slides/slide")?
                .strip_suffix(".xml")?
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0);

    let max_rid = rels
        .iter()
        .filter_map(|r| r.id.strip_prefix("rId")?.parse::<u32>().ok())
        .max()
        .unwrap_or(0);

    // PowerPoint slide ids start at 256.
    let max_slide_id = slide_ids.iter().map(|s| s.id).max().unwrap_or(255).max(255);

    Ok(edits
        .new_slides
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let offset = i as u32 + 1;
            NewSlidePart {
                part_name: format!("ppt/slides/slide{}.xml", max_slide_num + offset),
                rel_id: format!("rId{}", max_rid + offset),
                slide_id: max_slide_id + offset,
                xml: spec.to_xml(),
            }
        })
        .collect())
}

/// Find the slide layout the first slide references; fall back to layout 1
fn layout_target_for<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    first_slide: Option<&String>,
) -> Result<String> {
    if let Some(part_name) = first_slide {
        let rels_name = slide_rels_name(part_name);
        if let Ok(rels_xml) = read_part(archive, &rels_name) {
            for rel in parse_relationships(&rels_xml)? {
                if rel.rel_type == SLIDE_LAYOUT_REL_TYPE {
                    return Ok(rel.target);
                }
            }
        }
    }
    Ok(DEFAULT_LAYOUT_TARGET.to_string())
}

/// Relationships part name of a slide part
fn slide_rels_name(part_name: &str) -> String {
    match part_name.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_name),
    }
}

fn slide_rels_xml(layout_target: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}" Target="{}"/></Relationships>"#,
        SLIDE_LAYOUT_REL_TYPE, layout_target
    )
}

/// Rewrite run text (`a:t`) in one slide part
///
/// Returns the rewritten XML plus the counts of runs changed by the
/// global replacements and by the targeted rewrites.
fn rewrite_slide_runs(
    xml: &str,
    replacements: &[(String, String)],
    rewrites: Option<&[RunRewrite]>,
) -> Result<(String, usize, usize)> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    let mut in_t = false;
    let mut run_text = String::new();
    let mut replaced = 0usize;
    let mut overwritten = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"a:t" => {
                in_t = true;
                run_text.clear();
                writer.write_event(Event::Start(e))?;
            }
            Ok(Event::Text(e)) if in_t => {
                run_text.push_str(&e.unescape()?);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"a:t" => {
                let mut text = run_text.clone();
                for (old, new) in replacements {
                    if text.contains(old.as_str()) {
                        text = text.replace(old.as_str(), new);
                    }
                }
                if text != run_text {
                    replaced += 1;
                }
                if let Some(rules) = rewrites {
                    for rule in rules {
                        if text.contains(rule.contains.as_str()) {
                            text = rule.replace_with.clone();
                            overwritten += 1;
                            break;
                        }
                    }
                }
                if !text.is_empty() {
                    writer.write_event(Event::Text(BytesText::new(&text)))?;
                }
                writer.write_event(Event::End(e))?;
                in_t = false;
            }
            Ok(Event::Eof) => break,
            Ok(e) => writer.write_event(e)?,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
        }
        buf.clear();
    }

    let result = writer.into_inner().into_inner();
    Ok((String::from_utf8(result)?, replaced, overwritten))
}

/// Replace the children of `p:sldIdLst` with the given entries
fn rewrite_slide_id_list(xml: &str, entries: &[SlideId]) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();
    let mut skipping = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"p:sldIdLst" => {
                writer.write_event(Event::Start(e))?;
                write_slide_id_entries(&mut writer, entries)?;
                skipping = true;
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == b"p:sldIdLst" => {
                writer.write_event(Event::Start(e))?;
                write_slide_id_entries(&mut writer, entries)?;
                writer.write_event(Event::End(quick_xml::events::BytesEnd::new("p:sldIdLst")))?;
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"p:sldIdLst" => {
                writer.write_event(Event::End(e))?;
                skipping = false;
            }
            Ok(Event::Eof) => break,
            Ok(e) => {
                if !skipping {
                    writer.write_event(e)?;
                }
            }
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
        }
        buf.clear();
    }

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

fn write_slide_id_entries(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    entries: &[SlideId],
) -> Result<()> {
    for entry in entries {
        let mut el = BytesStart::new("p:sldId");
        el.push_attribute(("id", entry.id.to_string().as_str()));
        el.push_attribute(("r:id", entry.rel_id.as_str()));
        writer.write_event(Event::Empty(el))?;
    }
    Ok(())
}

/// Append slide relationships to the presentation rels part
fn append_slide_relationships(xml: &str, new_parts: &[NewSlidePart]) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::End(e)) if e.name().as_ref() == b"Relationships" => {
                for part in new_parts {
                    let target = part
                        .part_name
                        .strip_prefix("ppt/")
                        .unwrap_or(&part.part_name);
                    let mut el = BytesStart::new("Relationship");
                    el.push_attribute(("Id", part.rel_id.as_str()));
                    el.push_attribute(("Type", SLIDE_REL_TYPE));
                    el.push_attribute(("Target", target));
                    writer.write_event(Event::Empty(el))?;
                }
                writer.write_event(Event::End(e))?;
            }
            Ok(Event::Eof) => break,
            Ok(e) => writer.write_event(e)?,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
        }
        buf.clear();
    }

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}

/// Append content-type overrides for the new slide parts
fn append_slide_overrides(xml: &str, new_parts: &[NewSlidePart]) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::End(e)) if e.name().as_ref() == b"Types" => {
                for part in new_parts {
                    let part_name = format!("/{}", part.part_name);
                    let mut el = BytesStart::new("Override");
                    el.push_attribute(("PartName", part_name.as_str()));
                    el.push_attribute(("ContentType", SLIDE_CONTENT_TYPE));
                    writer.write_event(Event::Empty(el))?;
                }
                writer.write_event(Event::End(e))?;
            }
            Ok(Event::Eof) => break,
            Ok(e) => writer.write_event(e)?,
            Err(e) => return Err(anyhow::anyhow!("Error parsing XML: {}", e)),
        }
        buf.clear();
    }

    let result = writer.into_inner().into_inner();
    Ok(String::from_utf8(result)?)
}
