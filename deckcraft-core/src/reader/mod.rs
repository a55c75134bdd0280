//! PPTX deck reader built on the zip package and streaming XML parsers

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

pub mod deck;
pub mod pptx_parser;

use crate::error::PackageError;
pub use deck::{Cell, Deck, Paragraph, Shape, Slide, Table};
use pptx_parser::{
    parse_relationships, parse_slide_id_list, parse_slide_shapes, parse_slide_size,
    resolve_part_name,
};

pub(crate) const PRESENTATION_PART: &str = "ppt/presentation.xml";
pub(crate) const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";

/// Read one package part into a string
pub(crate) fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut file = archive
        .by_name(name)
        .map_err(|_| PackageError::MissingPart(name.to_string()))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read part: {}", name))?;
    Ok(content)
}

/// Read a deck from a file path
pub fn read_deck<P: AsRef<Path>>(path: P) -> Result<Deck> {
    let path_ref = path.as_ref();

    let file = File::open(path_ref)
        .with_context(|| format!("Failed to open file: {}", path_ref.display()))?;
    let mut archive = ZipArchive::new(BufReader::new(file)).context("Failed to open zip archive")?;

    let presentation_xml = read_part(&mut archive, PRESENTATION_PART)?;
    let rels_xml = read_part(&mut archive, PRESENTATION_RELS_PART)?;

    let slide_ids = parse_slide_id_list(&presentation_xml)?;
    let (slide_width, slide_height) = parse_slide_size(&presentation_xml)?;

    let rels = parse_relationships(&rels_xml)?;
    let rel_targets: HashMap<&str, &str> = rels
        .iter()
        .map(|r| (r.id.as_str(), r.target.as_str()))
        .collect();

    // Pull the slide XML out of the archive sequentially, parse in parallel.
    let mut pending = Vec::with_capacity(slide_ids.len());
    for slide_id in &slide_ids {
        let target = rel_targets
            .get(slide_id.rel_id.as_str())
            .ok_or_else(|| PackageError::MissingSlideRel(slide_id.rel_id.clone()))?;
        let part_name = resolve_part_name(target);
        let xml = read_part(&mut archive, &part_name)?;
        pending.push((part_name, xml));
    }

    let parsed: Result<Vec<Vec<Shape>>> = pending
        .par_iter()
        .map(|(part_name, xml)| {
            parse_slide_shapes(xml).with_context(|| format!("Failed to parse {}", part_name))
        })
        .collect();
    let parsed = parsed?;

    let slides = slide_ids
        .into_iter()
        .zip(pending)
        .zip(parsed)
        .map(|((slide_id, (part_name, _)), shapes)| Slide {
            part_name,
            rel_id: slide_id.rel_id,
            slide_id: slide_id.id,
            shapes,
        })
        .collect();

    Ok(Deck {
        path: path_ref.to_path_buf(),
        slides,
        slide_width,
        slide_height,
    })
}
