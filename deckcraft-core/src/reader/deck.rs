//! Deck data structures

use std::path::PathBuf;

/// Represents a loaded presentation
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub path: PathBuf,
    /// Slides in deck order (the order of `p:sldId` entries)
    pub slides: Vec<Slide>,
    /// Slide width in EMUs
    pub slide_width: i64,
    /// Slide height in EMUs
    pub slide_height: i64,
}

impl Deck {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// All run text in the deck, one run per line
    pub fn all_text(&self) -> String {
        let mut out = String::new();
        for slide in &self.slides {
            for run in slide.runs() {
                out.push_str(run);
                out.push('\n');
            }
        }
        out
    }
}

/// One slide in deck order
#[derive(Debug, Clone, Default)]
pub struct Slide {
    /// Package part name, e.g. "ppt/slides/slide3.xml"
    pub part_name: String,
    /// Relationship id in the presentation part
    pub rel_id: String,
    /// `p:sldId` id attribute
    pub slide_id: u32,
    pub shapes: Vec<Shape>,
}

impl Slide {
    /// Iterate every text run on the slide, including table cells
    pub fn runs(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().flat_map(|shape| {
            let shape_runs = shape
                .paragraphs
                .iter()
                .flat_map(|p| p.runs.iter().map(String::as_str));
            let table_runs = shape
                .table
                .iter()
                .flat_map(|t| t.rows.iter())
                .flat_map(|row| row.iter())
                .flat_map(|cell| cell.paragraphs.iter())
                .flat_map(|p| p.runs.iter().map(String::as_str));
            shape_runs.chain(table_runs)
        })
    }

    /// Concatenated slide text, runs separated by newlines
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in self.runs() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(run);
        }
        out
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn run_count(&self) -> usize {
        self.runs().count()
    }
}

/// A visual element on a slide
#[derive(Debug, Clone, Default)]
pub struct Shape {
    /// Name from `p:cNvPr`
    pub name: String,
    pub paragraphs: Vec<Paragraph>,
    /// Present when the shape is a graphic frame holding a table
    pub table: Option<Table>,
}

/// A paragraph of text runs
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub runs: Vec<String>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.concat()
    }
}

/// A table inside a graphic frame
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<Vec<Cell>>,
}

/// One table cell
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub paragraphs: Vec<Paragraph>,
}
