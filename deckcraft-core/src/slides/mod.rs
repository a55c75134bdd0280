//! Declarative construction of synthesized slides
//!
//! A `SlideSpec` describes a slide as a flat list of shapes; the writer
//! serializes it to a `<p:sld>` part. The helper constructors cover the
//! shape vocabulary the edit plans need: plain text boxes, rounded
//! rectangles with a single styled line, multi-line text blocks, stat
//! boxes and full-width banners.

pub mod color;
mod xml;

pub use color::Rgb;

/// EMUs per point, used for line widths.
pub const EMU_PER_PT: i64 = 12700;

/// Position and extent of a shape in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Frame {
    pub const fn new(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self { x, y, w, h }
    }
}

/// Paragraph alignment (`algn` on `a:pPr`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

/// Preset geometry of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rect,
    RoundRect,
}

impl Geometry {
    pub(crate) fn preset(&self) -> &'static str {
        match self {
            Geometry::Rect => "rect",
            Geometry::RoundRect => "roundRect",
        }
    }
}

/// Shape fill. `Inherit` emits nothing and leaves the theme in charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    #[default]
    Inherit,
    None,
    Solid(Rgb),
}

/// Shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Line {
    #[default]
    Inherit,
    None,
    Solid { color: Rgb, width_pt: u32 },
}

/// One paragraph holding a single styled run.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphSpec {
    pub text: String,
    pub size_pt: u32,
    pub bold: bool,
    pub color: Rgb,
    pub font: String,
    pub align: Align,
    pub space_before_pt: Option<u32>,
    pub space_after_pt: Option<u32>,
}

impl ParagraphSpec {
    pub fn new(text: &str, size_pt: u32, bold: bool, color: Rgb) -> Self {
        Self {
            text: text.to_string(),
            size_pt,
            bold,
            color,
            font: "Arial".to_string(),
            align: Align::Left,
            space_before_pt: None,
            space_after_pt: None,
        }
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = font.to_string();
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn space_before(mut self, pt: u32) -> Self {
        self.space_before_pt = Some(pt);
        self
    }

    pub fn space_after(mut self, pt: u32) -> Self {
        self.space_after_pt = Some(pt);
        self
    }
}

/// One shape on a synthesized slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    pub name: String,
    pub geometry: Geometry,
    /// Marks the shape as a text box (`txBox="1"`).
    pub text_box: bool,
    pub frame: Frame,
    pub fill: Fill,
    pub line: Line,
    pub paragraphs: Vec<ParagraphSpec>,
}

/// A slide to synthesize and append to the deck.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideSpec {
    pub shapes: Vec<ShapeSpec>,
}

impl SlideSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: ShapeSpec) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Serialize to a complete `<p:sld>` part.
    pub fn to_xml(&self) -> String {
        xml::slide_xml(self)
    }
}

/// A simple text box with one styled line.
pub fn text_box(
    frame: Frame,
    text: &str,
    size_pt: u32,
    bold: bool,
    color: Rgb,
    align: Align,
    font: &str,
) -> ShapeSpec {
    ShapeSpec {
        name: "Text Box".to_string(),
        geometry: Geometry::Rect,
        text_box: true,
        frame,
        fill: Fill::Inherit,
        line: Line::Inherit,
        paragraphs: vec![
            ParagraphSpec::new(text, size_pt, bold, color)
                .font(font)
                .align(align),
        ],
    }
}

/// A rounded rectangle carrying a single styled line of text.
#[allow(clippy::too_many_arguments)]
pub fn shape_with_text(
    frame: Frame,
    text: &str,
    size_pt: u32,
    bold: bool,
    text_color: Rgb,
    fill: Option<Rgb>,
    align: Align,
    font: &str,
) -> ShapeSpec {
    ShapeSpec {
        name: "Rounded Rectangle".to_string(),
        geometry: Geometry::RoundRect,
        text_box: false,
        frame,
        fill: fill.map_or(Fill::None, Fill::Solid),
        line: Line::None,
        paragraphs: vec![
            ParagraphSpec::new(text, size_pt, bold, text_color)
                .font(font)
                .align(align),
        ],
    }
}

/// A rounded rectangle with several formatted lines.
///
/// `lines` entries are `(text, size_pt, bold, color)`, each becoming a
/// paragraph with 4pt trailing spacing.
pub fn multi_text(frame: Frame, lines: &[(&str, u32, bool, Rgb)], fill: Option<Rgb>) -> ShapeSpec {
    ShapeSpec {
        name: "Text Block".to_string(),
        geometry: Geometry::RoundRect,
        text_box: false,
        frame,
        fill: fill.map_or(Fill::None, Fill::Solid),
        line: Line::None,
        paragraphs: lines
            .iter()
            .map(|&(text, size, bold, color)| {
                ParagraphSpec::new(text, size, bold, color).space_after(4)
            })
            .collect(),
    }
}

/// A stat box: big number, label, source line.
///
/// Newlines in `label` split it into stacked paragraphs.
pub fn stat_box(
    frame: Frame,
    number: &str,
    label: &str,
    source: &str,
    num_color: Rgb,
    bg_color: Option<Rgb>,
) -> ShapeSpec {
    const LABEL_COLOR: Rgb = Rgb::new(0x2C, 0x3E, 0x50);
    const SOURCE_COLOR: Rgb = Rgb::new(0x66, 0x66, 0x66);

    let mut paragraphs = vec![
        ParagraphSpec::new(number, 22, true, num_color)
            .font("Arial Black")
            .align(Align::Center),
    ];
    for (i, line) in label.split('\n').enumerate() {
        let mut p = ParagraphSpec::new(line, 11, true, LABEL_COLOR).align(Align::Center);
        if i == 0 {
            p = p.space_before(4);
        }
        paragraphs.push(p);
    }
    paragraphs.push(
        ParagraphSpec::new(source, 7, false, SOURCE_COLOR)
            .align(Align::Center)
            .space_before(2),
    );

    ShapeSpec {
        name: "Stat Box".to_string(),
        geometry: Geometry::RoundRect,
        text_box: false,
        frame,
        fill: Fill::Solid(bg_color.unwrap_or(Rgb::new(0xF5, 0xF5, 0xF5))),
        line: Line::Solid {
            color: Rgb::new(0xE0, 0xE0, 0xE0),
            width_pt: 1,
        },
        paragraphs,
    }
}

/// A full-width banner rectangle with centered bold text.
pub fn banner(top: i64, slide_w: i64, text: &str, size_pt: u32, color: Rgb, bg: Rgb) -> ShapeSpec {
    ShapeSpec {
        name: "Banner".to_string(),
        geometry: Geometry::Rect,
        text_box: false,
        frame: Frame::new(0, top, slide_w, 457_200),
        fill: Fill::Solid(bg),
        line: Line::None,
        paragraphs: vec![
            ParagraphSpec::new(text, size_pt, true, color).align(Align::Center),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_box_splits_multiline_label() {
        let shape = stat_box(
            Frame::new(0, 0, 100, 100),
            "208 Md€",
            "Marche du batiment\nFrance 2024",
            "Source : FFB 2024",
            Rgb::new(0xFF, 0x57, 0x22),
            None,
        );
        // number + two label lines + source
        assert_eq!(shape.paragraphs.len(), 4);
        assert_eq!(shape.paragraphs[1].text, "Marche du batiment");
        assert_eq!(shape.paragraphs[2].text, "France 2024");
        assert!(matches!(shape.line, Line::Solid { width_pt: 1, .. }));
    }

    #[test]
    fn test_banner_spans_full_width() {
        let shape = banner(
            4_023_360,
            9_144_000,
            "insight",
            13,
            Rgb::new(0xFF, 0xC1, 0x07),
            Rgb::new(0x1A, 0x1A, 0x2E),
        );
        assert_eq!(shape.frame.x, 0);
        assert_eq!(shape.frame.w, 9_144_000);
        assert_eq!(shape.geometry, Geometry::Rect);
    }

    #[test]
    fn test_text_box_inherits_fill() {
        let shape = text_box(
            Frame::new(1, 2, 3, 4),
            "title",
            36,
            true,
            Rgb::new(0x2C, 0x3E, 0x50),
            Align::Center,
            "Arial Black",
        );
        assert!(shape.text_box);
        assert_eq!(shape.fill, Fill::Inherit);
        assert_eq!(shape.paragraphs[0].font, "Arial Black");
    }
}
