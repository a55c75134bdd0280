//! Serialization of slide specs to PresentationML markup

use super::{Align, Fill, Line, ParagraphSpec, ShapeSpec, SlideSpec, EMU_PER_PT};
use std::fmt::Write as FmtWrite;

/// Escape XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Generate the complete `<p:sld>` part for a synthesized slide.
pub(crate) fn slide_xml(slide: &SlideSpec) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#);
    xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
    xml.push_str(r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

    xml.push_str("<p:cSld><p:spTree>");

    // Required group shape properties; id 1 is reserved for the group.
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr><a:xfrm>");
    xml.push_str(r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#);
    xml.push_str("</a:xfrm></p:grpSpPr>");

    for (idx, shape) in slide.shapes.iter().enumerate() {
        shape_xml(&mut xml, shape, idx as u32 + 2);
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sld>");

    xml
}

fn shape_xml(xml: &mut String, shape: &ShapeSpec, id: u32) {
    xml.push_str("<p:sp>");

    xml.push_str("<p:nvSpPr>");
    let _ = write!(
        xml,
        r#"<p:cNvPr id="{}" name="{} {}"/>"#,
        id,
        escape_xml(&shape.name),
        id
    );
    if shape.text_box {
        xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    } else {
        xml.push_str("<p:cNvSpPr/>");
    }
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    let _ = write!(xml, r#"<a:off x="{}" y="{}"/>"#, shape.frame.x, shape.frame.y);
    let _ = write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, shape.frame.w, shape.frame.h);
    xml.push_str("</a:xfrm>");
    let _ = write!(
        xml,
        r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
        shape.geometry.preset()
    );

    match shape.fill {
        Fill::Inherit => {}
        Fill::None => xml.push_str("<a:noFill/>"),
        Fill::Solid(color) => {
            let _ = write!(
                xml,
                r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                color.hex()
            );
        }
    }

    match shape.line {
        Line::Inherit => {}
        Line::None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
        Line::Solid { color, width_pt } => {
            let _ = write!(
                xml,
                r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
                width_pt as i64 * EMU_PER_PT,
                color.hex()
            );
        }
    }

    // Empty effect list suppresses the inherited preset shadow.
    xml.push_str("<a:effectLst/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"/>"#);
    xml.push_str("<a:lstStyle/>");
    if shape.paragraphs.is_empty() {
        // A text body must carry at least one paragraph.
        xml.push_str("<a:p><a:endParaRPr lang=\"fr-FR\"/></a:p>");
    }
    for paragraph in &shape.paragraphs {
        paragraph_xml(xml, paragraph);
    }
    xml.push_str("</p:txBody>");

    xml.push_str("</p:sp>");
}

fn paragraph_xml(xml: &mut String, p: &ParagraphSpec) {
    xml.push_str("<a:p>");

    let needs_ppr =
        p.align == Align::Center || p.space_before_pt.is_some() || p.space_after_pt.is_some();
    if needs_ppr {
        xml.push_str("<a:pPr");
        if p.align == Align::Center {
            xml.push_str(r#" algn="ctr""#);
        }
        xml.push('>');
        if let Some(pt) = p.space_before_pt {
            let _ = write!(xml, r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#, pt * 100);
        }
        if let Some(pt) = p.space_after_pt {
            let _ = write!(xml, r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#, pt * 100);
        }
        xml.push_str("</a:pPr>");
    }

    xml.push_str("<a:r>");
    let _ = write!(xml, r#"<a:rPr lang="fr-FR" sz="{}" dirty="0""#, p.size_pt * 100);
    if p.bold {
        xml.push_str(r#" b="1""#);
    }
    xml.push('>');
    let _ = write!(
        xml,
        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
        p.color.hex()
    );
    let _ = write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(&p.font));
    xml.push_str("</a:rPr>");
    let _ = write!(xml, "<a:t>{}</a:t>", escape_xml(&p.text));
    xml.push_str("</a:r>");

    xml.push_str("</a:p>");
}
