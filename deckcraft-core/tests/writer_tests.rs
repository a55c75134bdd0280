use deckcraft_core::reader::read_deck;
use deckcraft_core::slides::{text_box, Align, Frame, Rgb, SlideSpec};
use deckcraft_core::writer::{apply_edits, DeckEdits, RunRewrite};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

// Helper to create a minimal valid PPTX file for testing.
// Each entry in `slides` is the list of text runs for one slide; the
// first slide also carries a one-cell table so table text is covered.
fn create_mock_pptx(path: &Path, slides: &[&[&str]], table_text: Option<&str>) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    // 1. [Content_Types].xml
    zip.start_file("[Content_Types].xml", options)?;
    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
"#,
    );
    for (i, _) in slides.iter().enumerate() {
        content_types.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            i + 1
        ));
    }
    content_types.push_str("</Types>");
    zip.write_all(content_types.as_bytes())?;

    // 2. _rels/.rels
    zip.start_file("_rels/.rels", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#.as_bytes())?;

    // 3. ppt/presentation.xml
    zip.start_file("ppt/presentation.xml", options)?;
    let mut presentation_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:sldIdLst>
"#,
    );
    for (i, _) in slides.iter().enumerate() {
        presentation_xml.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + i,
            i + 2
        ));
    }
    presentation_xml
        .push_str(r#"</p:sldIdLst><p:sldSz cx="9144000" cy="5143500"/></p:presentation>"#);
    zip.write_all(presentation_xml.as_bytes())?;

    // 4. ppt/_rels/presentation.xml.rels
    zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
    let mut rels_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for (i, _) in slides.iter().enumerate() {
        rels_xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i + 2, i + 1
        ));
    }
    rels_xml.push_str("</Relationships>");
    zip.write_all(rels_xml.as_bytes())?;

    // 5. slide parts
    for (i, runs) in slides.iter().enumerate() {
        zip.start_file(format!("ppt/slides/slide{}.xml", i + 1), options)?;
        let mut slide_xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:cSld><p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>
"#,
        );
        for (j, run) in runs.iter().enumerate() {
            slide_xml.push_str(&format!(
                r#"<p:sp><p:nvSpPr><p:cNvPr id="{}" name="TextBox {}"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p><a:r><a:rPr lang="fr-FR"/><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp>"#,
                j + 2,
                j + 1,
                run
            ));
        }
        if i == 0 {
            if let Some(text) = table_text {
                slide_xml.push_str(&format!(
                    r#"<p:graphicFrame><p:nvGraphicFramePr><p:cNvPr id="90" name="Table 1"/><p:cNvGraphicFramePr/><p:nvPr/></p:nvGraphicFramePr><a:graphic><a:graphicData><a:tbl><a:tr><a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:rPr lang="fr-FR"/><a:t>{}</a:t></a:r></a:p></a:txBody></a:tc></a:tr></a:tbl></a:graphicData></a:graphic></p:graphicFrame>"#,
                    text
                ));
            }
        }
        slide_xml.push_str("</p:spTree></p:cSld></p:sld>");
        zip.write_all(slide_xml.as_bytes())?;

        zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", i + 1), options)?;
        zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#.as_bytes())?;
    }

    // 6. dummy layout part
    zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld></p:sldLayout>"#.as_bytes())?;

    zip.finish()?;
    Ok(())
}

fn read_entry(path: &Path, name: &str) -> anyhow::Result<String> {
    let file = File::open(path)?;
    let mut zip = zip::ZipArchive::new(file)?;
    let mut entry = zip.by_name(name)?;
    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(content)
}

#[test]
fn test_global_replacements_cover_shapes_and_tables() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.pptx");
    let output_path = dir.path().join("output.pptx");

    create_mock_pptx(
        &input_path,
        &[&["FIXIT - LE PROBLEME"], &["Contact : www.fixit.fr"]],
        Some("Equipe Fixit"),
    )?;

    let edits = DeckEdits {
        replacements: vec![
            ("FIXIT".to_string(), "VITFIX".to_string()),
            ("Fixit".to_string(), "Vitfix".to_string()),
            ("fixit".to_string(), "vitfix".to_string()),
        ],
        ..Default::default()
    };

    let summary = apply_edits(&input_path, &output_path, &edits)?;
    assert_eq!(summary.runs_replaced, 3);

    let deck = read_deck(&output_path)?;
    let text = deck.all_text();
    assert!(text.contains("VITFIX - LE PROBLEME"));
    assert!(text.contains("www.vitfix.fr"));
    assert!(text.contains("Equipe Vitfix"), "table cell text is edited too");
    assert!(!text.to_lowercase().contains("fixit"));

    Ok(())
}

#[test]
fn test_targeted_rewrite_hits_one_slide_only() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.pptx");
    let output_path = dir.path().join("output.pptx");

    create_mock_pptx(
        &input_path,
        &[
            &["750K unités au total"],
            &["750K unités au total", "Autre texte"],
        ],
        None,
    )?;

    let mut edits = DeckEdits::default();
    edits
        .run_rewrites
        .insert(1, vec![RunRewrite::new("750K unités", "873K immeubles")]);

    let summary = apply_edits(&input_path, &output_path, &edits)?;
    assert_eq!(summary.runs_rewritten, 1);

    let deck = read_deck(&output_path)?;
    // Matching runs are replaced whole, and only on the targeted slide
    assert_eq!(deck.slides[0].text(), "750K unités au total");
    assert_eq!(deck.slides[1].text(), "873K immeubles\nAutre texte");

    Ok(())
}

#[test]
fn test_appended_slides_are_wired_into_the_package() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.pptx");
    let output_path = dir.path().join("output.pptx");

    create_mock_pptx(&input_path, &[&["Slide un"], &["Slide deux"]], None)?;

    let mut slide = SlideSpec::new();
    slide.push(text_box(
        Frame::new(457_200, 274_320, 8_229_600, 548_640),
        "LE MARCHE EN CHIFFRES",
        36,
        true,
        Rgb::new(0x2C, 0x3E, 0x50),
        Align::Center,
        "Arial Black",
    ));

    let edits = DeckEdits {
        new_slides: vec![slide],
        ..Default::default()
    };

    let summary = apply_edits(&input_path, &output_path, &edits)?;
    assert_eq!(summary.slides_added, 1);

    // New part plus its relationships exist
    let slide_xml = read_entry(&output_path, "ppt/slides/slide3.xml")?;
    assert!(slide_xml.contains("LE MARCHE EN CHIFFRES"));
    let slide_rels = read_entry(&output_path, "ppt/slides/_rels/slide3.xml.rels")?;
    assert!(slide_rels.contains("slideLayout1.xml"));

    // Content type override and presentation wiring are in place
    let content_types = read_entry(&output_path, "[Content_Types].xml")?;
    assert!(content_types.contains(r#"PartName="/ppt/slides/slide3.xml""#));
    let presentation = read_entry(&output_path, "ppt/presentation.xml")?;
    assert!(presentation.contains(r#"id="258""#));

    let deck = read_deck(&output_path)?;
    assert_eq!(deck.slide_count(), 3);
    assert!(deck.slides[2].text().contains("LE MARCHE EN CHIFFRES"));

    Ok(())
}

#[test]
fn test_reorder_rewrites_slide_id_list() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.pptx");
    let output_path = dir.path().join("output.pptx");

    create_mock_pptx(&input_path, &[&["Premier"], &["Deuxieme"], &["Troisieme"]], None)?;

    let edits = DeckEdits {
        slide_order: Some(vec![2, 0, 1]),
        ..Default::default()
    };

    let summary = apply_edits(&input_path, &output_path, &edits)?;
    assert!(summary.reordered);

    let deck = read_deck(&output_path)?;
    assert_eq!(deck.slides[0].text(), "Troisieme");
    assert_eq!(deck.slides[1].text(), "Premier");
    assert_eq!(deck.slides[2].text(), "Deuxieme");

    Ok(())
}

#[test]
fn test_invalid_permutation_is_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.pptx");
    let output_path = dir.path().join("output.pptx");

    create_mock_pptx(&input_path, &[&["Premier"], &["Deuxieme"]], None)?;

    // Duplicate index
    let edits = DeckEdits {
        slide_order: Some(vec![0, 0]),
        ..Default::default()
    };
    assert!(apply_edits(&input_path, &output_path, &edits).is_err());

    // Wrong length
    let edits = DeckEdits {
        slide_order: Some(vec![0]),
        ..Default::default()
    };
    assert!(apply_edits(&input_path, &output_path, &edits).is_err());

    // Rewrite index past the end of the deck
    let mut edits = DeckEdits::default();
    edits
        .run_rewrites
        .insert(5, vec![RunRewrite::new("a", "b")]);
    assert!(apply_edits(&input_path, &output_path, &edits).is_err());

    Ok(())
}

#[test]
fn test_combined_edit_pass() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("input.pptx");
    let output_path = dir.path().join("output.pptx");

    create_mock_pptx(
        &input_path,
        &[&["FIXIT presente"], &["Pas de traçabilité"]],
        None,
    )?;

    let mut slide = SlideSpec::new();
    slide.push(text_box(
        Frame::new(457_200, 274_320, 8_229_600, 548_640),
        "OPPORTUNITE INVESTISSEURS",
        36,
        true,
        Rgb::new(0xFF, 0xC1, 0x07),
        Align::Center,
        "Arial Black",
    ));

    let mut edits = DeckEdits {
        replacements: vec![("FIXIT".to_string(), "VITFIX".to_string())],
        new_slides: vec![slide],
        slide_order: Some(vec![1, 2, 0]),
        ..Default::default()
    };
    edits.run_rewrites.insert(
        1,
        vec![RunRewrite::new(
            "Pas de traçabilité",
            "2 millions de degats des eaux/an",
        )],
    );

    let summary = apply_edits(&input_path, &output_path, &edits)?;
    assert_eq!(summary.runs_replaced, 1);
    assert_eq!(summary.runs_rewritten, 1);
    assert_eq!(summary.slides_added, 1);
    assert!(summary.reordered);

    let deck = read_deck(&output_path)?;
    assert_eq!(deck.slide_count(), 3);
    assert_eq!(deck.slides[0].text(), "2 millions de degats des eaux/an");
    assert!(deck.slides[1].text().contains("OPPORTUNITE INVESTISSEURS"));
    assert_eq!(deck.slides[2].text(), "VITFIX presente");

    Ok(())
}
