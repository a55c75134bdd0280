use deckcraft_core::writer::apply_edits;
use deckcraft_core::{plan, Checker, Severity};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

// Build a deck shaped like the original investor presentation: fourteen
// slides, old brand everywhere, outdated claims on slides 2, 4 and 5.
fn create_legacy_deck(path: &Path) -> anyhow::Result<()> {
    let slides: Vec<Vec<&str>> = vec![
        vec!["FIXIT", "Le Doctolib de l'artisanat"],
        vec![
            "LE PROBLEME",
            "Trouver un artisan fiable = 3h de recherche",
            "Délai d'intervention : 5-10 jours",
            "Prix opaques, devis non comparables",
            "Risque d'arnaque, travaux mal faits",
            "Temps perdu coordination : 15h/semaine",
            "Litiges interventions : 40% des cas",
            "Facturation éparpillée",
            "Pas de traçabilité",
            "Clients/Locataires insatisfaits",
            "COÛT CACHÉ : 5 000 euros par an",
        ],
        vec!["LA SOLUTION FIXIT"],
        vec!["NOS SEGMENTS", "750K unités", "8M+ UNITÉS"],
        vec!["COPROPRIETES", "500+ artisans vérifiés"],
        vec!["POURQUOI FIXIT"],
        vec!["AVANT FIXIT"],
        vec!["APRÈS FIXIT"],
        vec!["BUSINESS MODEL"],
        vec!["CONCURRENCE"],
        vec!["ROADMAP"],
        vec!["EQUIPE"],
        vec!["TRACTION"],
        vec!["CONTACT", "partenariats@fixit.fr", "www.fixit.fr"],
    ];

    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

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
    for i in 0..slides.len() {
        content_types.push_str(&format!(
            r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
            i + 1
        ));
    }
    content_types.push_str("</Types>");
    zip.write_all(content_types.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#.as_bytes())?;

    zip.start_file("ppt/presentation.xml", options)?;
    let mut presentation_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
<p:sldIdLst>
"#,
    );
    for i in 0..slides.len() {
        presentation_xml.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + i,
            i + 2
        ));
    }
    presentation_xml
        .push_str(r#"</p:sldIdLst><p:sldSz cx="9144000" cy="5143500"/></p:presentation>"#);
    zip.write_all(presentation_xml.as_bytes())?;

    zip.start_file("ppt/_rels/presentation.xml.rels", options)?;
    let mut rels_xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
"#,
    );
    for i in 0..slides.len() {
        rels_xml.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            i + 2, i + 1
        ));
    }
    rels_xml.push_str("</Relationships>");
    zip.write_all(rels_xml.as_bytes())?;

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
                run.replace('&', "&amp;").replace('<', "&lt;")
            ));
        }
        slide_xml.push_str("</p:spTree></p:cSld></p:sld>");
        zip.write_all(slide_xml.as_bytes())?;

        zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", i + 1), options)?;
        zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#.as_bytes())?;
    }

    zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;
    zip.write_all(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main"><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/></p:spTree></p:cSld></p:sldLayout>"#.as_bytes())?;

    zip.finish()?;
    Ok(())
}

#[test]
fn test_legacy_deck_fails_verification() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("legacy.pptx");
    create_legacy_deck(&input_path)?;

    let checker = Checker::new();
    let findings = checker.check_file(&input_path)?;

    // Old brand on many slides, wrong slide count, stale claims
    assert!(findings.iter().any(|f| f.check_id == "BR001"));
    assert!(findings.iter().any(|f| f.check_id == "ST001"));
    assert!(findings.iter().any(|f| f.check_id == "CT001"));
    assert!(findings.iter().any(|f| f.severity == Severity::Error));

    Ok(())
}

#[test]
fn test_refreshed_deck_passes_verification() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("legacy.pptx");
    let output_path = dir.path().join("refreshed.pptx");
    create_legacy_deck(&input_path)?;

    let edits = plan::investor_refresh();
    let summary = apply_edits(&input_path, &output_path, &edits)?;
    assert_eq!(summary.slides_added, plan::NEW_SLIDE_COUNT);
    assert!(summary.reordered);
    assert!(summary.runs_replaced > 0);
    assert_eq!(summary.runs_rewritten, 13);

    let checker = Checker::new();
    let findings = checker.check_file(&output_path)?;
    assert!(
        findings.is_empty(),
        "expected a clean deck, got: {:?}",
        findings
    );

    Ok(())
}
