//! Built-in investor-deck edit plan
//!
//! The concrete editing job this workspace ships: rebrand Fixit to
//! Vitfix, swap the marketing claims of three slides for verified
//! market statistics, append five data slides and reorder the deck.
//! Everything in here is content: literal French copy, palette and
//! EMU geometry.

use crate::slides::{
    banner, multi_text, shape_with_text, stat_box, text_box, Align, Fill, Frame, Geometry, Line,
    Rgb, ShapeSpec, SlideSpec,
};
use crate::writer::{DeckEdits, RunRewrite};

// Vitfix palette
pub const DARK_BLUE: Rgb = Rgb::new(0x1A, 0x1A, 0x2E);
pub const ORANGE: Rgb = Rgb::new(0xFF, 0xC1, 0x07);
pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
pub const DARK_TEXT: Rgb = Rgb::new(0x2C, 0x3E, 0x50);
pub const GRAY: Rgb = Rgb::new(0x66, 0x66, 0x66);
pub const GREEN: Rgb = Rgb::new(0x4C, 0xAF, 0x50);
pub const RED: Rgb = Rgb::new(0xD3, 0x2F, 0x2F);
pub const LIGHT_GRAY: Rgb = Rgb::new(0xF8, 0xF9, 0xFA);
pub const GOLD: Rgb = Rgb::new(0xFF, 0xD5, 0x4F);
pub const DEEP_ORANGE: Rgb = Rgb::new(0xFF, 0x57, 0x22);
const DARK_GREEN: Rgb = Rgb::new(0x1B, 0x5E, 0x20);
const BLUE: Rgb = Rgb::new(0x15, 0x65, 0xC0);
const PANEL_BLUE: Rgb = Rgb::new(0x2A, 0x2A, 0x4E);

// Dimensions (10" x 5.625" = 16:9), in EMUs
pub const SLIDE_W: i64 = 9_144_000;
pub const SLIDE_H: i64 = 5_143_500;
pub const MARGIN: i64 = 457_200; // 0.5 inch
pub const CONTENT_W: i64 = 8_229_600;

/// Slide count of the input deck the final order assumes
pub const EXPECTED_INPUT_SLIDES: usize = 14;
/// Number of slides the plan appends
pub const NEW_SLIDE_COUNT: usize = 5;

/// The complete edit pass: rebrand, rewrite, synthesize, reorder
pub fn investor_refresh() -> DeckEdits {
    let mut edits = DeckEdits {
        replacements: brand_replacements(),
        ..Default::default()
    };
    edits.run_rewrites.insert(1, problem_rewrites());
    edits.run_rewrites.insert(3, segments_rewrites());
    edits.run_rewrites.insert(4, copro_rewrites());
    edits.new_slides = vec![
        market_slide(),
        crisis_slide(),
        digital_demand_slide(),
        key_figures_slide(),
        opportunity_slide(),
    ];
    edits.slide_order = Some(final_order());
    edits
}

/// Ordered brand replacement dictionary (Fixit becomes Vitfix)
pub fn brand_replacements() -> Vec<(String, String)> {
    [
        ("FIXIT", "VITFIX"),
        ("Fixit", "Vitfix"),
        ("fixit", "vitfix"),
        ("SOLUTION FIXIT", "SOLUTION VITFIX"),
        ("LA SOLUTION FIXIT", "LA SOLUTION VITFIX"),
        ("POURQUOI FIXIT", "POURQUOI VITFIX"),
        ("AVANT FIXIT", "AVANT VITFIX"),
        ("APRÈS FIXIT", "APRÈS VITFIX"),
        ("partenariats@fixit.fr", "partenariats@vitfix.fr"),
        ("www.fixit.fr", "www.vitfix.fr"),
    ]
    .iter()
    .map(|&(old, new)| (old.to_string(), new.to_string()))
    .collect()
}

/// Deck order after the five appends: three new slides follow the
/// problem slide, two sit before the closing call to action
pub fn final_order() -> Vec<usize> {
    vec![0, 1, 14, 15, 16, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 17, 18, 13]
}

/// Verified statistics replacing the claims of the problem slide (slide 2)
fn problem_rewrites() -> Vec<RunRewrite> {
    [
        (
            "Trouver un artisan fiable = 3h de recherche",
            "\u{2022} 39% des particuliers ne trouvent pas d'artisan fiable (OpinionWay 2025)",
        ),
        (
            "Délai d'intervention : 5-10 jours",
            "\u{2022} 25% des Français craignent les arnaques (OpinionWay 2025)",
        ),
        (
            "Prix opaques, devis non comparables",
            "\u{2022} 33% redoutent les malfacons (OpinionWay 2025)",
        ),
        (
            "Risque d'arnaque, travaux mal faits",
            "\u{2022} Satisfaction artisans : seulement 55% en Ile-de-France (BVA)",
        ),
        (
            "Temps perdu coordination : 15h/semaine",
            "\u{2022} 71,5% des entreprises peinent a recruter (France Travail 2024)",
        ),
        (
            "Litiges interventions : 40% des cas",
            "\u{2022} 485 000 postes vacants dans le BTP (FFB 2024)",
        ),
        (
            "Facturation éparpillée",
            "\u{2022} 30% des artisans sous-digitalises (PlanRadar 2024)",
        ),
        (
            "Pas de traçabilité",
            "\u{2022} 2 millions de degats des eaux/an (France Assureurs 2024)",
        ),
        (
            "Clients/Locataires insatisfaits",
            "\u{2022} 4 160 sinistres/jour = besoin artisans constant",
        ),
        (
            "COÛT CACHÉ : 5 000",
            "\u{1F525} COUT TOTAL : 2,4 Md€/an d'indemnisations degats des eaux seuls (France Assureurs 2024)",
        ),
    ]
    .iter()
    .map(|&(contains, replace_with)| RunRewrite::new(contains, replace_with))
    .collect()
}

/// Verified figures for the segments slide (slide 4)
fn segments_rewrites() -> Vec<RunRewrite> {
    vec![
        RunRewrite::new("750K unités", "873K immeubles"),
        RunRewrite::new("8M+ UNITÉS", "13M+ DE LOGEMENTS A ADRESSER"),
    ]
}

/// Updated claim for the copropriete slide (slide 5)
fn copro_rewrites() -> Vec<RunRewrite> {
    vec![RunRewrite::new(
        "500+ artisans vérifiés",
        "\u{2705} Reseau d'artisans verifies (SIRET + assurance)",
    )]
}

fn title(slide: &mut SlideSpec, text: &str, color: Rgb) {
    slide.push(text_box(
        Frame::new(MARGIN, 274_320, CONTENT_W, 548_640),
        text,
        36,
        true,
        color,
        Align::Center,
        "Arial Black",
    ));
}

fn subtitle(slide: &mut SlideSpec, text: &str, size_pt: u32, color: Rgb) {
    slide.push(text_box(
        Frame::new(MARGIN, 822_960, CONTENT_W, 274_320),
        text,
        size_pt,
        false,
        color,
        Align::Center,
        "Arial",
    ));
}

/// "LE MARCHE EN CHIFFRES": verified market data in a 2x4 stat grid
fn market_slide() -> SlideSpec {
    let mut slide = SlideSpec::new();

    title(&mut slide, "\u{1F4CA} LE MARCHE EN CHIFFRES", DARK_TEXT);
    subtitle(
        &mut slide,
        "Donnees verifiees — Sources : FFB, CAPEB, France Assureurs, France Travail, ANAH (2024)",
        10,
        GRAY,
    );

    let box_w = 2_011_680;
    let box_h = 1_280_160;
    let gap = 91_440;
    let col = |i: i64| MARGIN + (box_w + gap) * i;

    let y1 = 1_188_720;
    slide.push(stat_box(
        Frame::new(col(0), y1, box_w, box_h),
        "208 Md€",
        "Marche du batiment\nFrance 2024",
        "Source : FFB 2024",
        DEEP_ORANGE,
        None,
    ));
    slide.push(stat_box(
        Frame::new(col(1), y1, box_w, box_h),
        "118 Md€",
        "Maintenance &\nRenovation",
        "Source : FFB 2024 (57% du CA)",
        DEEP_ORANGE,
        None,
    ));
    slide.push(stat_box(
        Frame::new(col(2), y1, box_w, box_h),
        "620 000",
        "Entreprises artisanales\ndu batiment",
        "Source : CAPEB 2024",
        DARK_GREEN,
        None,
    ));
    slide.push(stat_box(
        Frame::new(col(3), y1, box_w, box_h),
        "1,76M",
        "Actifs dans\nle batiment",
        "Source : FFB 2024",
        DARK_GREEN,
        None,
    ));

    let y2 = 2_560_320;
    slide.push(stat_box(
        Frame::new(col(0), y2, box_w, box_h),
        "485 000",
        "Postes vacants\ndans le BTP",
        "Source : FFB / France Travail 2024",
        RED,
        None,
    ));
    slide.push(stat_box(
        Frame::new(col(1), y2, box_w, box_h),
        "71,5%",
        "Entreprises en\ndifficulte de recrutement",
        "Source : France Travail BMO 2024",
        RED,
        None,
    ));
    slide.push(stat_box(
        Frame::new(col(2), y2, box_w, box_h),
        "873 000",
        "Coproprietes\nen France",
        "Source : ANIL / CoproFF 2023",
        BLUE,
        None,
    ));
    slide.push(stat_box(
        Frame::new(col(3), y2, box_w, box_h),
        "2M/an",
        "Sinistres degats\ndes eaux",
        "Source : France Assureurs 2024",
        BLUE,
        None,
    ));

    slide.push(banner(
        4_023_360,
        SLIDE_W,
        "\u{1F4A1} 39% des particuliers ne trouvent pas d'artisan fiable (OpinionWay 2025) — 92% cherchent en ligne (Google)",
        13,
        ORANGE,
        DARK_BLUE,
    ));

    slide.push(text_box(
        Frame::new(MARGIN, 4_572_000, CONTENT_W, 365_760),
        "Sources : FFB (ffbatiment.fr) | CAPEB (capeb.fr) | France Travail BMO 2024 | France Assureurs 2024 | ANIL/ANAH | OpinionWay/illiCO 2025",
        8,
        false,
        GRAY,
        Align::Center,
        "Arial",
    ));

    slide
}

/// "LA CRISE DE L'ARTISANAT": shortage figures next to the Vitfix answer
fn crisis_slide() -> SlideSpec {
    let mut slide = SlideSpec::new();

    title(&mut slide, "\u{26A0}\u{FE0F} LA CRISE DE L'ARTISANAT", DARK_TEXT);
    subtitle(
        &mut slide,
        "Le secteur du batiment traverse une crise structurelle majeure — Vitfix est la reponse",
        12,
        GRAY,
    );

    let left_x = MARGIN;
    let right_x = 4_754_880;
    let col_w = 3_931_920;

    slide.push(shape_with_text(
        Frame::new(left_x, 1_188_720, col_w, 365_760),
        "\u{274C} LE CONSTAT ALARMANT",
        15,
        true,
        WHITE,
        Some(RED),
        Align::Center,
        "Arial",
    ));

    let crisis_lines: &[(&str, u32, bool, Rgb)] = &[
        ("485 000 postes vacants dans le BTP", 13, true, RED),
        ("Source : FFB / France Travail 2024", 8, false, GRAY),
        ("", 4, false, DARK_TEXT),
        ("71,5% des entreprises en difficulte de recrutement", 12, true, DARK_TEXT),
        ("Source : France Travail, Enquete BMO 2024", 8, false, GRAY),
        ("", 4, false, DARK_TEXT),
        ("200 000 professionnels supplementaires necessaires", 12, true, DARK_TEXT),
        ("d'ici 2030 pour la renovation energetique", 11, false, DARK_TEXT),
        ("Source : France Strategie", 8, false, GRAY),
        ("", 4, false, DARK_TEXT),
        ("39% des particuliers ne trouvent pas d'artisan", 12, true, DARK_TEXT),
        ("Source : OpinionWay / illiCO travaux, Fev. 2025", 8, false, GRAY),
        ("", 4, false, DARK_TEXT),
        ("Seulement 64% de satisfaction client", 12, true, DARK_TEXT),
        ("55% en Ile-de-France | Source : IFOP / BVA", 8, false, GRAY),
    ];
    slide.push(multi_text(
        Frame::new(left_x, 1_600_200, col_w, 2_926_080),
        crisis_lines,
        None,
    ));

    slide.push(shape_with_text(
        Frame::new(right_x, 1_188_720, col_w, 365_760),
        "\u{2705} LA REPONSE VITFIX",
        15,
        true,
        WHITE,
        Some(GREEN),
        Align::Center,
        "Arial",
    ));

    let solution_lines: &[(&str, u32, bool, Rgb)] = &[
        ("Connecter l'offre a la demande", 13, true, GREEN),
        ("En temps reel, par geolocalisation", 10, false, GRAY),
        ("", 4, false, DARK_TEXT),
        ("\u{2705} Calendriers artisans en temps reel", 12, false, DARK_TEXT),
        ("\u{2705} Reservation en 2 clics (comme Doctolib)", 12, false, DARK_TEXT),
        ("\u{2705} Artisans verifies (SIRET + assurance)", 12, false, DARK_TEXT),
        ("\u{2705} Avis clients certifies", 12, false, DARK_TEXT),
        ("\u{2705} 0€ commission pour les clients", 12, false, DARK_TEXT),
        ("\u{2705} App mobile native (iOS + Android)", 12, false, DARK_TEXT),
        ("\u{2705} Dashboard syndic centralise", 12, false, DARK_TEXT),
        ("\u{2705} IA comptable integree (Agent Lea)", 12, false, DARK_TEXT),
        ("", 4, false, DARK_TEXT),
        ("\u{1F680} Vitfix optimise chaque artisan existant", 12, true, GREEN),
        ("plutot que d'en creer de nouveaux", 11, false, DARK_TEXT),
    ];
    slide.push(multi_text(
        Frame::new(right_x, 1_600_200, col_w, 2_926_080),
        solution_lines,
        None,
    ));

    slide.push(banner(
        4_663_440,
        SLIDE_W,
        "\u{1F4A1} Chaque artisan connecte via Vitfix = + de clients servis, moins de temps perdu, plus de revenus",
        13,
        ORANGE,
        DARK_BLUE,
    ));

    slide
}

/// "LA DEMANDE DIGITALE EXPLOSE": Google search volumes and trends
fn digital_demand_slide() -> SlideSpec {
    let mut slide = SlideSpec::new();

    title(&mut slide, "\u{1F4C8} LA DEMANDE DIGITALE EXPLOSE", DARK_TEXT);
    subtitle(
        &mut slide,
        "Volumes de recherche Google reels (France) — Sources : Ahrefs, Google Trends 2021-2025",
        10,
        GRAY,
    );

    let left_x = MARGIN;
    let right_x = 4_754_880;
    let col_w = 4_114_800;

    slide.push(shape_with_text(
        Frame::new(left_x, 1_188_720, col_w, 365_760),
        "\u{1F50D} VOLUMES DE RECHERCHE MENSUELS (France)",
        14,
        true,
        WHITE,
        Some(BLUE),
        Align::Center,
        "Arial",
    ));

    let keyword_lines: &[(&str, u32, bool, Rgb)] = &[
        ("\u{1F527} serrurier : 53 000 rech/mois", 12, true, DEEP_ORANGE),
        ("\u{1F527} plombier : 35 000 rech/mois", 12, true, DEEP_ORANGE),
        ("\u{1F4A7} fuite d'eau : 33 000 rech/mois", 12, false, DARK_TEXT),
        ("\u{1F3E2} syndic copropriete : 25 000 rech/mois", 12, false, DARK_TEXT),
        ("\u{26A1} electricien : 25 000 rech/mois", 12, false, DARK_TEXT),
        ("\u{1F3D7} couvreur : 18 000 rech/mois", 12, false, DARK_TEXT),
        ("\u{1F333} paysagiste : 16 000 rech/mois", 12, false, DARK_TEXT),
        ("\u{1F50E} avis artisan : 12 000 rech/mois (+60%)", 12, false, GREEN),
        ("\u{1F4DD} devis artisan : 8 000 rech/mois", 12, false, DARK_TEXT),
        ("Source : Ahrefs (nov. 2024) via plaqueplastique.fr", 8, false, GRAY),
    ];
    slide.push(multi_text(
        Frame::new(left_x, 1_600_200, col_w, 2_743_200),
        keyword_lines,
        None,
    ));

    slide.push(shape_with_text(
        Frame::new(right_x, 1_188_720, col_w, 365_760),
        "\u{1F680} EXPLOSION DES RECHERCHES \"AUTOUR DE MOI\"",
        13,
        true,
        WHITE,
        Some(DEEP_ORANGE),
        Align::Center,
        "Arial",
    ));

    let trend_lines: &[(&str, u32, bool, Rgb)] = &[
        ("\u{1F4CD} \"plombier autour de moi\"", 13, true, DARK_TEXT),
        ("    2021: ~360 rech/an \u{2192} 2025: ~36 720/an", 11, false, DARK_TEXT),
        ("    \u{1F4C8} +5 000% en 4 ans", 12, true, GREEN),
        ("", 6, false, DARK_TEXT),
        ("\u{1F4CD} \"serrurier autour de moi\"", 13, true, DARK_TEXT),
        ("    Inexistant en 2021 \u{2192} 37 846/an en 2025", 11, false, DARK_TEXT),
        ("    \u{1F4C8} Nouvelle tendance explosive", 12, true, GREEN),
        ("", 6, false, DARK_TEXT),
        ("\u{1F4CD} \"electricien autour de moi\"", 13, true, DARK_TEXT),
        ("    0 en 2021 \u{2192} 36 000/an en 2025", 11, false, DARK_TEXT),
        ("    \u{1F4C8} Creation d'un nouveau marche", 12, true, GREEN),
    ];
    slide.push(multi_text(
        Frame::new(right_x, 1_600_200, col_w, 2_743_200),
        trend_lines,
        None,
    ));

    let stats_y = 4_389_120;
    let third_w = 2_697_480;
    let gap = 91_440;
    slide.push(stat_box(
        Frame::new(MARGIN, stats_y, third_w, 640_080),
        "4,1M+",
        "Recherches/an sur nos 53 mots-cles",
        "Google Trends + Ahrefs 2025",
        DEEP_ORANGE,
        Some(Rgb::new(0xFF, 0xF3, 0xE0)),
    ));
    slide.push(stat_box(
        Frame::new(MARGIN + third_w + gap, stats_y, third_w, 640_080),
        "92%",
        "Cherchent en ligne avant de choisir",
        "Source : Google / LearnThings",
        BLUE,
        Some(Rgb::new(0xE3, 0xF2, 0xFD)),
    ));
    slide.push(stat_box(
        Frame::new(MARGIN + (third_w + gap) * 2, stats_y, third_w, 640_080),
        "50-55€",
        "CPC \"serrurier Paris\" sur Google Ads",
        "Source : Google Ads",
        RED,
        Some(Rgb::new(0xFF, 0xEB, 0xEE)),
    ));

    slide
}

/// "CHIFFRES CLES": 3x3 grid of sourced figures
fn key_figures_slide() -> SlideSpec {
    let mut slide = SlideSpec::new();

    title(&mut slide, "\u{1F4CB} CHIFFRES CLES — TOUS VERIFIES", DARK_TEXT);
    subtitle(
        &mut slide,
        "Donnees de marche pour le secteur artisan/batiment en France — chaque chiffre est source",
        10,
        GRAY,
    );

    let box_w = 2_651_760;
    let box_h = 1_005_840;
    let gap = 91_440;

    let stats: &[(&str, &str, &str, Rgb)] = &[
        ("90%", "Considerent les avis en ligne\nessentiels pour choisir un artisan", "IFOP / Plus que PRO 2021", DEEP_ORANGE),
        ("43%", "Des artisans ne croient pas\nen l'impact du digital", "Batiweb / Etude sectorielle", BLUE),
        ("2,4 Md€", "Indemnisations degats des eaux\npar an en France (+134% en 20 ans)", "France Assureurs 2024", RED),
        ("4 160/jour", "Sinistres degats des eaux\nen France", "France Assureurs 2024", RED),
        ("13M", "Logements en copropriete\nen France", "ANIL 2023", BLUE),
        ("5 088", "Detenteurs carte S\n(syndics professionnels)", "CCI-France", DARK_TEXT),
        ("96,3%", "Part de marche Google\nen France (mobile)", "StatCounter / WebrankInfo", GREEN),
        ("78%", "Recherches locales mobiles\nmenent a un achat", "Google Data", GREEN),
        ("+45%/an", "Croissance recherches\nde proximite", "Google Trends 2021-2025", DEEP_ORANGE),
    ];

    for (i, &(number, label, source, color)) in stats.iter().enumerate() {
        let row = (i / 3) as i64;
        let col = (i % 3) as i64;
        let x = MARGIN + (box_w + gap) * col;
        let y = 1_188_720 + (box_h + gap) * row;
        slide.push(stat_box(
            Frame::new(x, y, box_w, box_h),
            number,
            label,
            source,
            color,
            None,
        ));
    }

    slide.push(text_box(
        Frame::new(MARGIN, 4_480_560, CONTENT_W, 365_760),
        "\u{1F4D6} Toutes les sources sont publiques et verifiables : FFB, CAPEB, France Travail, France Assureurs, ANIL, ANAH, Google, IFOP, BVA, OpinionWay",
        9,
        false,
        GRAY,
        Align::Center,
        "Arial",
    ));

    slide
}

/// "OPPORTUNITE INVESTISSEURS": dark slide with metrics and projections
fn opportunity_slide() -> SlideSpec {
    let mut slide = SlideSpec::new();

    slide.push(ShapeSpec {
        name: "Background".to_string(),
        geometry: Geometry::Rect,
        text_box: false,
        frame: Frame::new(0, 0, SLIDE_W, SLIDE_H),
        fill: Fill::Solid(DARK_BLUE),
        line: Line::None,
        paragraphs: vec![],
    });

    title(&mut slide, "\u{1F4B0} OPPORTUNITE INVESTISSEURS", ORANGE);
    subtitle(
        &mut slide,
        "Un marche de 208 milliards EUR digitalise a moins de 15% = opportunite massive",
        12,
        LIGHT_GRAY,
    );

    let box_w = 2_560_320;
    let box_h = 1_188_720;
    let gap = 91_440;
    let y1 = 1_280_160;

    slide.push(stat_box(
        Frame::new(MARGIN, y1, box_w, box_h),
        "208 Md€",
        "Marche total batiment\nFrance 2024",
        "Source : FFB",
        ORANGE,
        Some(PANEL_BLUE),
    ));
    slide.push(stat_box(
        Frame::new(MARGIN + box_w + gap, y1, box_w, box_h),
        "4,1M+",
        "Recherches Google/an\nsur nos mots-cles",
        "Google Trends + Ahrefs",
        ORANGE,
        Some(PANEL_BLUE),
    ));
    slide.push(stat_box(
        Frame::new(MARGIN + (box_w + gap) * 2, y1, box_w, box_h),
        "+5 000%",
        "Croissance recherches\n\"autour de moi\" (4 ans)",
        "Google Trends 2021-2025",
        GREEN,
        Some(PANEL_BLUE),
    ));

    slide.push(shape_with_text(
        Frame::new(MARGIN, 2_651_760, CONTENT_W, 365_760),
        "\u{1F4CA} PROJECTION DE REVENUS (hypothese conservatrice)",
        14,
        true,
        WHITE,
        Some(PANEL_BLUE),
        Align::Center,
        "Arial",
    ));

    let revenue_lines: &[(&str, u32, bool, Rgb)] = &[
        ("ANNEE 1 : 500 artisans x 49€/mois = 294 000€ ARR", 14, true, ORANGE),
        ("   + 20 syndics Starter (gratuit) + 5 syndics Pro = acquisition B2B", 11, false, LIGHT_GRAY),
        ("", 4, false, WHITE),
        ("ANNEE 2 : 2 000 artisans + 50 syndics Pro = 1,5M€ ARR", 14, true, ORANGE),
        ("   + Commissions interventions (8-15%) + White-label", 11, false, LIGHT_GRAY),
        ("", 4, false, WHITE),
        ("ANNEE 3 : 8 000 artisans + 200 syndics = 6M€+ ARR", 14, true, ORANGE),
        ("   + Expansion 3 villes + API marketplace + Effet reseau", 11, false, LIGHT_GRAY),
    ];
    slide.push(multi_text(
        Frame::new(MARGIN, 3_017_520, CONTENT_W, 1_645_920),
        revenue_lines,
        Some(PANEL_BLUE),
    ));

    slide.push(text_box(
        Frame::new(MARGIN, 4_754_880, CONTENT_W, 365_760),
        "\u{1F680} Vitfix : le Doctolib de l'artisanat — Un marche de 208 Md€, une digitalisation a <15%, une demande qui explose",
        12,
        true,
        GOLD,
        Align::Center,
        "Arial",
    ));

    slide
}

/// Deck positions (0-based) the reordered titles must land on
pub fn expected_positions() -> Vec<(usize, &'static str)> {
    vec![
        (2, "LE MARCHE EN CHIFFRES"),
        (3, "LA CRISE DE L'ARTISANAT"),
        (4, "LA DEMANDE DIGITALE EXPLOSE"),
        (16, "CHIFFRES CLES"),
        (17, "OPPORTUNITE INVESTISSEURS"),
    ]
}

/// Literal strings the targeted rewrites must have removed
pub fn stale_literals() -> Vec<&'static str> {
    let mut all: Vec<&'static str> = vec![
        "Trouver un artisan fiable = 3h de recherche",
        "Délai d'intervention : 5-10 jours",
        "Prix opaques, devis non comparables",
        "Risque d'arnaque, travaux mal faits",
        "Temps perdu coordination : 15h/semaine",
        "Litiges interventions : 40% des cas",
        "Facturation éparpillée",
        "Pas de traçabilité",
        "Clients/Locataires insatisfaits",
        "COÛT CACHÉ : 5 000",
    ];
    all.extend(["750K unités", "8M+ UNITÉS", "500+ artisans vérifiés"]);
    all
}

/// Literal strings the rewrites must have introduced
pub fn updated_literals() -> Vec<&'static str> {
    vec![
        "39% des particuliers ne trouvent pas d'artisan fiable",
        "485 000 postes vacants dans le BTP",
        "873K immeubles",
        "13M+ DE LOGEMENTS A ADRESSER",
        "Reseau d'artisans verifies (SIRET + assurance)",
    ]
}
