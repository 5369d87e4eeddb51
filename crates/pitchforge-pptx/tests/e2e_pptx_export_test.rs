//! E2E Test: PPTX Export
//!
//! Renders a complete ten-section deck, re-opens the package as a ZIP
//! archive and checks the parts a viewer would load.

use std::io::{Cursor, Read};

use pitchforge_core::{Deck, Section, StartupContext};
use pitchforge_pptx::{deck_bytes, export_deck};

fn nova_context() -> StartupContext {
    StartupContext {
        startup_name: "Nova Health".to_string(),
        problem: "Patients wait days for triage".to_string(),
        solution: "AI assisted intake".to_string(),
        target_audience: "Outpatient clinics".to_string(),
        industry: "Healthcare".to_string(),
        revenue_model: "Per-seat SaaS".to_string(),
        stage: "Seed".to_string(),
        tagline: Some("Care at light speed".to_string()),
        ..Default::default()
    }
}

fn nova_deck() -> Deck {
    let mut deck = Deck::new();
    deck.insert(Section::Cover, "Nova Health - Care at light speed".to_string());
    deck.insert(
        Section::Problem,
        "Triage queues stretch to days\nStaff burn out\nNo-shows spike".to_string(),
    );
    deck.insert(Section::Solution, "AI intake\n24/7 routing".to_string());
    deck.insert(Section::Market, "2M visits annually".to_string());
    deck.insert(Section::Product, "Web intake portal with EHR sync.".to_string());
    deck.insert(Section::BusinessModel, "Per-seat SaaS at $99/mo.".to_string());
    deck.insert(Section::Competition, "Legacy phone triage only.".to_string());
    deck.insert(Section::Team, "Jane, CEO. Ali, CTO.".to_string());
    deck.insert(Section::Traction, "12 pilot clinics live.".to_string());
    deck.insert(Section::FundingNeeds, "Raising $2M seed.".to_string());
    deck
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes.to_vec())).expect("package should open as ZIP");
    let mut xml = String::new();
    archive
        .by_name(name)
        .expect("part should exist")
        .read_to_string(&mut xml)
        .expect("part should be UTF-8");
    xml
}

#[test]
fn e2e_full_deck_package_has_expected_parts() {
    let bytes = deck_bytes(&nova_context(), &nova_deck()).expect("build should succeed");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("package should open");

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .collect();

    for expected in [
        "[Content_Types].xml",
        "_rels/.rels",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/slideLayouts/slideLayout2.xml",
        "ppt/theme/theme1.xml",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(names.iter().any(|n| n == expected), "missing {expected}");
    }

    // Title slide plus one slide per generated section.
    for i in 1..=11 {
        let slide = format!("ppt/slides/slide{i}.xml");
        assert!(names.iter().any(|n| n == &slide), "missing {slide}");
    }
    assert!(!names.iter().any(|n| n == "ppt/slides/slide12.xml"));
}

#[test]
fn e2e_sections_render_in_canonical_order() {
    let bytes = deck_bytes(&nova_context(), &nova_deck()).expect("build should succeed");

    let slide2 = read_part(&bytes, "ppt/slides/slide2.xml");
    assert!(slide2.contains("<a:t>Cover Slide</a:t>"));
    assert!(slide2.contains("Nova Health - Care at light speed"));

    let slide3 = read_part(&bytes, "ppt/slides/slide3.xml");
    assert!(slide3.contains("<a:t>The Problem</a:t>"));

    let slide11 = read_part(&bytes, "ppt/slides/slide11.xml");
    assert!(slide11.contains("<a:t>Investment Opportunity</a:t>"));
    assert!(slide11.contains("Raising $2M seed."));
}

#[test]
fn e2e_bulleted_sections_expand_each_line() {
    let bytes = deck_bytes(&nova_context(), &nova_deck()).expect("build should succeed");

    let slide3 = read_part(&bytes, "ppt/slides/slide3.xml");
    assert_eq!(slide3.matches("<a:buChar").count(), 3);
    assert!(slide3.contains("<a:t>Triage queues stretch to days</a:t>"));
    assert!(slide3.contains("<a:t>No-shows spike</a:t>"));

    // Paragraph sections carry no bullets.
    let slide9 = read_part(&bytes, "ppt/slides/slide9.xml");
    assert!(slide9.contains("<a:t>Our Team</a:t>"));
    assert!(!slide9.contains("<a:buChar"));
}

#[test]
fn e2e_title_slide_prefers_submitted_tagline() {
    let bytes = deck_bytes(&nova_context(), &nova_deck()).expect("build should succeed");

    let slide1 = read_part(&bytes, "ppt/slides/slide1.xml");
    assert!(slide1.contains("<a:t>Nova Health</a:t>"));
    assert!(slide1.contains("<a:t>Care at light speed</a:t>"));

    let mut no_tagline = nova_context();
    no_tagline.tagline = None;
    let bytes = deck_bytes(&no_tagline, &nova_deck()).expect("build should succeed");
    let slide1 = read_part(&bytes, "ppt/slides/slide1.xml");
    assert!(slide1.contains("Transforming Ideas into Reality"));
}

#[test]
fn e2e_partial_deck_shrinks_slide_list() {
    let mut deck = Deck::new();
    deck.insert(Section::Problem, "One line".to_string());
    deck.insert(Section::Team, "Two founders".to_string());

    let bytes = deck_bytes(&nova_context(), &deck).expect("build should succeed");
    let presentation = read_part(&bytes, "ppt/presentation.xml");
    assert_eq!(presentation.matches("<p:sldId ").count(), 3);

    let content_types = read_part(&bytes, "[Content_Types].xml");
    assert_eq!(content_types.matches(".presentationml.slide+xml").count(), 3);
}

#[test]
fn e2e_export_writes_package_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_deck(&nova_context(), &nova_deck(), dir.path()).expect("export");

    assert!(path.exists());
    let file_name = path.file_name().expect("name").to_string_lossy().to_string();
    assert!(file_name.starts_with("Nova_Health_"));
    assert!(file_name.ends_with(".pptx"));

    let bytes = std::fs::read(&path).expect("read back");
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("exported file is a ZIP");
    assert!(archive.by_name("ppt/presentation.xml").is_ok());
}
