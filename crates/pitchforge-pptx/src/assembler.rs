//! Deck assembly.
//!
//! Builds the complete package for a generated deck: one title slide from
//! the submitted context, then one content slide per non-blank deck section
//! in canonical order. The title slide always renders the submitted startup
//! name and tagline, not the generated cover text, so a failed cover
//! generation can never blank the opening slide.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use pitchforge_core::{Deck, StartupContext};

use crate::error::Result;
use crate::opc::{content_type, PackageWriter};
use crate::parts;
use crate::slide;

/// Directory exported decks land in when the caller does not choose one.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_decks";

/// Render a deck into PPTX bytes.
pub fn deck_bytes(context: &StartupContext, deck: &Deck) -> Result<Vec<u8>> {
    build_with_time(context, deck, Local::now())
}

/// Render with an explicit clock.
///
/// The timestamp only reaches the title slide date stamp and docProps,
/// so two builds with the same instant are byte-identical.
pub(crate) fn build_with_time(
    context: &StartupContext,
    deck: &Deck,
    now: DateTime<Local>,
) -> Result<Vec<u8>> {
    let entries: Vec<_> = deck
        .iter()
        .filter(|(_, content)| !content.trim().is_empty())
        .collect();
    let slide_count = 1 + entries.len();
    let mut writer = PackageWriter::new();

    writer.add_rels("_rels/.rels", &parts::root_rels())?;

    writer.add_part(
        "ppt/presentation.xml",
        content_type::PRESENTATION_MAIN,
        &parts::presentation_xml(slide_count),
    )?;
    writer.add_rels(
        "ppt/_rels/presentation.xml.rels",
        &parts::presentation_rels(slide_count),
    )?;

    writer.add_part(
        "ppt/slideMasters/slideMaster1.xml",
        content_type::SLIDE_MASTER,
        &parts::slide_master_xml(),
    )?;
    writer.add_rels(
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &parts::slide_master_rels(),
    )?;

    writer.add_part(
        "ppt/slideLayouts/slideLayout1.xml",
        content_type::SLIDE_LAYOUT,
        &parts::slide_layout_xml("title", "Title Slide"),
    )?;
    writer.add_rels(
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        &parts::slide_layout_rels(),
    )?;
    writer.add_part(
        "ppt/slideLayouts/slideLayout2.xml",
        content_type::SLIDE_LAYOUT,
        &parts::slide_layout_xml("obj", "Title and Content"),
    )?;
    writer.add_rels(
        "ppt/slideLayouts/_rels/slideLayout2.xml.rels",
        &parts::slide_layout_rels(),
    )?;

    writer.add_part("ppt/theme/theme1.xml", content_type::THEME, &parts::theme_xml())?;

    let name = context.startup_name.trim();
    let date_label = now.format("%B %Y").to_string();
    let title_xml = slide::title_slide_xml(name, context.tagline_or_default(), &date_label);
    writer.add_part("ppt/slides/slide1.xml", content_type::SLIDE, &title_xml)?;
    writer.add_rels("ppt/slides/_rels/slide1.xml.rels", &parts::slide_rels(1))?;

    for (i, (section, content)) in entries.into_iter().enumerate() {
        let number = i + 2;
        let xml = slide::content_slide_xml(section.title(), content, section.body_format());
        writer.add_part(
            &format!("ppt/slides/slide{number}.xml"),
            content_type::SLIDE,
            &xml,
        )?;
        writer.add_rels(
            &format!("ppt/slides/_rels/slide{number}.xml.rels"),
            &parts::slide_rels(2),
        )?;
    }

    let timestamp = now
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string();
    writer.add_part(
        "docProps/core.xml",
        content_type::CORE_PROPERTIES,
        &parts::core_props_xml(&format!("{name} Pitch Deck"), &timestamp),
    )?;
    writer.add_part(
        "docProps/app.xml",
        content_type::EXTENDED_PROPERTIES,
        &parts::app_props_xml(slide_count),
    )?;

    writer.finish()
}

/// Filename an exported deck is written under.
///
/// Spaces in the startup name become underscores; the suffix is the
/// export instant down to the second.
pub fn export_filename(startup_name: &str, now: &DateTime<Local>) -> String {
    let safe = startup_name.trim().replace(' ', "_");
    format!("{}_{}.pptx", safe, now.format("%Y%m%d_%H%M%S"))
}

/// Render the deck and write it into `output_dir`, creating the directory
/// if needed. Returns the path of the written file.
pub fn export_deck(context: &StartupContext, deck: &Deck, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let now = Local::now();
    let bytes = build_with_time(context, deck, now)?;
    let path = output_dir.join(export_filename(&context.startup_name, &now));
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pitchforge_core::Section;
    use proptest::prelude::*;
    use std::io::{Cursor, Read};

    fn test_context() -> StartupContext {
        StartupContext {
            startup_name: "Nova Health".to_string(),
            problem: "Care is slow".to_string(),
            solution: "AI triage".to_string(),
            target_audience: "Clinics".to_string(),
            industry: "Healthcare".to_string(),
            revenue_model: "SaaS".to_string(),
            stage: "Seed".to_string(),
            ..Default::default()
        }
    }

    fn full_deck() -> Deck {
        let mut deck = Deck::new();
        for section in Section::ALL {
            deck.insert(section, format!("{} content", section.wire_name()));
        }
        deck
    }

    fn fixed_time(day: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, day, 10, 30, 0).unwrap()
    }

    fn part_bytes(archive_bytes: &[u8], name: &str) -> Vec<u8> {
        let mut archive = zip::ZipArchive::new(Cursor::new(archive_bytes.to_vec())).unwrap();
        let mut buf = Vec::new();
        archive.by_name(name).unwrap().read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_same_instant_builds_identical_bytes() {
        let context = test_context();
        let deck = full_deck();
        let a = build_with_time(&context, &deck, fixed_time(1)).unwrap();
        let b = build_with_time(&context, &deck, fixed_time(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_slide_parts_stable_across_export_instants() {
        let context = test_context();
        let deck = full_deck();
        // Same month, different second: the date stamp on the title slide
        // is month granularity, so every slide part must match.
        let a = build_with_time(&context, &deck, fixed_time(1)).unwrap();
        let b = build_with_time(&context, &deck, fixed_time(15)).unwrap();
        for i in 1..=11 {
            let name = format!("ppt/slides/slide{i}.xml");
            assert_eq!(part_bytes(&a, &name), part_bytes(&b, &name), "{name}");
        }
        assert_ne!(part_bytes(&a, "docProps/core.xml"), part_bytes(&b, "docProps/core.xml"));
    }

    #[test]
    fn test_empty_deck_builds_title_only_package() {
        let bytes = build_with_time(&test_context(), &Deck::new(), fixed_time(1)).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("ppt/slides/slide1.xml").is_ok());
        assert!(archive.by_name("ppt/slides/slide2.xml").is_err());
    }

    #[test]
    fn test_blank_content_sections_are_skipped() {
        let mut deck = Deck::new();
        deck.insert(Section::Problem, "Care is slow today");
        deck.insert(Section::Team, "   \n  ");
        let bytes = build_with_time(&test_context(), &deck, fixed_time(1)).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(archive.by_name("ppt/slides/slide2.xml").is_ok());
        assert!(archive.by_name("ppt/slides/slide3.xml").is_err());
    }

    #[test]
    fn test_export_filename_replaces_spaces() {
        let now = fixed_time(1);
        assert_eq!(
            export_filename("Nova Health", &now),
            "Nova_Health_20250601_103000.pptx"
        );
        assert_eq!(export_filename("Solo", &now), "Solo_20250601_103000.pptx");
    }

    #[test]
    fn test_export_writes_file_into_created_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("decks");
        let path = export_deck(&test_context(), &full_deck(), &target).unwrap();
        assert!(path.exists());
        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("Nova_Health_"));
        assert!(file_name.ends_with(".pptx"));
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);
    }

    #[test]
    fn test_title_slide_renders_context_not_cover_text() {
        let mut deck = Deck::new();
        deck.insert(Section::Cover, "Nova - generated tagline".to_string());
        let bytes = build_with_time(&test_context(), &deck, fixed_time(1)).unwrap();
        let slide1 = String::from_utf8(part_bytes(&bytes, "ppt/slides/slide1.xml")).unwrap();
        assert!(slide1.contains("<a:t>Nova Health</a:t>"));
        assert!(slide1.contains("Transforming Ideas into Reality"));
        assert!(!slide1.contains("generated tagline"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_package_survives_arbitrary_body_text(body in r#"[a-zA-Z0-9][a-zA-Z0-9 &<>"'\n-]{0,159}"#) {
            let mut deck = Deck::new();
            deck.insert(Section::Problem, body);
            let bytes = build_with_time(&test_context(), &deck, fixed_time(1)).unwrap();
            prop_assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);
            let slide2 = String::from_utf8(part_bytes(&bytes, "ppt/slides/slide2.xml")).unwrap();
            prop_assert!(slide2.ends_with("</p:sld>"));
        }
    }
}
