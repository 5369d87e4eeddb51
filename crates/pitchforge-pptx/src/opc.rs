//! OPC container plumbing.
//!
//! A PPTX file is an Open Packaging Conventions package: a ZIP archive of
//! XML parts plus a `[Content_Types].xml` map and `.rels` relationship
//! items. This module owns the container concerns so the part builders in
//! [`crate::parts`] and [`crate::slide`] only produce XML strings.

use std::collections::BTreeMap;
use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;

/// Content types for the parts a deck package carries.
pub mod content_type {
    /// Presentation main document part.
    pub const PRESENTATION_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";

    /// Slide part.
    pub const SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";

    /// Slide layout part.
    pub const SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";

    /// Slide master part.
    pub const SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";

    /// Theme part.
    pub const THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";

    /// Core document properties part.
    pub const CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";

    /// Extended (app) properties part.
    pub const EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";

    /// Relationship items (`.rels`).
    pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";

    /// Generic XML, the fallback default for the `xml` extension.
    pub const XML: &str = "application/xml";
}

/// Relationship type URIs.
pub mod relationship {
    /// Package root to the presentation part.
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

    /// Package root to core properties.
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

    /// Package root to extended properties.
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

    /// Presentation to a slide.
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide to its layout.
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Presentation to the slide master.
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Presentation or master to the theme.
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

/// Escape XML special characters in text content and attribute values.
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Accumulator for `[Content_Types].xml`.
///
/// Every `.rels` item is covered by the `rels` extension default; XML parts
/// with a part-specific type are registered as overrides. BTreeMap keys keep
/// the emitted order stable.
#[derive(Debug)]
pub struct ContentTypes {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl ContentTypes {
    /// Create the map with the standard `rels` and `xml` defaults.
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), content_type::RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), content_type::XML.to_string());
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register an override for a part.
    ///
    /// `part_name` is the path inside the archive without a leading slash;
    /// the emitted `PartName` attribute carries the slash.
    pub fn register(&mut self, part_name: &str, content_type: &str) {
        self.overrides
            .insert(format!("/{part_name}"), content_type.to_string());
    }

    /// Generate the `[Content_Types].xml` blob.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        xml.push('\n');

        for (ext, ct) in &self.defaults {
            xml.push_str(&format!(
                r#"  <Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(ct)
            ));
            xml.push('\n');
        }

        for (part_name, ct) in &self.overrides {
            xml.push_str(&format!(
                r#"  <Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part_name),
                escape_xml(ct)
            ));
            xml.push('\n');
        }

        xml.push_str("</Types>");
        xml
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one relationship item.
///
/// Ids are allocated sequentially as `rId1`, `rId2`, .. in insertion order,
/// which is also the emitted order.
#[derive(Debug, Default)]
pub struct Relationships {
    rels: Vec<(String, String, String)>,
}

impl Relationships {
    /// Create an empty relationship set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its allocated id.
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels
            .push((r_id.clone(), rel_type.to_string(), target.to_string()));
        r_id
    }

    /// Generate the `.rels` blob.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push('\n');

        for (r_id, rel_type, target) in &self.rels {
            xml.push_str(&format!(
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(r_id),
                escape_xml(rel_type),
                escape_xml(target)
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Streaming writer for the package archive.
///
/// Parts are appended in call order; `finish` emits `[Content_Types].xml`
/// from the registered overrides and closes the archive. Entry metadata is
/// left at the `zip` crate defaults, so identical part blobs produce an
/// identical archive.
pub struct PackageWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    content_types: ContentTypes,
}

impl PackageWriter {
    /// Create an empty package.
    pub fn new() -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            content_types: ContentTypes::new(),
        }
    }

    fn options() -> FileOptions {
        FileOptions::default().compression_method(CompressionMethod::Deflated)
    }

    /// Add an XML part and register its content type override.
    pub fn add_part(&mut self, name: &str, content_type: &str, xml: &str) -> Result<()> {
        self.content_types.register(name, content_type);
        self.zip.start_file(name, Self::options())?;
        self.zip.write_all(xml.as_bytes())?;
        Ok(())
    }

    /// Add a relationship item, covered by the `rels` extension default.
    pub fn add_rels(&mut self, name: &str, rels: &Relationships) -> Result<()> {
        self.zip.start_file(name, Self::options())?;
        self.zip.write_all(rels.to_xml().as_bytes())?;
        Ok(())
    }

    /// Emit `[Content_Types].xml` and close the archive.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.zip
            .start_file("[Content_Types].xml", Self::options())?;
        self.zip
            .write_all(self.content_types.to_xml().as_bytes())?;
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

impl std::fmt::Debug for PackageWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageWriter")
            .field("content_types", &self.content_types)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml_replaces_special_characters() {
        assert_eq!(
            escape_xml(r#"<Fast & "Smart"> 'AI'"#),
            "&lt;Fast &amp; &quot;Smart&quot;&gt; &apos;AI&apos;"
        );
        assert_eq!(escape_xml("plain text"), "plain text");
    }

    #[test]
    fn test_content_types_defaults_present() {
        let cti = ContentTypes::new();
        let xml = cti.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Default Extension="xml""#));
        assert!(!xml.contains("<Override"));
    }

    #[test]
    fn test_content_types_override_carries_leading_slash() {
        let mut cti = ContentTypes::new();
        cti.register("ppt/presentation.xml", content_type::PRESENTATION_MAIN);
        let xml = cti.to_xml();
        assert!(xml.contains(r#"PartName="/ppt/presentation.xml""#));
        assert!(xml.contains(content_type::PRESENTATION_MAIN));
    }

    #[test]
    fn test_content_types_overrides_sorted() {
        let mut cti = ContentTypes::new();
        cti.register("ppt/slides/slide2.xml", content_type::SLIDE);
        cti.register("docProps/core.xml", content_type::CORE_PROPERTIES);
        cti.register("ppt/slides/slide1.xml", content_type::SLIDE);
        let xml = cti.to_xml();
        let core = xml.find("/docProps/core.xml").unwrap();
        let slide1 = xml.find("/ppt/slides/slide1.xml").unwrap();
        let slide2 = xml.find("/ppt/slides/slide2.xml").unwrap();
        assert!(core < slide1);
        assert!(slide1 < slide2);
    }

    #[test]
    fn test_relationships_allocate_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(relationship::SLIDE_MASTER, "slideMasters/slideMaster1.xml"), "rId1");
        assert_eq!(rels.add(relationship::SLIDE, "slides/slide1.xml"), "rId2");
        assert_eq!(rels.add(relationship::SLIDE, "slides/slide2.xml"), "rId3");

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
    }

    #[test]
    fn test_package_writer_produces_zip_with_content_types() {
        let mut writer = PackageWriter::new();
        writer
            .add_part("ppt/presentation.xml", content_type::PRESENTATION_MAIN, "<p/>")
            .unwrap();
        let bytes = writer.finish().unwrap();

        // ZIP local file header signature
        assert_eq!(&bytes[0..4], &[0x50, 0x4B, 0x03, 0x04]);

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"ppt/presentation.xml".to_string()));
        assert!(names.contains(&"[Content_Types].xml".to_string()));
    }

    #[test]
    fn test_package_writer_is_deterministic() {
        let build = || {
            let mut writer = PackageWriter::new();
            writer
                .add_part("ppt/presentation.xml", content_type::PRESENTATION_MAIN, "<p/>")
                .unwrap();
            let mut rels = Relationships::new();
            rels.add(relationship::OFFICE_DOCUMENT, "ppt/presentation.xml");
            writer.add_rels("_rels/.rels", &rels).unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
