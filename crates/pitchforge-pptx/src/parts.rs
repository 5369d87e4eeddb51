//! Fixed package parts.
//!
//! Builders for every part of the package that does not depend on deck
//! content: the presentation part, slide master, the two layouts slides
//! reference, the theme, document properties and the relationship items
//! that wire them together. Slide parts live in [`crate::slide`].

use crate::opc::{escape_xml, relationship, Relationships};

/// XML declaration shared by all parts.
pub(crate) const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Namespace declarations for PresentationML root elements.
pub(crate) const PML_XMLNS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;

/// Opening of a shape tree: the group shape every slide-like part carries.
pub(crate) const SP_TREE_OPEN: &str = concat!(
    "<p:spTree>",
    r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
    "<p:grpSpPr><a:xfrm>",
    r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
    r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
    "</a:xfrm></p:grpSpPr>",
);

/// Package root relationships: presentation plus both docProps parts.
pub fn root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship::OFFICE_DOCUMENT, "ppt/presentation.xml");
    rels.add(relationship::CORE_PROPERTIES, "docProps/core.xml");
    rels.add(relationship::EXTENDED_PROPERTIES, "docProps/app.xml");
    rels
}

/// The presentation part.
///
/// Slide ids start at 256 and relationship ids at `rId2`; `rId1` is the
/// slide master. Page size is the 10 x 7.5 inch screen4x3 geometry.
pub fn presentation_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_HEADER);
    xml.push_str(&format!("<p:presentation {PML_XMLNS}>"));
    xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);
    xml.push_str("<p:sldIdLst>");
    for i in 0..slide_count {
        xml.push_str(&format!(
            r#"<p:sldId id="{}" r:id="rId{}"/>"#,
            256 + i,
            2 + i
        ));
    }
    xml.push_str("</p:sldIdLst>");
    xml.push_str(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#);
    xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
    xml.push_str("</p:presentation>");
    xml
}

/// Relationships for the presentation part: master, slides, then theme.
pub fn presentation_rels(slide_count: usize) -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
    for i in 0..slide_count {
        rels.add(relationship::SLIDE, &format!("slides/slide{}.xml", i + 1));
    }
    rels.add(relationship::THEME, "theme/theme1.xml");
    rels
}

/// The slide master: white background, empty shape tree, full colour map
/// and the two layout references.
pub fn slide_master_xml() -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_HEADER);
    xml.push_str(&format!("<p:sldMaster {PML_XMLNS}>"));
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#);
    xml.push_str(SP_TREE_OPEN);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#);
    xml.push_str("<p:sldLayoutIdLst>");
    xml.push_str(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#);
    xml.push_str(r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#);
    xml.push_str("</p:sldLayoutIdLst>");
    xml.push_str("</p:sldMaster>");
    xml
}

/// Relationships for the slide master: its layouts and the theme.
pub fn slide_master_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
    rels.add(relationship::SLIDE_LAYOUT, "../slideLayouts/slideLayout2.xml");
    rels.add(relationship::THEME, "../theme/theme1.xml");
    rels
}

/// A slide layout with the given `type` attribute and display name.
///
/// Layouts carry no placeholder shapes; slides position their text boxes
/// with explicit geometry instead.
pub fn slide_layout_xml(layout_type: &str, name: &str) -> String {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_HEADER);
    xml.push_str(&format!(
        r#"<p:sldLayout {PML_XMLNS} type="{}" preserve="1">"#,
        escape_xml(layout_type)
    ));
    xml.push_str(&format!(r#"<p:cSld name="{}">"#, escape_xml(name)));
    xml.push_str(SP_TREE_OPEN);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sldLayout>");
    xml
}

/// Relationships for a slide layout: its master.
pub fn slide_layout_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
    rels
}

/// Relationships for a slide: the layout it follows.
pub fn slide_rels(layout_index: usize) -> Relationships {
    let mut rels = Relationships::new();
    rels.add(
        relationship::SLIDE_LAYOUT,
        &format!("../slideLayouts/slideLayout{layout_index}.xml"),
    );
    rels
}

/// A minimal Office theme.
///
/// Required by viewers even though every run in the deck sets its own
/// font and colour. Calibri is the minor font so unstyled text matches
/// the deck styling.
pub fn theme_xml() -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_HEADER);
    xml.push_str(r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#);
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    xml.push_str(r#"<a:dk2><a:srgbClr val="44546A"/></a:dk2>"#);
    xml.push_str(r#"<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>"#);
    xml.push_str(r#"<a:accent1><a:srgbClr val="4472C4"/></a:accent1>"#);
    xml.push_str(r#"<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>"#);
    xml.push_str(r#"<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>"#);
    xml.push_str(r#"<a:accent4><a:srgbClr val="FFC000"/></a:accent4>"#);
    xml.push_str(r#"<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>"#);
    xml.push_str(r#"<a:accent6><a:srgbClr val="70AD47"/></a:accent6>"#);
    xml.push_str(r#"<a:hlink><a:srgbClr val="0563C1"/></a:hlink>"#);
    xml.push_str(r#"<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>"#);
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Office">"#);
    xml.push_str(r#"<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#);
    xml.push_str(r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#);
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="50000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="75000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    xml.push_str(r#"<a:ln w="6350" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#);
    xml.push_str(r#"<a:ln w="12700" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#);
    xml.push_str(r#"<a:ln w="19050" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#);
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    xml.push_str(r#"<a:effectStyle><a:effectLst><a:outerShdw blurRad="57150" dist="19050" dir="5400000" algn="ctr" rotWithShape="0"><a:srgbClr val="000000"><a:alpha val="63000"/></a:srgbClr></a:outerShdw></a:effectLst></a:effectStyle>"#);
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:shade val="98000"/></a:schemeClr></a:solidFill>"#);
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("</a:theme>");
    xml
}

/// Core document properties with a W3CDTF timestamp.
pub fn core_props_xml(title: &str, timestamp: &str) -> String {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_HEADER);
    xml.push_str(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
    xml.push_str("<dc:creator>Pitchforge</dc:creator>");
    xml.push_str("<cp:lastModifiedBy>Pitchforge</cp:lastModifiedBy>");
    xml.push_str(&format!(
        r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
        escape_xml(timestamp)
    ));
    xml.push_str(&format!(
        r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
        escape_xml(timestamp)
    ));
    xml.push_str("</cp:coreProperties>");
    xml
}

/// Extended application properties.
pub fn app_props_xml(slide_count: usize) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(XML_HEADER);
    xml.push_str(concat!(
        r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
        r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
    ));
    xml.push_str("<Application>Pitchforge</Application>");
    xml.push_str(&format!("<Slides>{slide_count}</Slides>"));
    xml.push_str("<PresentationFormat>On-screen Show (4:3)</PresentationFormat>");
    xml.push_str("</Properties>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_lists_every_slide() {
        let xml = presentation_xml(3);
        assert!(xml.contains(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
        assert!(xml.contains(r#"<p:sldId id="258" r:id="rId4"/>"#));
        assert!(!xml.contains(r#"id="259""#));
        assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000" type="screen4x3"/>"#));
    }

    #[test]
    fn test_presentation_rels_order_master_slides_theme() {
        let xml = presentation_rels(2).to_xml();
        assert!(xml.contains(r#"Id="rId1""#) && xml.contains("slideMasters/slideMaster1.xml"));
        assert!(xml.contains(r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml""#));
        assert!(xml.contains(r#"Target="slides/slide2.xml""#));
        assert!(xml.contains(r#"Id="rId4""#) && xml.contains("theme/theme1.xml"));
    }

    #[test]
    fn test_master_references_both_layouts() {
        let xml = slide_master_xml();
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483650" r:id="rId2"/>"#));
        assert!(xml.contains("<p:clrMap "));
        assert!(xml.contains(r#"<a:srgbClr val="FFFFFF"/>"#));
    }

    #[test]
    fn test_layout_carries_type_attribute() {
        let xml = slide_layout_xml("title", "Title Slide");
        assert!(xml.contains(r#"type="title""#));
        assert!(xml.contains(r#"<p:cSld name="Title Slide">"#));
        assert!(xml.contains("<a:masterClrMapping/>"));
    }

    #[test]
    fn test_theme_uses_calibri_fonts() {
        let xml = theme_xml();
        assert!(xml.contains(r#"<a:latin typeface="Calibri Light"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Calibri"/>"#));
        assert!(xml.contains(r#"<a:clrScheme name="Office">"#));
    }

    #[test]
    fn test_core_props_escape_title() {
        let xml = core_props_xml("Fast & Smart Pitch Deck", "2025-06-01T12:00:00Z");
        assert!(xml.contains("<dc:title>Fast &amp; Smart Pitch Deck</dc:title>"));
        assert!(xml.contains(r#"<dcterms:created xsi:type="dcterms:W3CDTF">2025-06-01T12:00:00Z</dcterms:created>"#));
    }

    #[test]
    fn test_app_props_slide_count() {
        let xml = app_props_xml(11);
        assert!(xml.contains("<Slides>11</Slides>"));
        assert!(xml.contains("<Application>Pitchforge</Application>"));
    }
}
