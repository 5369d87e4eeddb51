//! Slide part builders.
//!
//! Every slide is a pair of explicitly positioned text boxes (the title
//! slide adds a date box). No placeholders are inherited from layouts, so
//! the styling here is the whole story: Calibri, `0070C0` titles and
//! `444444` body text.

use pitchforge_core::BodyFormat;

use crate::opc::escape_xml;
use crate::parts::{PML_XMLNS, SP_TREE_OPEN, XML_HEADER};

/// Title and headline colour.
pub(crate) const PRIMARY_COLOR: &str = "0070C0";

/// Body text colour.
pub(crate) const SECONDARY_COLOR: &str = "444444";

/// Typeface applied to every run.
pub(crate) const BODY_FONT: &str = "Calibri";

// Font sizes in hundredths of a point.
const TITLE_SLIDE_NAME_SZ: u32 = 4400;
const TITLE_SLIDE_TAGLINE_SZ: u32 = 2400;
const TITLE_SLIDE_DATE_SZ: u32 = 1200;
const CONTENT_TITLE_SZ: u32 = 3600;
const CONTENT_BODY_SZ: u32 = 1800;

// Text box geometry in EMU (914400 per inch).
const NAME_BOX: (i64, i64, i64, i64) = (685_800, 2_133_600, 7_772_400, 1_524_000);
const TAGLINE_BOX: (i64, i64, i64, i64) = (685_800, 3_886_200, 7_772_400, 1_752_600);
const DATE_BOX: (i64, i64, i64, i64) = (7_315_200, 5_943_600, 1_828_800, 457_200);
const CONTENT_TITLE_BOX: (i64, i64, i64, i64) = (457_200, 274_638, 8_229_600, 1_143_000);
const CONTENT_BODY_BOX: (i64, i64, i64, i64) = (457_200, 1_600_200, 8_229_600, 4_525_963);

/// Split body text into bullet lines.
///
/// Lines are trimmed and blank lines dropped; everything that survives
/// becomes one bullet, whatever prefix the model put on it.
pub fn split_bullets(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn run(text: &str, sz: u32, bold: bool, color: &str) -> String {
    let b = if bold { r#" b="1""# } else { "" };
    format!(
        concat!(
            r#"<a:r><a:rPr lang="en-US" sz="{sz}"{b}>"#,
            r#"<a:solidFill><a:srgbClr val="{color}"/></a:solidFill>"#,
            r#"<a:latin typeface="{font}"/></a:rPr>"#,
            "<a:t>{text}</a:t></a:r>",
        ),
        sz = sz,
        b = b,
        color = color,
        font = BODY_FONT,
        text = escape_xml(text)
    )
}

/// A paragraph whose lines become `<a:br/>` separated runs.
fn line_break_paragraph(text: &str, sz: u32, color: &str, centered: bool) -> String {
    let mut xml = String::from("<a:p>");
    if centered {
        xml.push_str(r#"<a:pPr algn="ctr"/>"#);
    }
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<a:br/>");
        }
        if !line.is_empty() {
            xml.push_str(&run(line, sz, false, color));
        }
    }
    xml.push_str("</a:p>");
    xml
}

fn bullet_paragraph(line: &str) -> String {
    format!(
        concat!(
            r#"<a:p><a:pPr marL="342900" indent="-342900"><a:buChar char="&#8226;"/></a:pPr>"#,
            "{run}</a:p>",
        ),
        run = run(line, CONTENT_BODY_SZ, false, SECONDARY_COLOR)
    )
}

fn text_box(id: u32, name: &str, frame: (i64, i64, i64, i64), paragraphs: &str) -> String {
    let (x, y, cx, cy) = frame;
    let mut xml = String::with_capacity(512 + paragraphs.len());
    xml.push_str("<p:sp>");
    xml.push_str(&format!(
        r#"<p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#,
    ));
    xml.push_str("<p:spPr><a:xfrm>");
    xml.push_str(&format!(r#"<a:off x="{x}" y="{y}"/>"#));
    xml.push_str(&format!(r#"<a:ext cx="{cx}" cy="{cy}"/>"#));
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/></p:spPr>");
    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr><a:lstStyle/>"#);
    xml.push_str(paragraphs);
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    xml
}

fn slide_envelope(shapes: &str) -> String {
    let mut xml = String::with_capacity(1024 + shapes.len());
    xml.push_str(XML_HEADER);
    xml.push_str(&format!("<p:sld {PML_XMLNS}>"));
    xml.push_str("<p:cSld>");
    xml.push_str(SP_TREE_OPEN);
    xml.push_str(shapes);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    xml
}

/// The title slide: startup name, tagline and a month-year date stamp.
pub fn title_slide_xml(name: &str, tagline: &str, date_label: &str) -> String {
    let name_para = format!(
        r#"<a:p><a:pPr algn="ctr"/>{}</a:p>"#,
        run(name, TITLE_SLIDE_NAME_SZ, true, PRIMARY_COLOR)
    );
    let tagline_para =
        line_break_paragraph(tagline, TITLE_SLIDE_TAGLINE_SZ, SECONDARY_COLOR, true);
    let date_para = format!(
        "<a:p>{}</a:p>",
        run(date_label, TITLE_SLIDE_DATE_SZ, false, SECONDARY_COLOR)
    );

    let mut shapes = String::new();
    shapes.push_str(&text_box(2, "Startup Name", NAME_BOX, &name_para));
    shapes.push_str(&text_box(3, "Tagline", TAGLINE_BOX, &tagline_para));
    shapes.push_str(&text_box(4, "Date", DATE_BOX, &date_para));
    slide_envelope(&shapes)
}

/// A content slide: section title plus its generated body.
///
/// Bulleted sections render one bullet paragraph per surviving line;
/// paragraph sections keep the text in a single paragraph with line
/// breaks.
pub fn content_slide_xml(title: &str, body: &str, format: BodyFormat) -> String {
    let title_para = format!(
        "<a:p>{}</a:p>",
        run(title, CONTENT_TITLE_SZ, true, PRIMARY_COLOR)
    );

    let body_paras = match format {
        BodyFormat::Bulleted => {
            let lines = split_bullets(body);
            if lines.is_empty() {
                "<a:p/>".to_string()
            } else {
                lines.iter().map(|line| bullet_paragraph(line)).collect()
            }
        }
        BodyFormat::Paragraph => {
            line_break_paragraph(body, CONTENT_BODY_SZ, SECONDARY_COLOR, false)
        }
    };

    let mut shapes = String::new();
    shapes.push_str(&text_box(2, "Title", CONTENT_TITLE_BOX, &title_para));
    shapes.push_str(&text_box(3, "Body", CONTENT_BODY_BOX, &body_paras));
    slide_envelope(&shapes)
}
