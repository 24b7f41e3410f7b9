use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use zip::ZipArchive;

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// WordprocessingML elements that affect paragraph text. `pPr` precedes `p`
/// and `tab`/`tbl`/`txbxContent` precede `t` so the longest element name wins.
static ELEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<(/?)w:(tbl|tab|txbxContent|pPr|br|cr|p|t)(?:\s[^>]*?)?(/?)>").unwrap()
});

/// Reads the main document part and returns its body paragraphs, each
/// followed by a newline.
pub(crate) fn read_docx_text(path: &Path) -> Result<String, ExtractionError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|_| ExtractionError::MissingDocumentXml)?
        .read_to_string(&mut xml)?;

    Ok(paragraphs_to_text(&xml))
}

/// Walks the document XML and collects the text of every body paragraph.
/// Tables and text boxes are skipped along with the paragraphs nested in
/// them, so a paragraph anchoring a text box keeps its own runs. Run text is
/// entity-decoded; tabs and breaks inside runs become `\t` and `\n`.
fn paragraphs_to_text(xml: &str) -> String {
    let mut out = String::new();
    let mut paragraph = String::new();
    let mut skip_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_properties = false;
    let mut text_start: Option<usize> = None;

    for caps in ELEMENT_RE.captures_iter(xml) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let closing = !caps[1].is_empty();
        let self_closing = !caps[3].is_empty();

        match (&caps[2], closing) {
            ("tbl" | "txbxContent", false) if !self_closing => skip_depth += 1,
            ("tbl" | "txbxContent", true) => skip_depth = skip_depth.saturating_sub(1),
            _ if skip_depth > 0 => {}
            ("p", false) => {
                paragraph.clear();
                if self_closing {
                    out.push('\n');
                } else {
                    in_paragraph = true;
                }
            }
            ("p", true) => {
                if in_paragraph {
                    out.push_str(&paragraph);
                    out.push('\n');
                }
                in_paragraph = false;
            }
            ("pPr", false) if !self_closing => in_properties = true,
            ("pPr", true) => in_properties = false,
            _ if !in_paragraph || in_properties => {}
            ("t", false) if !self_closing => text_start = Some(whole.end()),
            ("t", true) => {
                if let Some(start) = text_start.take() {
                    let raw = &xml[start..whole.start()];
                    paragraph.push_str(&html_escape::decode_html_entities(raw));
                }
            }
            ("tab", false) => paragraph.push('\t'),
            ("br" | "cr", false) => paragraph.push('\n'),
            _ => {}
        }
    }

    out
}
