//! SMILES structure-descriptor extraction.
//!
//! The descriptor sits in the node following the `#smiles` anchor. Because
//! SMILES notation can contain `@` characters, the catalog's CDN mistakes
//! parts of it for an email address and hides them behind its obfuscation
//! scheme. Decoding has to happen against the value's serialized HTML,
//! before markup is stripped, since the encoded span's literal serialization
//! is what must be matched and replaced.

use crate::decode::decode_obfuscated;
use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};

const SMILES_ANCHOR: &str = "#smiles";
const NOT_AVAILABLE: &str = "Not Available";
const OBFUSCATED_SPAN: &str = ".__cf_email__";
const OBFUSCATED_ATTR: &str = "data-cfemail";

/// Extract the optional SMILES descriptor from a parsed drug page.
///
/// Returns `Ok(None)` when the page marks the field "Not Available". A page
/// without the `#smiles` anchor at all is a [`Error::MissingSection`].
pub fn extract_smiles(doc: &Document) -> Result<Option<String>> {
    let anchor = doc.select(SMILES_ANCHOR);
    if anchor.is_empty() {
        return Err(Error::MissingSection("smiles"));
    }

    let value = dom::next_content_sibling(&anchor)
        .ok_or_else(|| Error::MalformedDocument("smiles anchor has no value node".into()))?;
    let mut serialized = dom::outer_html(&value).to_string();

    for (span_html, decoded) in obfuscated_spans(doc)? {
        serialized = serialized.replace(&span_html, &decoded);
    }

    let text = Document::from(serialized)
        .select("body")
        .text()
        .trim()
        .to_string();

    if text == NOT_AVAILABLE {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Map every obfuscated span in the document to (serialized form, decoded
/// text). A span without its data attribute is malformed.
fn obfuscated_spans(doc: &Document) -> Result<Vec<(String, String)>> {
    let mut spans = Vec::new();
    for node in doc.select(OBFUSCATED_SPAN).nodes() {
        let span = Selection::from(*node);
        let token = dom::get_attribute(&span, OBFUSCATED_ATTR).ok_or_else(|| {
            Error::MalformedDocument("obfuscated span carries no data-cfemail attribute".into())
        })?;
        spans.push((dom::outer_html(&span).to_string(), decode_obfuscated(&token)?));
    }
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obfuscate(key: u8, text: &str) -> String {
        let mut out = format!("{key:02x}");
        for b in text.bytes() {
            out.push_str(&format!("{:02x}", b ^ key));
        }
        out
    }

    #[test]
    fn extracts_plain_descriptor() {
        let doc = Document::from(
            "<dl><dt id='smiles'>SMILES</dt><dd>CC(C)CC1=CC=C(C=C1)C(C)C(O)=O</dd></dl>",
        );
        match extract_smiles(&doc) {
            Ok(smiles) => assert_eq!(smiles.as_deref(), Some("CC(C)CC1=CC=C(C=C1)C(C)C(O)=O")),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn not_available_yields_none() {
        let doc = Document::from("<dl><dt id='smiles'>SMILES</dt><dd>Not Available</dd></dl>");
        match extract_smiles(&doc) {
            Ok(smiles) => assert_eq!(smiles, None),
            Err(err) => panic!("expected Ok(None), got Err({err:?})"),
        }
    }

    #[test]
    fn decodes_obfuscated_span_before_stripping() {
        let token = obfuscate(0x42, "C[C@@H](O)");
        let html = format!(
            "<dl><dt id='smiles'>SMILES</dt><dd>CC(=O)<a class='__cf_email__' \
             data-cfemail='{token}'>[email&#160;protected]</a>C1=CC=CC=C1</dd></dl>"
        );
        let doc = Document::from(html);
        match extract_smiles(&doc) {
            Ok(smiles) => assert_eq!(smiles.as_deref(), Some("CC(=O)C[C@@H](O)C1=CC=CC=C1")),
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn missing_anchor_is_a_missing_section() {
        let doc = Document::from("<html><body><p>nothing here</p></body></html>");
        assert!(matches!(
            extract_smiles(&doc),
            Err(Error::MissingSection("smiles"))
        ));
    }

    #[test]
    fn span_without_token_is_malformed() {
        let doc = Document::from(
            "<dl><dt id='smiles'>SMILES</dt><dd><a class='__cf_email__'>x</a></dd></dl>",
        );
        assert!(matches!(
            extract_smiles(&doc),
            Err(Error::MalformedDocument(_))
        ));
    }
}
