//! External-identifier extraction from the cross-reference section.
//!
//! The node after the `#external-links` anchor holds a definition list whose
//! element children alternate source name / identifier value. An odd child
//! count means the alternation is broken; truncating or re-pairing it would
//! silently misalign sources and values, so it is a hard failure.

use std::collections::BTreeMap;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;

const EXTERNAL_LINKS_ANCHOR: &str = "#external-links";

/// Extract the source → identifier mapping from a parsed drug page.
///
/// Sources on the configured deny-list are dropped. If a source repeats,
/// the last value wins.
pub fn extract_external_links(
    doc: &Document,
    options: &Options,
) -> Result<BTreeMap<String, String>> {
    let anchor = doc.select(EXTERNAL_LINKS_ANCHOR);
    if anchor.is_empty() {
        return Err(Error::MissingSection("external-links"));
    }

    let section = dom::next_element_sibling(&anchor).ok_or_else(|| {
        Error::MalformedDocument("external-links anchor has no content section".into())
    })?;
    let list = section.select("dl");
    if list.is_empty() {
        return Err(Error::MalformedDocument(
            "external-links section has no definition list".into(),
        ));
    }

    let entries = dom::element_children(&list);
    if entries.len() % 2 != 0 {
        return Err(Error::MalformedDocument(format!(
            "external-links list has {} children, expected term/value alternation",
            entries.len()
        )));
    }

    let mut links = BTreeMap::new();
    for pair in entries.chunks_exact(2) {
        let source = dom::text_content(&pair[0]).trim().to_string();
        let value = dom::text_content(&pair[1]).trim().to_string();
        if options.is_denied(&source) {
            continue;
        }
        links.insert(source, value);
    }

    Ok(links)
}
