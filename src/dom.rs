//! DOM operations adapter.
//!
//! Thin wrappers over the `dom_query` crate covering the traversal the
//! extractors need: anchor lookup, sibling stepping, child enumeration, and
//! text/serialization access. Catalog pages hang every field off a labelled
//! anchor element, so most extraction is "find anchor, step to sibling".

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants, markup stripped.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get the serialized outer HTML of the selection's first node.
///
/// For a text node this is its escaped text, which is exactly the form the
/// obfuscation substitution has to match against.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// Get next element sibling, skipping text nodes.
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Get the next sibling that carries content: the first following element or
/// non-whitespace text node.
///
/// Field values sit in the node right after their anchor, but the serializer
/// that produced the page sometimes leaves whitespace-only text between the
/// two.
#[must_use]
pub fn next_content_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() || !s.text().trim().is_empty() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Get the element children of the selection's first node, in document order.
#[must_use]
pub fn element_children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    let mut children = Vec::new();
    if let Some(node) = sel.nodes().first() {
        for child in node.children() {
            if child.is_element() {
                children.push(Selection::from(child));
            }
        }
    }
    children
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_content_sibling_skips_whitespace_text() {
        let doc = Document::from("<dl><dt id='a'>Label</dt>\n   <dd>Value</dd></dl>");
        let anchor = doc.select("#a");
        match next_content_sibling(&anchor) {
            Some(sibling) => assert_eq!(text_content(&sibling).trim(), "Value"),
            None => panic!("expected a content sibling"),
        }
    }

    #[test]
    fn next_content_sibling_returns_bare_text_node() {
        let doc = Document::from("<div><span id='a'>Label</span>plain text</div>");
        let anchor = doc.select("#a");
        match next_content_sibling(&anchor) {
            Some(sibling) => assert_eq!(text_content(&sibling).trim(), "plain text"),
            None => panic!("expected a content sibling"),
        }
    }

    #[test]
    fn next_content_sibling_is_none_at_end() {
        let doc = Document::from("<div><span id='a'>Label</span>  </div>");
        let anchor = doc.select("#a");
        assert!(next_content_sibling(&anchor).is_none());
    }

    #[test]
    fn element_children_excludes_text_nodes() {
        let doc = Document::from("<dl id='l'>\n<dt>A</dt>\n<dd>1</dd>\n<dt>B</dt>\n<dd>2</dd>\n</dl>");
        let children = element_children(&doc.select("#l"));
        let texts: Vec<String> = children
            .iter()
            .map(|c| text_content(c).trim().to_string())
            .collect();
        assert_eq!(texts, ["A", "1", "B", "2"]);
    }

    #[test]
    fn element_children_of_empty_selection_is_empty() {
        let doc = Document::from("<div></div>");
        assert!(element_children(&doc.select("#missing")).is_empty());
    }
}
