//! Gene/action-pair extraction from the targets section.
//!
//! Each `.card-body` block under `#targets` describes one target. A block
//! without a gene name contributes nothing. A gene name with N action badges
//! fans out into N pairs; with no actions listed it still yields exactly one
//! action-less pair, so the gene is never lost.

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::record::GeneAction;

const TARGET_BLOCKS: &str = "#targets .card-body";
const GENE_NAME_ANCHOR: &str = "#gene-name";
const ACTIONS_ANCHOR: &str = "#actions";
const ACTION_BADGE: &str = ".badge";

/// Extract ordered gene/action pairs from a parsed drug page.
///
/// A page without a targets section yields an empty sequence; targets are
/// not a required section.
pub fn extract_gene_actions(doc: &Document) -> Result<Vec<GeneAction>> {
    let mut pairs = Vec::new();

    for node in doc.select(TARGET_BLOCKS).nodes() {
        let block = Selection::from(*node);

        let gene_anchor = block.select(GENE_NAME_ANCHOR);
        if gene_anchor.is_empty() {
            // No gene name, nothing worth recording for this target.
            continue;
        }
        let name_node = dom::next_content_sibling(&gene_anchor).ok_or_else(|| {
            Error::MalformedDocument("gene-name anchor has no value node".into())
        })?;
        let gene_name = dom::text_content(&name_node).trim().to_string();

        let actions_anchor = block.select(ACTIONS_ANCHOR);
        if actions_anchor.is_empty() {
            pairs.push(GeneAction {
                gene_name,
                action: None,
            });
            continue;
        }

        let badges: Vec<String> = dom::next_element_sibling(&actions_anchor)
            .map(|list| {
                list.select(ACTION_BADGE)
                    .nodes()
                    .iter()
                    .map(|badge| Selection::from(*badge).text().trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        if badges.is_empty() {
            pairs.push(GeneAction {
                gene_name,
                action: None,
            });
        } else {
            for badge in badges {
                pairs.push(GeneAction {
                    gene_name: gene_name.clone(),
                    action: Some(badge),
                });
            }
        }
    }

    Ok(pairs)
}
