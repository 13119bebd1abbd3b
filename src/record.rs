//! Record types for extraction output.
//!
//! One [`DrugRecord`] is assembled per catalog identifier and consumed
//! exactly once by the batch load. Records have no identity beyond a single
//! load run; the surrogate `drug_id` is assigned positionally at load time.

use std::collections::BTreeMap;

use serde::Serialize;

/// One gene/action relationship extracted from a target block.
///
/// A gene with several listed actions produces one pair per action; a gene
/// with none produces a single pair with `action: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneAction {
    /// Gene name from the target block.
    pub gene_name: String,

    /// Action badge text, if any.
    pub action: Option<String>,
}

impl GeneAction {
    /// Convenience constructor used by the extractor and tests.
    #[must_use]
    pub fn new(gene_name: impl Into<String>, action: Option<&str>) -> Self {
        Self {
            gene_name: gene_name.into(),
            action: action.map(ToString::to_string),
        }
    }
}

/// Structured data extracted from one drug catalog page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrugRecord {
    /// External catalog accession (e.g. "DB00006").
    pub identifier: String,

    /// SMILES structure descriptor. `None` when the page shows
    /// "Not Available". Canonicality is not validated; the page text is
    /// stored as-is.
    pub smiles: Option<String>,

    /// Ordered gene/action pairs from the targets section.
    pub gene_actions: Vec<GeneAction>,

    /// Cross-reference source name to identifier value, deny-listed sources
    /// excluded. Last write wins if a source repeats.
    pub external_links: BTreeMap<String, String>,
}
