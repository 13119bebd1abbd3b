//! Record assembly: one parsed page in, one [`DrugRecord`] out.
//!
//! The three field extractors are independent and read-only over the same
//! document tree; the assembler parses once and runs all of them.

mod external_links;
mod gene_actions;
mod smiles;

pub use external_links::extract_external_links;
pub use gene_actions::extract_gene_actions;
pub use smiles::extract_smiles;

use crate::dom::Document;
use crate::error::Result;
use crate::options::Options;
use crate::record::DrugRecord;

/// Assemble one record from a catalog identifier and its raw page HTML.
pub fn assemble_record(identifier: &str, html: &str, options: &Options) -> Result<DrugRecord> {
    let doc = Document::from(html);

    let smiles = extract_smiles(&doc)?;
    let gene_actions = extract_gene_actions(&doc)?;
    let external_links = extract_external_links(&doc, options)?;

    tracing::debug!(
        identifier,
        has_smiles = smiles.is_some(),
        gene_actions = gene_actions.len(),
        external_links = external_links.len(),
        "assembled drug record"
    );

    Ok(DrugRecord {
        identifier: identifier.to_string(),
        smiles,
        gene_actions,
        external_links,
    })
}
