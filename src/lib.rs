//! # drugbank-extract
//!
//! Extracts structured drug records from DrugBank HTML pages and loads them
//! into a PostgreSQL `drug_info` schema.
//!
//! Three independent extractors walk each parsed page: the SMILES structure
//! descriptor (undoing the CDN's email-style obfuscation first), the
//! gene/action pairs from the targets section, and the external
//! cross-reference identifiers. Assembled records are written table by table
//! inside one transaction, parent rows first, with all values bound as
//! statement parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use drugbank_extract::{extract_record, Options};
//!
//! let html = r#"<html><body>
//! <dl><dt id="smiles">SMILES</dt><dd>CC(C)CN</dd></dl>
//! <dt id="external-links">External Links</dt>
//! <dd><dl><dt>Wikipedia</dt><dd>Ibuprofen</dd></dl></dd>
//! </body></html>"#;
//!
//! let record = extract_record("DB01050", html, &Options::default())?;
//! assert_eq!(record.smiles.as_deref(), Some("CC(C)CN"));
//! assert!(record.gene_actions.is_empty());
//! # Ok::<(), drugbank_extract::Error>(())
//! ```

mod error;
mod options;
mod record;

/// Decoder for the catalog's byte-XOR obfuscation scheme.
pub mod decode;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Field extractors and the per-page record assembler.
pub mod extractor;

/// Blocking page fetch by catalog identifier.
pub mod fetch;

/// Batch assembly and transactional load into PostgreSQL.
pub mod load;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DENIED_SOURCES};
pub use record::{DrugRecord, GeneAction};

/// Extracts one drug record from an already-fetched page.
///
/// Parses the HTML once and runs all three field extractors over the same
/// tree. Pure: no fetching, no storage.
pub fn extract_record(identifier: &str, html: &str, options: &Options) -> Result<DrugRecord> {
    extractor::assemble_record(identifier, html, options)
}

/// Fetches and assembles records for every identifier, in input order.
///
/// Any failure (fetch, parse, extraction) aborts the whole run; there is no
/// partial-success mode.
pub fn assemble_records(
    fetcher: &fetch::Fetcher,
    identifiers: &[String],
    options: &Options,
) -> Result<Vec<DrugRecord>> {
    let mut records = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        tracing::info!(%identifier, "processing drug page");
        let html = fetcher.fetch(identifier)?;
        records.push(extract_record(identifier, &html, options)?);
    }
    Ok(records)
}
