//! Batch load of assembled records into the `drug_info` schema.
//!
//! Records are flattened into three row groups, assigned positional
//! surrogate ids, and written with parameterized multi-row INSERTs inside a
//! single transaction: `drugs` first, then the two tables that reference it.
//! Any failure (including a uniqueness violation) aborts the transaction
//! with no partial writes, so re-running a load against a non-empty target
//! fails rather than colliding silently.

use std::time::Duration;

use postgres::types::ToSql;
use postgres::{Client, NoTls};

use crate::error::Result;
use crate::record::DrugRecord;

/// Connection parameters for the target store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub connect_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            password: "password".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            dbname: "postgres".to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl StoreConfig {
    /// Open the single connection a load run uses.
    pub fn connect(&self) -> Result<Client> {
        let client = postgres::Config::new()
            .user(&self.user)
            .password(&self.password)
            .host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .connect_timeout(self.connect_timeout)
            .connect(NoTls)?;
        Ok(client)
    }
}

/// One row for `drug_info.drugs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugRow {
    pub drug_id: i32,
    pub smiles: Option<String>,
}

/// One row for `drug_info.alternate_identifiers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateIdentifierRow {
    pub drug_id: i32,
    pub source: String,
    pub value: String,
}

/// One row for `drug_info.gene_actions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneActionRow {
    pub drug_id: i32,
    pub gene_name: String,
    pub action: Option<String>,
}

/// The three row groups a load run writes, in dependency order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBatch {
    pub drugs: Vec<DrugRow>,
    pub alternate_identifiers: Vec<AlternateIdentifierRow>,
    pub gene_actions: Vec<GeneActionRow>,
}

impl LoadBatch {
    /// Flatten records into rows, assigning each record a surrogate id equal
    /// to its 0-based position in the input sequence.
    #[must_use]
    pub fn from_records(records: &[DrugRecord]) -> Self {
        let mut batch = Self::default();

        for (drug_id, record) in (0_i32..).zip(records) {
            batch.drugs.push(DrugRow {
                drug_id,
                smiles: record.smiles.clone(),
            });

            for pair in &record.gene_actions {
                batch.gene_actions.push(GeneActionRow {
                    drug_id,
                    gene_name: pair.gene_name.clone(),
                    action: pair.action.clone(),
                });
            }

            for (source, value) in &record.external_links {
                batch.alternate_identifiers.push(AlternateIdentifierRow {
                    drug_id,
                    source: source.clone(),
                    value: value.clone(),
                });
            }
        }

        batch
    }

    /// Execute the batch as one transaction, parent table first.
    ///
    /// Returns the total number of rows inserted. All values are bound as
    /// statement parameters; extracted text never reaches the SQL text.
    pub fn execute(&self, client: &mut Client) -> Result<u64> {
        let mut transaction = client.transaction()?;
        let mut inserted = 0;

        if !self.drugs.is_empty() {
            let statement =
                insert_statement("drug_info.drugs", &["drug_id", "smiles"], self.drugs.len());
            let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(self.drugs.len() * 2);
            for row in &self.drugs {
                params.push(&row.drug_id);
                params.push(&row.smiles);
            }
            inserted += transaction.execute(statement.as_str(), &params)?;
        }

        if !self.alternate_identifiers.is_empty() {
            let statement = insert_statement(
                "drug_info.alternate_identifiers",
                &["drug_id", "identifier_source", "identifier_value"],
                self.alternate_identifiers.len(),
            );
            let mut params: Vec<&(dyn ToSql + Sync)> =
                Vec::with_capacity(self.alternate_identifiers.len() * 3);
            for row in &self.alternate_identifiers {
                params.push(&row.drug_id);
                params.push(&row.source);
                params.push(&row.value);
            }
            inserted += transaction.execute(statement.as_str(), &params)?;
        }

        if !self.gene_actions.is_empty() {
            let statement = insert_statement(
                "drug_info.gene_actions",
                &["drug_id", "gene_name", "gene_action"],
                self.gene_actions.len(),
            );
            let mut params: Vec<&(dyn ToSql + Sync)> =
                Vec::with_capacity(self.gene_actions.len() * 3);
            for row in &self.gene_actions {
                params.push(&row.drug_id);
                params.push(&row.gene_name);
                params.push(&row.action);
            }
            inserted += transaction.execute(statement.as_str(), &params)?;
        }

        transaction.commit()?;
        Ok(inserted)
    }
}

/// Load a collection of records in one transaction.
pub fn load_records(client: &mut Client, records: &[DrugRecord]) -> Result<u64> {
    let batch = LoadBatch::from_records(records);
    tracing::info!(
        drugs = batch.drugs.len(),
        alternate_identifiers = batch.alternate_identifiers.len(),
        gene_actions = batch.gene_actions.len(),
        "executing batch load"
    );
    let inserted = batch.execute(client)?;
    tracing::info!(inserted, "batch load committed");
    Ok(inserted)
}

/// Build a multi-row INSERT with `$n` placeholders for `rows` rows.
fn insert_statement(table: &str, columns: &[&str], rows: usize) -> String {
    let width = columns.len();
    let values = (0..rows)
        .map(|row| {
            let placeholders = (1..=width)
                .map(|col| format!("${}", row * width + col))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({placeholders})")
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES {values}",
        columns.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GeneAction;
    use std::collections::BTreeMap;

    fn record(
        identifier: &str,
        smiles: Option<&str>,
        gene_actions: Vec<GeneAction>,
        links: &[(&str, &str)],
    ) -> DrugRecord {
        DrugRecord {
            identifier: identifier.to_string(),
            smiles: smiles.map(ToString::to_string),
            gene_actions,
            external_links: links
                .iter()
                .map(|(s, v)| ((*s).to_string(), (*v).to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn insert_statement_numbers_placeholders_row_major() {
        let sql = insert_statement("drug_info.drugs", &["drug_id", "smiles"], 3);
        assert_eq!(
            sql,
            "INSERT INTO drug_info.drugs (drug_id, smiles) VALUES ($1, $2), ($3, $4), ($5, $6)"
        );
    }

    #[test]
    fn insert_statement_single_row() {
        let sql = insert_statement("t", &["a", "b", "c"], 1);
        assert_eq!(sql, "INSERT INTO t (a, b, c) VALUES ($1, $2, $3)");
    }

    #[test]
    fn from_records_assigns_positional_ids() {
        let records = vec![
            record("DB0001", Some("CCO"), vec![], &[]),
            record("DB0002", None, vec![], &[]),
            record("DB0003", Some("CCN"), vec![], &[]),
        ];
        let batch = LoadBatch::from_records(&records);
        assert_eq!(
            batch.drugs,
            [
                DrugRow { drug_id: 0, smiles: Some("CCO".to_string()) },
                DrugRow { drug_id: 1, smiles: None },
                DrugRow { drug_id: 2, smiles: Some("CCN".to_string()) },
            ]
        );
        assert!(batch.alternate_identifiers.is_empty());
        assert!(batch.gene_actions.is_empty());
    }

    #[test]
    fn from_records_flattens_children_under_parent_id() {
        let records = vec![
            record(
                "DB0001",
                Some("CCO"),
                vec![
                    GeneAction::new("F2", Some("inhibitor")),
                    GeneAction::new("F10", None),
                ],
                &[("Wikipedia", "Ethanol")],
            ),
            record(
                "DB0002",
                None,
                vec![GeneAction::new("PTGS2", Some("inhibitor"))],
                &[("KEGG Drug", "D00109"), ("ChEMBL", "CHEMBL25")],
            ),
        ];
        let batch = LoadBatch::from_records(&records);

        assert_eq!(batch.gene_actions.len(), 3);
        assert_eq!(batch.gene_actions[0].drug_id, 0);
        assert_eq!(batch.gene_actions[1].drug_id, 0);
        assert_eq!(batch.gene_actions[1].action, None);
        assert_eq!(batch.gene_actions[2].drug_id, 1);

        assert_eq!(batch.alternate_identifiers.len(), 3);
        assert_eq!(batch.alternate_identifiers[0].drug_id, 0);
        assert_eq!(batch.alternate_identifiers[0].source, "Wikipedia");
        assert_eq!(batch.alternate_identifiers[1].drug_id, 1);
        assert_eq!(batch.alternate_identifiers[2].drug_id, 1);
    }

    #[test]
    fn empty_input_builds_empty_batch() {
        let batch = LoadBatch::from_records(&[]);
        assert_eq!(batch, LoadBatch::default());
    }
}
