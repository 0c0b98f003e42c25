//! Loaded invoice rows plus the indexes precomputed over them.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use invoicelens_core::DomainError;

use crate::group::group_rows;
use crate::row::InvoiceRow;
use crate::status::GroupStatus;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read invoice data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invoice data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invoice data must be a JSON array of rows")]
    NotAnArray,
    #[error("invalid invoice row at index {index}: {source}")]
    InvalidRow {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Immutable invoice data set.
///
/// Built once before serving; every index is derived here and never recomputed.
#[derive(Debug, Clone, Default)]
pub struct InvoiceDataset {
    rows: Vec<InvoiceRow>,
    customers: Vec<String>,
    client_statuses: HashMap<String, BTreeSet<GroupStatus>>,
}

impl InvoiceDataset {
    pub fn new(rows: Vec<InvoiceRow>) -> Self {
        let customers: BTreeSet<&str> = rows.iter().map(InvoiceRow::client_name).collect();
        let customers: Vec<String> = customers.into_iter().map(str::to_string).collect();

        let mut by_client: HashMap<&str, Vec<&InvoiceRow>> = HashMap::new();
        for row in &rows {
            by_client.entry(row.client_name()).or_default().push(row);
        }

        let client_statuses = by_client
            .into_iter()
            .map(|(client, client_rows)| {
                let statuses = group_rows(client_rows)
                    .iter()
                    .map(|g| g.status())
                    .collect::<BTreeSet<_>>();
                (client.to_string(), statuses)
            })
            .collect();

        Self {
            rows,
            customers,
            client_statuses,
        }
    }

    /// Load a JSON array of rows from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            rows = dataset.rows.len(),
            customers = dataset.customers.len(),
            "loaded invoice data"
        );
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DatasetError> {
        let Value::Array(items) = value else {
            return Err(DatasetError::NotAnArray);
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                InvoiceRow::try_from(item).map_err(|source| DatasetError::InvalidRow { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[InvoiceRow] {
        &self.rows
    }

    /// Distinct customer names, sorted lexically as stored.
    pub fn customers(&self) -> &[String] {
        &self.customers
    }

    /// Statuses across a customer's invoice groups (exact name match).
    pub fn statuses_of(&self, client: &str) -> Option<&BTreeSet<GroupStatus>> {
        self.client_statuses.get(client)
    }
}
