//! Invoice query domain.
//!
//! This crate shapes a loaded set of invoice rows for querying: it groups rows into
//! logical invoices, classifies each group's payment status and precomputes the
//! per-customer indexes the query service reads. No HTTP, no storage.

pub mod dataset;
pub mod group;
pub mod row;
pub mod service;
pub mod status;
pub mod summary;

pub use dataset::{DatasetError, InvoiceDataset};
pub use group::{GroupKey, InvoiceGroup, group_rows};
pub use row::InvoiceRow;
pub use service::InvoiceQueryService;
pub use status::GroupStatus;
pub use summary::{CustomerSummary, InvoiceSummary, credit_score};
