use std::collections::HashSet;

use invoicelens_core::CustomerKey;

use crate::dataset::InvoiceDataset;
use crate::group::group_rows;
use crate::row::InvoiceRow;
use crate::status::GroupStatus;
use crate::summary::{CustomerSummary, InvoiceSummary};

/// Read-only query surface over an [`InvoiceDataset`].
///
/// Every method is a pure read; the service can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct InvoiceQueryService {
    dataset: InvoiceDataset,
}

impl InvoiceQueryService {
    pub fn new(dataset: InvoiceDataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &InvoiceDataset {
        &self.dataset
    }

    /// Every loaded row, as loaded.
    pub fn list_invoices(&self) -> &[InvoiceRow] {
        self.dataset.rows()
    }

    /// Sorted customer names, optionally restricted to those with at least one
    /// invoice group in any of the given statuses.
    ///
    /// Tokens are matched case-insensitively; unrecognized tokens match nothing.
    pub fn list_customers<I, S>(&self, status_tokens: I) -> Vec<&str>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<S> = status_tokens.into_iter().collect();
        let customers = self.dataset.customers().iter().map(String::as_str);
        if tokens.is_empty() {
            return customers.collect();
        }

        let wanted: HashSet<GroupStatus> = tokens
            .iter()
            .filter_map(|t| GroupStatus::from_token(t.as_ref()))
            .collect();

        customers
            .filter(|c| {
                self.dataset
                    .statuses_of(c)
                    .is_some_and(|statuses| statuses.iter().any(|s| wanted.contains(s)))
            })
            .collect()
    }

    /// One summary per logical invoice of a customer, in first-seen order.
    ///
    /// The name is matched ignoring case and surrounding whitespace.
    pub fn customer_invoices(&self, customer_name: &str) -> Vec<InvoiceSummary<'_>> {
        let key = CustomerKey::new(customer_name);
        let rows = self
            .dataset
            .rows()
            .iter()
            .filter(|r| key.matches(r.client_name()));

        let summaries: Vec<_> = group_rows(rows)
            .iter()
            .map(InvoiceSummary::from_group)
            .collect();
        tracing::debug!(customer = %key, groups = summaries.len(), "grouped customer invoices");
        summaries
    }

    /// Raw rows belonging to one invoice group, in load order.
    pub fn invoice_details(&self, group_id: &str) -> Vec<&InvoiceRow> {
        let rows: Vec<&InvoiceRow> = self
            .dataset
            .rows()
            .iter()
            .filter(|r| r.invoice_group_id() == group_id)
            .collect();
        tracing::debug!(group_id, matched = rows.len(), "looked up invoice group");
        rows
    }

    /// Status counts, totals and payment-speed score for one customer.
    pub fn customer_summary(&self, customer_name: &str) -> CustomerSummary {
        let key = CustomerKey::new(customer_name);
        let display_name = self
            .dataset
            .rows()
            .iter()
            .find(|r| key.matches(r.client_name()))
            .map(|r| r.client_name().to_string())
            .unwrap_or_else(|| customer_name.trim().to_string());

        CustomerSummary::from_invoices(display_name, &self.customer_invoices(customer_name))
    }
}
