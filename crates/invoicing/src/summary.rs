use serde::Serialize;
use serde_json::Value;

use invoicelens_core::Amount;

use crate::group::InvoiceGroup;
use crate::status::GroupStatus;

pub const MIN_CREDIT_SCORE: u32 = 300;
pub const MAX_CREDIT_SCORE: u32 = 850;
/// Averages at or above this many days score the minimum. Negative averages are
/// not floored and score above the maximum.
pub const CREDIT_SCORE_DAY_CAP: f64 = 90.0;

/// One logical invoice as returned for a customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceSummary<'a> {
    #[serde(rename = "Invoice Group ID")]
    pub invoice_group_id: &'a str,
    #[serde(rename = "Clean Invoice Ref")]
    pub clean_invoice_ref: &'a Value,
    #[serde(rename = "Date Invoiced")]
    pub date_invoiced: &'a Value,
    #[serde(rename = "Invoice Amount")]
    pub invoice_amount: &'a Value,
    #[serde(rename = "Total Paid")]
    pub total_paid: Amount,
    #[serde(rename = "Status")]
    pub status: GroupStatus,
    #[serde(rename = "Days to Pay")]
    pub days_to_pay: Option<&'a Value>,
}

impl<'a> InvoiceSummary<'a> {
    /// Summarize a group from its latest row.
    pub fn from_group(group: &InvoiceGroup<'a>) -> Self {
        let latest = group.latest();
        Self {
            invoice_group_id: latest.invoice_group_id(),
            clean_invoice_ref: latest.clean_invoice_ref(),
            date_invoiced: latest.date_invoiced(),
            invoice_amount: latest.invoice_amount(),
            total_paid: latest.cumulative_paid(),
            status: GroupStatus::classify(latest.pending_amount()),
            days_to_pay: latest.days_to_pay(),
        }
    }
}

/// Per-customer rollup over that customer's invoice summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    #[serde(rename = "Client Name")]
    pub client_name: String,
    #[serde(rename = "Invoice Count")]
    pub invoice_count: usize,
    #[serde(rename = "Paid")]
    pub paid: usize,
    #[serde(rename = "Overpaid")]
    pub overpaid: usize,
    #[serde(rename = "Due")]
    pub due: usize,
    #[serde(rename = "Total Invoiced")]
    pub total_invoiced: Amount,
    #[serde(rename = "Total Paid")]
    pub total_paid: Amount,
    #[serde(rename = "Average Days to Pay")]
    pub average_days_to_pay: Option<f64>,
    #[serde(rename = "Credit Score")]
    pub credit_score: u32,
}

impl CustomerSummary {
    pub fn from_invoices(client_name: String, invoices: &[InvoiceSummary<'_>]) -> Self {
        let count = |status: GroupStatus| invoices.iter().filter(|i| i.status == status).count();

        let days: Vec<f64> = invoices
            .iter()
            .filter_map(|i| Amount::parse(i.days_to_pay))
            .map(Amount::value)
            .filter(|d| *d != 0.0)
            .collect();
        let average_days_to_pay =
            (!days.is_empty()).then(|| days.iter().sum::<f64>() / days.len() as f64);

        Self {
            client_name,
            invoice_count: invoices.len(),
            paid: count(GroupStatus::Paid),
            overpaid: count(GroupStatus::Overpaid),
            due: count(GroupStatus::Due),
            total_invoiced: invoices
                .iter()
                .map(|i| Amount::from_json(Some(i.invoice_amount)))
                .sum(),
            total_paid: invoices.iter().map(|i| i.total_paid).sum(),
            average_days_to_pay,
            credit_score: credit_score(average_days_to_pay),
        }
    }
}

/// Map an average days-to-pay onto a score: 850 at zero days, 300 at 90 or more.
pub fn credit_score(average_days_to_pay: Option<f64>) -> u32 {
    let Some(avg) = average_days_to_pay else {
        return MIN_CREDIT_SCORE;
    };
    let capped = avg.min(CREDIT_SCORE_DAY_CAP);
    let span = f64::from(MAX_CREDIT_SCORE - MIN_CREDIT_SCORE);
    (f64::from(MAX_CREDIT_SCORE) - capped / CREDIT_SCORE_DAY_CAP * span).round() as u32
}
