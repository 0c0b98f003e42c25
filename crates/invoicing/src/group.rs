use std::collections::HashMap;

use serde_json::Value;

use crate::row::InvoiceRow;
use crate::status::GroupStatus;

/// Identity of a logical invoice: `(Clean Invoice Ref, Date Invoiced, Invoice Amount)`.
///
/// Numbers compare by value (`100 == 100.0`, `0.0 == -0.0`); everything else by
/// its exact JSON form, so `"100"` and `100` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    clean_invoice_ref: KeyPart,
    date_invoiced: KeyPart,
    invoice_amount: KeyPart,
}

impl GroupKey {
    pub fn of(row: &InvoiceRow) -> Self {
        Self {
            clean_invoice_ref: KeyPart::of(row.clean_invoice_ref()),
            date_invoiced: KeyPart::of(row.date_invoiced()),
            invoice_amount: KeyPart::of(row.invoice_amount()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum KeyPart {
    /// Bit pattern of the `f64` value, with `-0.0` folded into `0.0`.
    Number(u64),
    Other(String),
}

impl KeyPart {
    fn of(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(f) if f == 0.0 => KeyPart::Number(0.0f64.to_bits()),
                Some(f) => KeyPart::Number(f.to_bits()),
                None => KeyPart::Other(n.to_string()),
            },
            other => KeyPart::Other(other.to_string()),
        }
    }
}

/// The rows making up one logical invoice, in load order.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceGroup<'a> {
    key: GroupKey,
    rows: Vec<&'a InvoiceRow>,
}

impl<'a> InvoiceGroup<'a> {
    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub fn rows(&self) -> &[&'a InvoiceRow] {
        &self.rows
    }

    /// The row reflecting the most recent payment state: highest `Cumulative Paid`.
    ///
    /// Ties keep the earliest row.
    pub fn latest(&self) -> &'a InvoiceRow {
        let mut latest = self.rows[0];
        for row in &self.rows[1..] {
            if row.cumulative_paid() > latest.cumulative_paid() {
                latest = *row;
            }
        }
        latest
    }

    pub fn status(&self) -> GroupStatus {
        GroupStatus::classify(self.latest().pending_amount())
    }
}

/// Group rows by [`GroupKey`] in a single pass, keeping first-seen group order.
pub fn group_rows<'a, I>(rows: I) -> Vec<InvoiceGroup<'a>>
where
    I: IntoIterator<Item = &'a InvoiceRow>,
{
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<InvoiceGroup<'a>> = Vec::new();

    for row in rows {
        let key = GroupKey::of(row);
        match index.get(&key) {
            Some(&i) => groups[i].rows.push(row),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(InvoiceGroup {
                    key,
                    rows: vec![row],
                });
            }
        }
    }

    groups
}
