use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use invoicelens_core::{Amount, DomainError, DomainResult};

pub const CLIENT_NAME: &str = "Client Name";
pub const CLEAN_INVOICE_REF: &str = "Clean Invoice Ref";
pub const DATE_INVOICED: &str = "Date Invoiced";
pub const INVOICE_AMOUNT: &str = "Invoice Amount";
pub const CUMULATIVE_PAID: &str = "Cumulative Paid";
pub const PENDING_AMOUNT: &str = "Pending Amount";
pub const INVOICE_GROUP_ID: &str = "Invoice Group ID";
pub const DAYS_TO_PAY: &str = "Days to Pay";

/// One raw invoice line as loaded from the dataset.
///
/// The full source object is kept so it can be served back verbatim (unknown
/// fields included). The fields the query layer reads are validated once on
/// construction and cached.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct InvoiceRow {
    fields: Map<String, Value>,
    client_name: String,
    invoice_group_id: String,
    cumulative_paid: Amount,
    pending_amount: Amount,
}

impl InvoiceRow {
    /// Validate a raw JSON object as an invoice row.
    pub fn from_fields(fields: Map<String, Value>) -> DomainResult<Self> {
        let client_name = required_str(&fields, CLIENT_NAME)?.to_string();
        let invoice_group_id = required_str(&fields, INVOICE_GROUP_ID)?.to_string();
        for field in [CLEAN_INVOICE_REF, DATE_INVOICED, INVOICE_AMOUNT] {
            if !fields.contains_key(field) {
                return Err(DomainError::missing_field(field));
            }
        }

        let cumulative_paid = Amount::from_json(fields.get(CUMULATIVE_PAID));
        let pending_amount = Amount::from_json(fields.get(PENDING_AMOUNT));

        Ok(Self {
            fields,
            client_name,
            invoice_group_id,
            cumulative_paid,
            pending_amount,
        })
    }

    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub fn invoice_group_id(&self) -> &str {
        &self.invoice_group_id
    }

    pub fn clean_invoice_ref(&self) -> &Value {
        self.field(CLEAN_INVOICE_REF)
    }

    pub fn date_invoiced(&self) -> &Value {
        self.field(DATE_INVOICED)
    }

    pub fn invoice_amount(&self) -> &Value {
        self.field(INVOICE_AMOUNT)
    }

    pub fn cumulative_paid(&self) -> Amount {
        self.cumulative_paid
    }

    pub fn pending_amount(&self) -> Amount {
        self.pending_amount
    }

    /// `Days to Pay`, if the source row carries the field at all.
    pub fn days_to_pay(&self) -> Option<&Value> {
        self.fields.get(DAYS_TO_PAY)
    }

    /// The untouched source object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    // Required fields are checked in `from_fields`.
    fn field(&self, name: &str) -> &Value {
        self.fields.get(name).unwrap_or(&Value::Null)
    }
}

impl TryFrom<Map<String, Value>> for InvoiceRow {
    type Error = DomainError;

    fn try_from(fields: Map<String, Value>) -> DomainResult<Self> {
        Self::from_fields(fields)
    }
}

impl TryFrom<Value> for InvoiceRow {
    type Error = DomainError;

    fn try_from(value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(fields) => Self::from_fields(fields),
            _ => Err(DomainError::validation("invoice row must be a JSON object")),
        }
    }
}

impl Serialize for InvoiceRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

fn required_str<'a>(fields: &'a Map<String, Value>, field: &'static str) -> DomainResult<&'a str> {
    match fields.get(field) {
        None => Err(DomainError::missing_field(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(DomainError::invalid_field(field, "a string")),
    }
}
