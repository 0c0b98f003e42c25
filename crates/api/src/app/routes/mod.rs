use axum::{Router, routing::get};

pub mod clients;
pub mod invoices;
pub mod system;

/// Router for the `/api` tree.
pub fn router() -> Router {
    Router::new()
        .route("/invoices", get(invoices::list_invoices))
        .route("/invoices/:client", get(invoices::list_customer_invoices))
        .route("/invoice-details/:group_id", get(invoices::get_invoice_details))
        .route("/clients", get(clients::list_clients))
        .route("/clients/:client/summary", get(clients::get_client_summary))
}
