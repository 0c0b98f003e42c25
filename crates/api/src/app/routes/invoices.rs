use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use invoicelens_invoicing::InvoiceQueryService;

pub async fn list_invoices(
    Extension(service): Extension<Arc<InvoiceQueryService>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(service.list_invoices())).into_response()
}

pub async fn list_customer_invoices(
    Extension(service): Extension<Arc<InvoiceQueryService>>,
    Path(client): Path<String>,
) -> axum::response::Response {
    let items = service.customer_invoices(&client);
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_invoice_details(
    Extension(service): Extension<Arc<InvoiceQueryService>>,
    Path(group_id): Path<String>,
) -> axum::response::Response {
    let rows = service.invoice_details(&group_id);
    (StatusCode::OK, Json(rows)).into_response()
}
