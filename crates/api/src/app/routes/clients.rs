use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
};

use invoicelens_invoicing::InvoiceQueryService;

use crate::app::dto;

pub async fn list_clients(
    Extension(service): Extension<Arc<InvoiceQueryService>>,
    Query(params): Query<Vec<(String, String)>>,
) -> axum::response::Response {
    let clients = service.list_customers(dto::status_tokens(&params));
    (StatusCode::OK, Json(clients)).into_response()
}

pub async fn get_client_summary(
    Extension(service): Extension<Arc<InvoiceQueryService>>,
    Path(client): Path<String>,
) -> axum::response::Response {
    (StatusCode::OK, Json(service.customer_summary(&client))).into_response()
}
