use std::sync::Arc;

use invoicelens_invoicing::{InvoiceDataset, InvoiceQueryService};
use reqwest::StatusCode;
use serde_json::{Value, json};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, backed by the fixture data and an ephemeral port.
        let dataset = InvoiceDataset::from_value(fixture()).expect("fixture must load");
        let app = invoicelens_api::app::build_app(Arc::new(InvoiceQueryService::new(dataset)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get_json(&self, path: &str) -> Value {
        let res = reqwest::get(format!("{}{}", self.base_url, path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "GET {path}");
        res.json().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn fixture() -> Value {
    json!([
        {
            "Client Name": "ACME Corp",
            "Clean Invoice Ref": "A-1",
            "Date Invoiced": "2024-01-05",
            "Invoice Amount": 100,
            "Cumulative Paid": 50,
            "Pending Amount": 50,
            "Invoice Group ID": "a-1",
            "Days to Pay": 10
        },
        {
            "Client Name": "Beta LLC",
            "Clean Invoice Ref": "B-1",
            "Date Invoiced": "2024-01-07",
            "Invoice Amount": 40,
            "Cumulative Paid": 45,
            "Pending Amount": -5,
            "Invoice Group ID": "b-1",
            "Days to Pay": 30
        },
        {
            "Client Name": "ACME Corp",
            "Clean Invoice Ref": "A-1",
            "Date Invoiced": "2024-01-05",
            "Invoice Amount": 100,
            "Cumulative Paid": 100,
            "Pending Amount": 0,
            "Invoice Group ID": "a-1",
            "Days to Pay": 20
        },
        {
            "Client Name": "ACME Corp",
            "Clean Invoice Ref": "A-2",
            "Date Invoiced": "2024-02-01",
            "Invoice Amount": 60,
            "Cumulative Paid": 50,
            "Pending Amount": 10,
            "Invoice Group ID": "a-2"
        }
    ])
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn lists_all_invoices_verbatim() {
    let srv = TestServer::spawn().await;
    let body = srv.get_json("/api/invoices").await;
    assert_eq!(body, fixture());
}

#[tokio::test]
async fn lists_clients_with_and_without_status_filter() {
    let srv = TestServer::spawn().await;

    assert_eq!(srv.get_json("/api/clients").await, json!(["ACME Corp", "Beta LLC"]));
    assert_eq!(srv.get_json("/api/clients?status=due").await, json!(["ACME Corp"]));
    assert_eq!(
        srv.get_json("/api/clients?status=due").await,
        srv.get_json("/api/clients?status=Due").await
    );
    assert_eq!(
        srv.get_json("/api/clients?status=overpaid&status=due").await,
        json!(["ACME Corp", "Beta LLC"])
    );
    assert_eq!(srv.get_json("/api/clients?status=late").await, json!([]));
}

#[tokio::test]
async fn groups_invoices_for_client() {
    let srv = TestServer::spawn().await;

    let body = srv.get_json("/api/invoices/ACME%20Corp").await;
    assert_eq!(
        body,
        json!([
            {
                "Invoice Group ID": "a-1",
                "Clean Invoice Ref": "A-1",
                "Date Invoiced": "2024-01-05",
                "Invoice Amount": 100,
                "Total Paid": 100.0,
                "Status": "Paid",
                "Days to Pay": 20
            },
            {
                "Invoice Group ID": "a-2",
                "Clean Invoice Ref": "A-2",
                "Date Invoiced": "2024-02-01",
                "Invoice Amount": 60,
                "Total Paid": 50.0,
                "Status": "Due",
                "Days to Pay": null
            }
        ])
    );

    let normalized = srv.get_json("/api/invoices/%20%20acme%20corp%20").await;
    assert_eq!(normalized, body);

    assert_eq!(srv.get_json("/api/invoices/Nobody").await, json!([]));
}

#[tokio::test]
async fn invoice_details_by_group_id() {
    let srv = TestServer::spawn().await;

    let body = srv.get_json("/api/invoice-details/a-1").await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Cumulative Paid"], 50);
    assert_eq!(rows[1]["Cumulative Paid"], 100);

    assert_eq!(srv.get_json("/api/invoice-details/nonexistent-id").await, json!([]));
}

#[tokio::test]
async fn client_summary() {
    let srv = TestServer::spawn().await;

    let body = srv.get_json("/api/clients/acme%20corp/summary").await;
    assert_eq!(body["Client Name"], "ACME Corp");
    assert_eq!(body["Invoice Count"], 2);
    assert_eq!(body["Paid"], 1);
    assert_eq!(body["Due"], 1);
    assert_eq!(body["Overpaid"], 0);
    assert_eq!(body["Average Days to Pay"], 20.0);
    assert_eq!(body["Credit Score"], 728);
}

#[tokio::test]
async fn responses_carry_cors_headers() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/clients", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["access-control-allow-origin"], "*");

    let res = client
        .request(reqwest::Method::OPTIONS, format!("{}/api/invoices", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    assert_eq!(res.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/nope", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}
