use std::sync::Arc;

use anyhow::Context;

use invoicelens_api::ApiConfig;
use invoicelens_invoicing::{InvoiceDataset, InvoiceQueryService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    invoicelens_observability::init();

    let config = ApiConfig::from_env()?;

    let dataset = InvoiceDataset::load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    let service = Arc::new(InvoiceQueryService::new(dataset));

    let app = invoicelens_api::app::build_app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
