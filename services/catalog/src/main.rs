use std::process::ExitCode;

use tracing::{error, info};

use netlab_catalog::config::CatalogConfig;
use netlab_catalog::error::CatalogError;
use netlab_catalog::state::Catalog;
use netlab_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(kind = err.kind(), error = ?err, "catalog bootstrap failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CatalogError> {
    let config = CatalogConfig::from_env()?;
    let catalog = Catalog::connect(&config).await?;

    for (table, rows) in catalog.row_counts().await? {
        info!(table, rows, "catalog table ready");
    }
    info!("catalog schema is up to date");
    Ok(())
}
