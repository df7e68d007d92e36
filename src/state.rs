use std::sync::Arc;

use crate::config::{Backend, Config};
use crate::db::{create_pool, MemoryTableClient, PgTableClient, TableClient};
use crate::errors::QueryError;

/// Shared by every handler through `web::Data`.
pub struct AppState {
    pub client: Arc<dyn TableClient>,
    pub config: Config,
}

impl AppState {
    pub fn new(client: Arc<dyn TableClient>, config: Config) -> Self {
        AppState { client, config }
    }

    pub async fn connect(config: Config) -> Result<Self, QueryError> {
        let client: Arc<dyn TableClient> = match &config.backend {
            Backend::Postgres(url) => Arc::new(PgTableClient::new(create_pool(url).await?)),
            Backend::Memory => Arc::new(MemoryTableClient::new()),
        };
        Ok(AppState::new(client, config))
    }
}
