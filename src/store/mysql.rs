//! MySQL-backed store.

use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::StoreError;

use super::queries::{
    PING, SELECT_PATIENTS, SELECT_PATIENTS_BY_FIRST_NAME, SELECT_PROVIDERS,
    SELECT_PROVIDERS_BY_SPECIALTY,
};
use super::types::{Patient, Provider};
use super::ClinicStore;

/// Store backed by a shared `MySqlPool`.
///
/// Each query checks a connection out of the pool for its own duration and
/// returns it when the query finishes, whether it succeeded or not.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Wrap an existing pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Build a pool from configuration without connecting.
    ///
    /// Connections are opened on first use, so an unreachable database does
    /// not prevent the server from starting.
    pub fn connect_lazy(config: &Config) -> Self {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.db_max_connections)
            .connect_lazy_with(config.connect_options());

        debug!(
            host = %config.db_host,
            port = config.db_port,
            max_connections = config.db_max_connections,
            "MySQL pool created"
        );

        Self { pool }
    }

    /// Underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl ClinicStore for MySqlStore {
    #[instrument(skip(self))]
    async fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        let rows = sqlx::query_as::<_, Patient>(SELECT_PATIENTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        let rows = sqlx::query_as::<_, Provider>(SELECT_PROVIDERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn patients_by_first_name(
        &self,
        first_name: Option<&str>,
    ) -> Result<Vec<Patient>, StoreError> {
        let rows = sqlx::query_as::<_, Patient>(SELECT_PATIENTS_BY_FIRST_NAME)
            .bind(first_name)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    async fn providers_by_specialty(
        &self,
        specialty: Option<&str>,
    ) -> Result<Vec<Provider>, StoreError> {
        let rows = sqlx::query_as::<_, Provider>(SELECT_PROVIDERS_BY_SPECIALTY)
            .bind(specialty)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query(PING).execute(&self.pool).await?;
        Ok(())
    }
}
