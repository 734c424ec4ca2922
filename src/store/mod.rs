//! Data access for the `patients` and `providers` tables.
//!
//! This module handles:
//! - Row types for both projections
//! - The SQL statements the service is allowed to issue
//! - The `ClinicStore` seam handlers query through
//! - A MySQL pool implementation and an in-memory mock for testing

pub mod mock;
pub mod mysql;
pub mod queries;
pub mod types;

use async_trait::async_trait;

use crate::error::StoreError;

pub use mock::MockStore;
pub use mysql::MySqlStore;
pub use types::{Patient, Provider};

/// Read-only access to the clinic tables.
///
/// Filter values are passed through untouched. `None` is bound as SQL `NULL`,
/// which never compares equal, so an absent filter yields no rows.
#[async_trait]
pub trait ClinicStore: Send + Sync + 'static {
    /// All patients in database order.
    async fn list_patients(&self) -> Result<Vec<Patient>, StoreError>;

    /// All providers in database order.
    async fn list_providers(&self) -> Result<Vec<Provider>, StoreError>;

    /// Patients whose `first_name` equals `first_name` exactly.
    async fn patients_by_first_name(
        &self,
        first_name: Option<&str>,
    ) -> Result<Vec<Patient>, StoreError>;

    /// Providers whose `provider_specialty` equals `specialty` exactly.
    async fn providers_by_specialty(
        &self,
        specialty: Option<&str>,
    ) -> Result<Vec<Provider>, StoreError>;

    /// Round-trip to the database without touching either table.
    async fn ping(&self) -> Result<(), StoreError>;
}
