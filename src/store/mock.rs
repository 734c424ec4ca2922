//! In-memory store for unit testing.
//!
//! Filters follow SQL equality: exact, case-sensitive, and a `None` value
//! never matches, the same as `col = NULL`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::StoreError;

use super::types::{Patient, Provider};
use super::ClinicStore;

/// Configuration for mock store behavior.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Whether every query (and ping) should fail as if the database were down.
    pub fail_queries: bool,
    /// Simulated latency in milliseconds.
    pub latency_ms: u64,
}

/// Mock store holding rows in memory.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    /// Mock configuration.
    config: MockConfig,
    /// Patient rows, in insertion order.
    patients: Arc<Mutex<Vec<Patient>>>,
    /// Provider rows, in insertion order.
    providers: Arc<Mutex<Vec<Provider>>>,
    /// Every filter value bound so far.
    bound: Arc<Mutex<Vec<Option<String>>>>,
}

impl MockStore {
    /// Create an empty, healthy mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store with custom configuration.
    pub fn with_config(config: MockConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a mock store whose every query fails.
    pub fn failing() -> Self {
        Self::with_config(MockConfig {
            fail_queries: true,
            ..Default::default()
        })
    }

    /// Append a patient row.
    pub fn add_patient(&self, patient: Patient) {
        self.patients.lock().unwrap().push(patient);
    }

    /// Append a provider row.
    pub fn add_provider(&self, provider: Provider) {
        self.providers.lock().unwrap().push(provider);
    }

    /// Filter values received by the filter queries, oldest first.
    pub fn bound_values(&self) -> Vec<Option<String>> {
        self.bound.lock().unwrap().clone()
    }

    /// Clear all mock data.
    pub fn clear(&self) {
        self.patients.lock().unwrap().clear();
        self.providers.lock().unwrap().clear();
        self.bound.lock().unwrap().clear();
    }

    async fn simulate(&self) -> Result<(), StoreError> {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        if self.config.fail_queries {
            return Err(StoreError::Unavailable(
                "Mock connection refused".to_string(),
            ));
        }

        Ok(())
    }

    fn record(&self, value: Option<&str>) {
        self.bound.lock().unwrap().push(value.map(str::to_string));
    }
}

fn sql_eq(column: &Option<String>, value: Option<&str>) -> bool {
    match (column.as_deref(), value) {
        (Some(column), Some(value)) => column == value,
        _ => false,
    }
}

#[async_trait]
impl ClinicStore for MockStore {
    async fn list_patients(&self) -> Result<Vec<Patient>, StoreError> {
        self.simulate().await?;
        Ok(self.patients.lock().unwrap().clone())
    }

    async fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        self.simulate().await?;
        Ok(self.providers.lock().unwrap().clone())
    }

    async fn patients_by_first_name(
        &self,
        first_name: Option<&str>,
    ) -> Result<Vec<Patient>, StoreError> {
        self.record(first_name);
        self.simulate().await?;

        let patients = self.patients.lock().unwrap();
        Ok(patients
            .iter()
            .filter(|p| sql_eq(&p.first_name, first_name))
            .cloned()
            .collect())
    }

    async fn providers_by_specialty(
        &self,
        specialty: Option<&str>,
    ) -> Result<Vec<Provider>, StoreError> {
        self.record(specialty);
        self.simulate().await?;

        let providers = self.providers.lock().unwrap();
        Ok(providers
            .iter()
            .filter(|p| sql_eq(&p.provider_specialty, specialty))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.simulate().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn filter_is_exact_and_case_sensitive() {
        let store = MockStore::new();
        store.add_patient(Patient::new(1, "John", "Smith", dob()));
        store.add_patient(Patient::new(2, "john", "Doe", dob()));
        store.add_patient(Patient::new(3, "John ", "Roe", dob()));

        let rows = store.patients_by_first_name(Some("John")).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].patient_id, 1);
    }

    #[tokio::test]
    async fn absent_filter_matches_nothing() {
        let store = MockStore::new();
        store.add_provider(Provider::new("Ana", "Lee", "Cardiology"));
        store.add_provider(Provider {
            first_name: Some("Bo".to_string()),
            last_name: Some("Kim".to_string()),
            provider_specialty: None,
        });

        let rows = store.providers_by_specialty(None).await.unwrap();

        assert!(rows.is_empty());
        assert_eq!(store.bound_values(), vec![None::<String>]);
    }

    #[tokio::test]
    async fn preserves_insertion_order() {
        let store = MockStore::new();
        store.add_provider(Provider::new("Zed", "A", "Oncology"));
        store.add_provider(Provider::new("Amy", "B", "Oncology"));

        let rows = store.providers_by_specialty(Some("Oncology")).await.unwrap();

        assert_eq!(rows[0].first_name.as_deref(), Some("Zed"));
        assert_eq!(rows[1].first_name.as_deref(), Some("Amy"));
    }

    #[test]
    fn failure_mode_fails_every_query() {
        let store = MockStore::failing();

        tokio_test::block_on(async {
            assert!(store.list_patients().await.is_err());
            assert!(store.list_providers().await.is_err());
            assert!(store.patients_by_first_name(Some("John")).await.is_err());
            assert!(store.providers_by_specialty(Some("Cardiology")).await.is_err());
            assert!(store.ping().await.is_err());
        });
    }

    #[tokio::test]
    async fn clear_removes_rows_and_bindings() {
        let store = MockStore::new();
        store.add_patient(Patient::new(1, "John", "Smith", dob()));
        store.patients_by_first_name(Some("John")).await.unwrap();

        store.clear();

        assert!(store.list_patients().await.unwrap().is_empty());
        assert!(store.bound_values().is_empty());
    }
}
