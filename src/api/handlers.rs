//! HTTP API handlers.

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::error::StoreError;
use crate::metrics::{self, QueryTimer};
use crate::store::{ClinicStore, Patient, Provider};

use super::endpoint::Endpoint;

/// Body of the health check.
pub const HEALTH_MESSAGE: &str = "Server is running successfully";

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store every data handler queries through.
    pub store: Arc<dyn ClinicStore>,
}

impl AppState {
    /// Create new app state around a store.
    pub fn new(store: impl ClinicStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create app state around an already shared store.
    pub fn from_shared(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }
}

/// Why a data endpoint could not produce rows.
#[derive(Error, Debug)]
pub enum FailureCause {
    /// The store failed to run the query.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The query string could not be turned into a bind value.
    #[error("unusable query string: {0}")]
    Parameters(#[from] QueryRejection),
}

/// A request that failed behind one of the data endpoints.
///
/// Responds with 500 and the endpoint's static message only. The underlying
/// error is logged and never sent to the client.
#[derive(Error, Debug)]
#[error("{endpoint} query failed: {source}")]
pub struct QueryFailure {
    /// Endpoint whose request failed.
    pub endpoint: Endpoint,
    /// Underlying cause.
    #[source]
    pub source: FailureCause,
}

impl IntoResponse for QueryFailure {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.endpoint.failure_message()).into_response()
    }
}

/// Query string of `/patients/filter`.
#[derive(Debug, Default, Deserialize)]
pub struct FirstNameParams {
    /// Exact first name to match. Absent binds as SQL NULL.
    pub first_name: Option<String>,
}

/// Query string of `/providers/specialty`.
#[derive(Debug, Default, Deserialize)]
pub struct SpecialtyParams {
    /// Exact specialty to match. Absent binds as SQL NULL.
    pub specialty: Option<String>,
}

async fn run_query<T, F>(endpoint: Endpoint, query: F) -> Result<Json<Vec<T>>, QueryFailure>
where
    F: Future<Output = Result<Vec<T>, StoreError>>,
{
    let timer = QueryTimer::start(endpoint);

    match query.await {
        Ok(rows) => {
            debug!(
                endpoint = %endpoint,
                rows = rows.len(),
                elapsed_ms = timer.elapsed_ms(),
                "Query succeeded"
            );
            Ok(Json(rows))
        }
        Err(source) => {
            metrics::inc_query_failures(endpoint);
            error!(endpoint = %endpoint, error = %source, "Query failed");
            Err(QueryFailure {
                endpoint,
                source: source.into(),
            })
        }
    }
}

/// Unwrap the extracted query string, or fail the endpoint without querying.
///
/// A rejected query string (e.g. a repeated parameter) gets the endpoint's
/// static 500 like any other failure, never the extractor's own error text.
fn accept_params<T>(
    endpoint: Endpoint,
    params: Result<Query<T>, QueryRejection>,
) -> Result<T, QueryFailure> {
    match params {
        Ok(Query(params)) => Ok(params),
        Err(rejection) => {
            error!(endpoint = %endpoint, error = %rejection, "Rejected query string");
            Err(QueryFailure {
                endpoint,
                source: rejection.into(),
            })
        }
    }
}

/// Health check handler - always returns 200, whatever the database state.
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}

/// `GET /patients`
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Patient>>, QueryFailure> {
    run_query(Endpoint::Patients, state.store.list_patients()).await
}

/// `GET /providers`
pub async fn list_providers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Provider>>, QueryFailure> {
    run_query(Endpoint::Providers, state.store.list_providers()).await
}

/// `GET /patients/filter?first_name=...`
pub async fn patients_by_first_name(
    State(state): State<AppState>,
    params: Result<Query<FirstNameParams>, QueryRejection>,
) -> Result<Json<Vec<Patient>>, QueryFailure> {
    let params = accept_params(Endpoint::PatientsByFirstName, params)?;
    run_query(
        Endpoint::PatientsByFirstName,
        state.store.patients_by_first_name(params.first_name.as_deref()),
    )
    .await
}

/// `GET /providers/specialty?specialty=...`
pub async fn providers_by_specialty(
    State(state): State<AppState>,
    params: Result<Query<SpecialtyParams>, QueryRejection>,
) -> Result<Json<Vec<Provider>>, QueryFailure> {
    let params = accept_params(Endpoint::ProvidersBySpecialty, params)?;
    run_query(
        Endpoint::ProvidersBySpecialty,
        state.store.providers_by_specialty(params.specialty.as_deref()),
    )
    .await
}
