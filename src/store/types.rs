//! Row types returned by the store.

use chrono::NaiveDate;
use serde::Serialize;

/// One row of the `patients` projection.
///
/// Field names match the selected column names, so the serialized JSON keys
/// are exactly `patient_id`, `first_name`, `last_name` and `date_of_birth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Patient {
    /// Database identifier. Wide enough for signed `INT` and `BIGINT` keys.
    pub patient_id: i64,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Calendar date of birth, serialized as `YYYY-MM-DD`.
    pub date_of_birth: Option<NaiveDate>,
}

/// One row of the `providers` projection. No identifier is exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Provider {
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Specialty, e.g. `Cardiology`.
    pub provider_specialty: Option<String>,
}

impl Patient {
    /// Build a fully populated patient row.
    pub fn new(patient_id: i64, first_name: &str, last_name: &str, date_of_birth: NaiveDate) -> Self {
        Self {
            patient_id,
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            date_of_birth: Some(date_of_birth),
        }
    }
}

impl Provider {
    /// Build a fully populated provider row.
    pub fn new(first_name: &str, last_name: &str, provider_specialty: &str) -> Self {
        Self {
            first_name: Some(first_name.to_string()),
            last_name: Some(last_name.to_string()),
            provider_specialty: Some(provider_specialty.to_string()),
        }
    }
}
