//! The data endpoints and the static text each one reports on failure.

use strum::{Display, EnumIter, IntoStaticStr};

/// A data-returning endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Endpoint {
    /// `GET /patients`
    Patients,
    /// `GET /providers`
    Providers,
    /// `GET /patients/filter`
    PatientsByFirstName,
    /// `GET /providers/specialty`
    ProvidersBySpecialty,
}

impl Endpoint {
    /// Route path.
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Patients => "/patients",
            Endpoint::Providers => "/providers",
            Endpoint::PatientsByFirstName => "/patients/filter",
            Endpoint::ProvidersBySpecialty => "/providers/specialty",
        }
    }

    /// Plain-text body sent with a 500 when the query fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Endpoint::Patients => "Error retrieving patients",
            Endpoint::Providers => "Error retrieving providers",
            Endpoint::PatientsByFirstName => "Error retrieving patients by first name",
            Endpoint::ProvidersBySpecialty => "Error retrieving providers by specialty",
        }
    }

    /// Metric label, e.g. `patients_by_first_name`.
    pub fn label(self) -> &'static str {
        self.into()
    }
}
