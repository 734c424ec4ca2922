//! SQL statements issued by the store.
//!
//! Filter values are only ever supplied through `?` placeholders and `bind`;
//! none of these strings is ever formatted with request data.

/// Every patient row.
pub const SELECT_PATIENTS: &str =
    "SELECT patient_id, first_name, last_name, date_of_birth FROM patients";

/// Every provider row.
pub const SELECT_PROVIDERS: &str =
    "SELECT first_name, last_name, provider_specialty FROM providers";

/// Patients whose first name equals the bound value.
pub const SELECT_PATIENTS_BY_FIRST_NAME: &str =
    "SELECT patient_id, first_name, last_name, date_of_birth FROM patients WHERE first_name = ?";

/// Providers whose specialty equals the bound value.
pub const SELECT_PROVIDERS_BY_SPECIALTY: &str =
    "SELECT first_name, last_name, provider_specialty FROM providers WHERE provider_specialty = ?";

/// Connectivity probe.
pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_use_a_single_placeholder() {
        for sql in [SELECT_PATIENTS_BY_FIRST_NAME, SELECT_PROVIDERS_BY_SPECIALTY] {
            assert_eq!(sql.matches('?').count(), 1);
            assert!(sql.ends_with("= ?"));
        }
    }

    #[test]
    fn filters_select_the_same_columns_as_listings() {
        assert!(SELECT_PATIENTS_BY_FIRST_NAME.starts_with(SELECT_PATIENTS));
        assert!(SELECT_PROVIDERS_BY_SPECIALTY.starts_with(SELECT_PROVIDERS));
    }
}
