//! Read-only HTTP query layer over a clinic's `patients` and `providers`
//! tables.
//!
//! Each request is routed to one handler, which runs a single parameterized
//! `SELECT` through the injected store and answers with a JSON array of rows,
//! or with a fixed plain-text 500 when the query fails.
//!
//! ```text
//! GET /                      -> "Server is running successfully"
//! GET /patients              -> [{patient_id, first_name, last_name, date_of_birth}]
//! GET /providers             -> [{first_name, last_name, provider_specialty}]
//! GET /patients/filter       ?first_name=...
//! GET /providers/specialty   ?specialty=...
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Row types, SQL statements, MySQL and mock stores
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Query latency and failure metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
