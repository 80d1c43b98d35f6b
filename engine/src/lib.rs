//! Data model and rules behind the liquidity dashboard API: the literal
//! datasets, credential checks, and the sales/activity query logic.

pub mod auth;
pub mod fixtures;
pub mod query;
mod types;

pub use auth::{authenticate, validate_credentials, CredentialError, Credentials};
pub use query::{activity_limit, summarize, QueryError, SalesQuery};
pub use types::*;
