/// pokydb call-shaping layer
///
/// Everything in this crate is pure: connection-string parsing, bucket name
/// validation, domain types, and the construction of the exact statements and
/// parameter shapes the backend stored procedures expect. Execution lives in
/// `poky-client`.

pub mod error;
pub mod spec;
pub mod sql;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use spec::ConnectionSpec;
pub use sql::{Call, SqlParam};
pub use types::{BatchRecord, KvTuple, MgetCondition, SetOutcome};
pub use validation::validate_bucket_name;
