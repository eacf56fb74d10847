/// pokydb client library
///
/// A synchronous, pooled PostgreSQL client exposing key-value semantics. All
/// storage logic lives backend-side in stored procedures; this crate owns the
/// connection lifecycle (lazy bounded pool, scoped acquire/release) and the
/// translation of get/set/delete and batch operations into the exact calls
/// the procedures expect.

pub mod error;
pub mod executor;
pub mod partition;
pub mod pool;
pub mod store;

pub use error::{Error, Result};
pub use partition::BucketCreation;
pub use pool::{PoolHandle, PoolSettings};
pub use store::{Store, StoreConfig};

// Re-export the call-shaping types callers interact with.
pub use poky_core::{BatchRecord, ConnectionSpec, KvTuple, MgetCondition, SetOutcome};
