//! Error types for the service.
//!
//! The analyzer itself has no error type: it is total over any parseable
//! document. Everything that can fail -- initialization, fetching, storage,
//! request handling -- is classified here.

mod types;

pub use types::{DatabaseError, FetchError, InitializationError};
