//! Shared contract for API client implementations.
//!
//! Concrete API client crates implement [`ApiClient`] so that calling code
//! can hold heterogeneous clients behind one trait: ask any of them where
//! their service lives, which API version they target, and when their
//! embedded metadata was last revised, without knowing the concrete type.
//!
//! Equality and hashing of clients are defined over [`ClientIdentity`], a
//! plain value assembled from the reported fields. Both are derived on that
//! value, so two equal clients always hash identically.

mod client;
pub use client::ApiClient;

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;

mod identity;
pub use identity::ClientIdentity;

mod timestamp;
pub use timestamp::{normalize_timestamp, TimestampError};
