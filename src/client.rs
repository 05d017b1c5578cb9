//! The API client contract.
//!
//! This module defines the trait every concrete API client wrapper must
//! implement. The trait abstraction enables:
//!
//! - Treating heterogeneous clients polymorphically behind `dyn ApiClient`
//! - Easy mocking in unit tests via [`mock::StaticClient`]
//! - Swapping implementations (e.g., different API providers)
//!
//! # Example
//!
//! ```
//! use api_client_contract::{ApiClient, ClientIdentity};
//!
//! #[derive(Debug)]
//! struct AcmeClient;
//!
//! impl ApiClient for AcmeClient {
//!     fn service_host(&self) -> &str {
//!         "Acme"
//!     }
//!     fn base_url(&self) -> &str {
//!         "https://acme.com/api/v2"
//!     }
//!     fn api_version(&self) -> &str {
//!         "v2"
//!     }
//!     fn last_metadata_update(&self) -> &str {
//!         "2026-01-15T09:30:00+00:00"
//!     }
//! }
//!
//! let client = AcmeClient;
//! assert!(client.describe().contains("api version: v2"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::identity::ClientIdentity;

/// Contract every concrete API client implementation must satisfy.
///
/// Implementers report where their service lives and which version of it
/// they target. The provided methods derive a comparable identity and a
/// human-readable summary from those reports; overriding them is allowed
/// but rarely needed.
///
/// The `Debug` bound keeps trait objects printable in assertions and logs;
/// [`describe`](ApiClient::describe) is the human-facing representation.
pub trait ApiClient: fmt::Debug + Send + Sync {
    /// The remote service family this client talks to, e.g. a vendor name.
    fn service_host(&self) -> &str;

    /// Root endpoint of the API, e.g. `https://acme.com/api/v2`.
    ///
    /// For clients wrapping a local library this may instead point at the
    /// library's documentation.
    fn base_url(&self) -> &str;

    /// Version token of the API this client targets, e.g. `v2`.
    fn api_version(&self) -> &str;

    /// When the client's embedded constant metadata was last added to or
    /// revised.
    ///
    /// The format is the implementer's choice;
    /// [`normalize_timestamp`](crate::normalize_timestamp) produces a
    /// canonical RFC 3339 UTC form for those who want one.
    fn last_metadata_update(&self) -> &str;

    /// The comparable identity of this client.
    ///
    /// Equality and hashing of `dyn ApiClient` delegate here, so two
    /// clients reporting the same fields compare equal and hash
    /// identically.
    fn identity(&self) -> ClientIdentity {
        ClientIdentity {
            service_host: self.service_host().to_string(),
            base_url: self.base_url().to_string(),
            api_version: self.api_version().to_string(),
            last_metadata_update: self.last_metadata_update().to_string(),
        }
    }

    /// An informative multi-line summary of this client.
    fn describe(&self) -> String {
        self.identity().to_string()
    }
}

impl<'a> PartialEq for dyn ApiClient + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl<'a> Eq for dyn ApiClient + 'a {}

impl<'a> Hash for dyn ApiClient + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(clippy::missing_const_for_fn, clippy::must_use_candidate)]
pub mod mock {
    //! Static implementation for unit testing.

    use super::ApiClient;

    /// In-memory [`ApiClient`] whose reported fields are fixed at
    /// construction. Useful as a stand-in where a test needs some client
    /// but no real provider.
    #[derive(Debug, Clone)]
    pub struct StaticClient {
        service_host: String,
        base_url: String,
        api_version: String,
        last_metadata_update: String,
    }

    impl StaticClient {
        /// Create a client reporting exactly the given fields.
        pub fn new(
            service_host: impl Into<String>,
            base_url: impl Into<String>,
            api_version: impl Into<String>,
            last_metadata_update: impl Into<String>,
        ) -> Self {
            Self {
                service_host: service_host.into(),
                base_url: base_url.into(),
                api_version: api_version.into(),
                last_metadata_update: last_metadata_update.into(),
            }
        }
    }

    impl ApiClient for StaticClient {
        fn service_host(&self) -> &str {
            &self.service_host
        }

        fn base_url(&self) -> &str {
            &self.base_url
        }

        fn api_version(&self) -> &str {
            &self.api_version
        }

        fn last_metadata_update(&self) -> &str {
            &self.last_metadata_update
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::StaticClient;
    use super::*;

    fn acme() -> StaticClient {
        StaticClient::new(
            "Acme",
            "https://acme.com/api/v2",
            "v2",
            "2026-01-15T09:30:00+00:00",
        )
    }

    #[test]
    fn identity_collects_reported_fields() {
        let identity = acme().identity();
        assert_eq!(identity.service_host, "Acme");
        assert_eq!(identity.base_url, "https://acme.com/api/v2");
        assert_eq!(identity.api_version, "v2");
        assert_eq!(identity.last_metadata_update, "2026-01-15T09:30:00+00:00");
    }

    #[test]
    fn describe_renders_the_identity() {
        let client = acme();
        assert_eq!(client.describe(), client.identity().to_string());
        assert!(client.describe().lines().count() > 1);
    }

    #[test]
    fn trait_objects_compare_by_identity() {
        let a: Box<dyn ApiClient> = Box::new(acme());
        let b: Box<dyn ApiClient> = Box::new(acme());
        let c: Box<dyn ApiClient> = Box::new(StaticClient::new(
            "Acme",
            "https://acme.com/api/v3",
            "v3",
            "2026-01-15T09:30:00+00:00",
        ));

        assert_eq!(&a, &b);
        assert_ne!(&a, &c);
    }
}
