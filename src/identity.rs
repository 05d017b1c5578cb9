//! The comparable identity of an API client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fields every API client reports, gathered into one value.
///
/// `PartialEq`, `Eq`, and `Hash` are derived, so equal identities are
/// guaranteed to hash identically. Equality of `dyn ApiClient` delegates
/// here (see [`crate::ApiClient::identity`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// Remote service family, e.g. a vendor name.
    pub service_host: String,
    /// Root endpoint of the API, or a reference to its documentation.
    pub base_url: String,
    /// Version token of the API, e.g. `v2`.
    pub api_version: String,
    /// When the client's embedded constant metadata was last revised.
    /// Format is the implementer's choice.
    pub last_metadata_update: String,
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "service host: {}", self.service_host)?;
        writeln!(f, "base url: {}", self.base_url)?;
        writeln!(f, "api version: {}", self.api_version)?;
        write!(f, "last metadata update: {}", self.last_metadata_update)
    }
}
