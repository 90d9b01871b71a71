use std::sync::Arc;

use transport::{HttpTransport, Transport};

pub mod context;
pub mod security;
pub mod transport;
pub(crate) mod utils;

#[cfg(test)]
pub(crate) mod testutil;

pub use quarry_types::{body::Body, error::Error};

/// Entry point to the Quarry administrative API.
///
/// The underlying transport is shared across all sub-clients and is safe for
/// concurrent use; each service builder obtained from a sub-client is for a
/// single logical request.
pub struct Client {
    pub security: security::Client,
}

impl Client {
    /// Connects to the API at `api_url` using a default reqwest client.
    pub fn new(api_url: impl ToString) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(api_url)))
    }

    /// Builds a client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            security: security::Client::new(Arc::clone(&transport)),
        }
    }
}
