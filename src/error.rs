use thiserror::Error;

use crate::Endpoint;

#[derive(Debug, Error)]
pub enum Error {
    /// The link to the peripheral could not be established in time.
    #[error("could not connect to {address}: {source}")]
    Connection {
        address: String,
        #[source]
        source: btleplug::Error,
    },

    /// A read or write failed on an established link.
    #[error("{endpoint} access failed: {source}")]
    Communication {
        endpoint: Endpoint,
        #[source]
        source: btleplug::Error,
    },

    #[error("{value} does not fit in a single byte for {endpoint}")]
    Encoding { endpoint: Endpoint, value: i64 },

    #[error("expected 1 byte from {endpoint}, got {len}")]
    Decoding { endpoint: Endpoint, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
