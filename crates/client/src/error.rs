/// Failure of a single catalog request.
///
/// Covers network failures, undecodable bodies, and non-success statuses.
/// The `Display` output is the human-readable message shown to operators.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The store API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl TransportError {
    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
