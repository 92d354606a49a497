use thiserror::Error;

/// Errors from a single availability check. All variants are scoped to one
/// keycode; the check loop reports them and moves on to the next SKU.
#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The GraphQL envelope carried `errors` or a null `data` field.
    #[error("availability API error: {0}")]
    Api(String),

    /// The payload parsed but the availability tree was absent.
    #[error("no availability data returned for keycode {keycode}")]
    MissingAvailability { keycode: String },
}

impl AvailabilityError {
    /// `true` for transport/HTTP-status failures, `false` for everything that
    /// went wrong while interpreting an otherwise delivered response. The
    /// check loop uses this to label per-SKU failures as network vs unexpected.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            AvailabilityError::Http(_) | AvailabilityError::UnexpectedStatus { .. }
        )
    }
}
