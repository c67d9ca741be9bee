use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FbError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The chart endpoint answered with an error object instead of a result.
    ///
    /// The message is the provider's own description (e.g. an unknown symbol).
    #[error("{description}")]
    Upstream {
        /// Provider error code, e.g. `Not Found`.
        code: String,
        /// Human readable description from the provider.
        description: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An invalid date range was provided for a chart request (start must be before end).
    #[error("invalid date range: start must be before end")]
    InvalidDates,

    /// Configuration could not be loaded or failed validation.
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem or socket failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
