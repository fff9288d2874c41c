#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error(
        "HTTP {status} for prefix {prefix}. Something went wrong. Please check your password \
         again and read the API documentation."
    )]
    HttpStatus { prefix: String, status: u16 },

    #[error("malformed range record on line {line_number}: {line:?}")]
    MalformedRecord { line_number: usize, line: String },
}
