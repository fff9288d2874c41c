use std::future::Future;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::config::ClientConfig;
use crate::error::Error;

/// Header asking the range API to pad responses with zero-count records.
const ADD_PADDING_HEADER: &str = "add-padding";

/// Something that can answer a range query: given a 5 character hash prefix,
/// return the raw `SUFFIX:COUNT` response body.
///
/// [`RangeClient`] talks to the real service. Tests and offline tools can supply
/// their own implementation.
pub trait RangeSource {
    fn range(&self, prefix: &str) -> impl Future<Output = Result<String, Error>> + Send;
}

/// HTTP client for the Pwned Passwords range endpoint.
///
/// Every lookup is a single independent GET with no retries and no caching.
#[derive(Debug, Clone)]
pub struct RangeClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RangeClient {
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        if config.add_padding {
            headers.insert(ADD_PADDING_HEADER, HeaderValue::from_static("true"));
        }

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(Error::Client)?;

        Ok(Self { http, config })
    }

    /// Fetches the range response for `prefix`.
    ///
    /// Returns the body verbatim on `200 OK`, [`Error::HttpStatus`] for any other
    /// status (a 204 or 206 would otherwise read as "never leaked") and [`Error::HttpRequest`] if the request itself failed.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn lookup(&self, prefix: &str) -> Result<String, Error> {
        let url = self.config.range_url(prefix);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "range lookup rejected");
            return Err(Error::HttpStatus { prefix: prefix.to_string(), status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        tracing::debug!(bytes = body.len(), "range lookup succeeded");

        Ok(body)
    }
}

impl RangeSource for RangeClient {
    async fn range(&self, prefix: &str) -> Result<String, Error> {
        self.lookup(prefix).await
    }
}
