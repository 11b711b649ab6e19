//! HTTP client for the disclosure platform's JSON API.
//!
//! Wraps `reqwest` with platform-specific error handling and the
//! list-or-envelope response tolerance the endpoint needs. The base URL is
//! overridable so tests can point the client at a mock server.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::KapError;
use crate::types::{Disclosure, DisclosureQuery};

const DEFAULT_BASE_URL: &str = "https://www.kap.org.tr";
const BY_CRITERIA_PATH: &str = "tr/api/disclosure/members/byCriteria";

/// Client for the disclosure platform API.
///
/// Use [`KapClient::new`] for production or [`KapClient::with_base_url`] to
/// point at a mock server in tests.
pub struct KapClient {
    client: Client,
    base_url: Url,
}

impl KapClient {
    /// Creates a new client pointed at the production platform.
    ///
    /// # Errors
    ///
    /// Returns [`KapError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, KapError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`KapError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`KapError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, KapError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join() appends the API path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|_| KapError::InvalidBaseUrl(base_url.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Queries the disclosures matching `query`.
    ///
    /// The endpoint normally returns a bare JSON array; some deployments wrap
    /// it as `{"data": [...]}`. Both shapes are accepted, anything else is
    /// treated as an empty result.
    ///
    /// # Errors
    ///
    /// - [`KapError::Http`] on network failure or non-2xx HTTP status.
    /// - [`KapError::Deserialize`] if the body is not valid JSON, or a
    ///   recognised list shape fails to parse into [`Disclosure`] records.
    pub async fn query_disclosures(
        &self,
        query: &DisclosureQuery,
    ) -> Result<Vec<Disclosure>, KapError> {
        let url = self.by_criteria_url();

        let response = self.client.post(url.clone()).json(query).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let body: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| KapError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Self::records_from_body(body, &url)
    }

    /// Extracts the record list from either response shape.
    fn records_from_body(
        body: serde_json::Value,
        url: &Url,
    ) -> Result<Vec<Disclosure>, KapError> {
        let list = match body {
            serde_json::Value::Array(_) => body,
            serde_json::Value::Object(mut map) => match map.remove("data") {
                Some(data @ serde_json::Value::Array(_)) => data,
                _ => {
                    tracing::warn!(url = %url, "unexpected response shape, treating as empty");
                    return Ok(Vec::new());
                }
            },
            _ => {
                tracing::warn!(url = %url, "unexpected response shape, treating as empty");
                return Ok(Vec::new());
            }
        };

        serde_json::from_value(list).map_err(|e| KapError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    fn by_criteria_url(&self) -> Url {
        // Base URL is normalised with a trailing slash in the constructor, so
        // join cannot fail on a relative path.
        self.base_url
            .join(BY_CRITERIA_PATH)
            .unwrap_or_else(|_| self.base_url.clone())
    }
}
