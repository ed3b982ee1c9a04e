//! HTTP client for the electoral-district postal-code search.
//!
//! The endpoint takes one postal code per request and answers with a JSON
//! payload that is stored verbatim; nothing here interprets it.

use std::future::Future;
use std::time::Duration;

use fsamap_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::LookupError;

/// Query parameter carrying the postal code.
const SEARCH_PARAM: &str = "searchText";

/// One postal code in, one opaque JSON payload out.
///
/// The search engine depends on this rather than on the HTTP client so it
/// can be driven by an in-memory fake.
pub trait PostalCodeLookup {
    fn lookup(
        &self,
        postal: &str,
    ) -> impl Future<Output = Result<serde_json::Value, LookupError>> + Send;
}

pub struct DistrictLookupClient {
    client: Client,
    base_url: Url,
}

impl DistrictLookupClient {
    /// Creates a client from the configured endpoint, timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// See [`Self::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, LookupError> {
        Self::with_base_url(
            &config.lookup_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client pointed at `base_url` (a mock server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`LookupError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url).map_err(|e| LookupError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Builds the request URL for one postal code, keeping any query
    /// parameters already present on the base URL.
    fn build_url(&self, postal: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair(SEARCH_PARAM, postal);
        url
    }

    async fn request(&self, postal: &str) -> Result<serde_json::Value, LookupError> {
        let url = self.build_url(postal);
        tracing::debug!(postal, "looking up postal code");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                postal: postal.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| LookupError::Deserialize {
            context: postal.to_owned(),
            source: e,
        })
    }
}

impl PostalCodeLookup for DistrictLookupClient {
    fn lookup(
        &self,
        postal: &str,
    ) -> impl Future<Output = Result<serde_json::Value, LookupError>> + Send {
        self.request(postal)
    }
}
