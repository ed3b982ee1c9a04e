use fsamap_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The listing page has no table to read FSA cells from.
    #[error("no FSA table found in {context}")]
    MissingTable { context: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("district {id} is missing from the raw district listing")]
    MissingDistrict { id: u16 },
}
