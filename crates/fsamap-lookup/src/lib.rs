pub mod client;
pub mod error;
pub mod retry;
pub mod search;

pub use client::{DistrictLookupClient, PostalCodeLookup};
pub use error::LookupError;
pub use retry::RetryPolicy;
pub use search::{search_fsa, select_candidates, SearchSummary};
