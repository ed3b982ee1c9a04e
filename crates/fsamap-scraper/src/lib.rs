pub mod cell_text;
pub mod client;
pub mod enrich;
pub mod error;
pub mod fsa_table;
pub mod rep_page;

pub use client::PageClient;
pub use enrich::{
    designation_for, enrich_district, find_raw_district, member_page_url, split_name,
};
pub use error::ScraperError;
pub use fsa_table::extract_fsa_records;
pub use rep_page::{extract_rep_page, RepPage};
