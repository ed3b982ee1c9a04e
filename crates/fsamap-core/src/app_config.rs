use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub data_dir: PathBuf,
    pub hotspots_path: PathBuf,
    /// FSA listing page URL with a `{letter}` placeholder.
    pub fsa_source_url: String,
    pub districts_source_url: Option<String>,
    pub rep_site_base_url: String,
    pub lookup_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub lookup_delay_ms: u64,
    pub lookup_max_retries: u32,
    pub lookup_hourly_quota: u32,
    pub urban_sample_size: usize,
}

impl AppConfig {
    /// Listing page URL for one leading letter.
    #[must_use]
    pub fn fsa_page_url(&self, letter: char) -> String {
        self.fsa_source_url.replace("{letter}", &letter.to_string())
    }

    /// Worst-case lookups per hour at the configured delay.
    #[must_use]
    pub fn max_lookups_per_hour(&self) -> u64 {
        3_600_000 / self.lookup_delay_ms.max(1)
    }
}
