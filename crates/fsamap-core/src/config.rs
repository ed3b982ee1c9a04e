use crate::app_config::AppConfig;
use crate::ldu_pool::LDU_POOL_SIZE;
use crate::ConfigError;

pub(crate) const DEFAULT_FSA_SOURCE_URL: &str =
    "https://en.wikipedia.org/wiki/List_of_postal_codes_of_Canada:_{letter}";
pub(crate) const DEFAULT_REP_SITE_BASE_URL: &str = "https://www.ola.org";
pub(crate) const DEFAULT_LOOKUP_BASE_URL: &str =
    "https://voterinformationservice.elections.on.ca/api/electoral-district-search/en/postal-code";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let log_level = or_default("FSAMAP_LOG_LEVEL", "info");
    let data_dir = PathBuf::from(or_default("FSAMAP_DATA_DIR", "./data"));
    let hotspots_path = PathBuf::from(or_default(
        "FSAMAP_HOTSPOTS_PATH",
        "./config/hotspots.yaml",
    ));

    let fsa_source_url = or_default("FSAMAP_FSA_SOURCE_URL", DEFAULT_FSA_SOURCE_URL);
    if !fsa_source_url.contains("{letter}") {
        return Err(invalid(
            "FSAMAP_FSA_SOURCE_URL",
            "must contain a {letter} placeholder".to_string(),
        ));
    }
    let districts_source_url = lookup("FSAMAP_DISTRICTS_SOURCE_URL").ok();
    let rep_site_base_url = or_default("FSAMAP_REP_SITE_BASE_URL", DEFAULT_REP_SITE_BASE_URL);
    let lookup_base_url = or_default("FSAMAP_LOOKUP_BASE_URL", DEFAULT_LOOKUP_BASE_URL);

    let request_timeout_secs = parse_u64("FSAMAP_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FSAMAP_USER_AGENT", "fsamap/0.1 (reference-data)");

    let lookup_delay_ms = parse_u64("FSAMAP_LOOKUP_DELAY_MS", "4000")?;
    let lookup_max_retries = parse_u32("FSAMAP_LOOKUP_MAX_RETRIES", "3")?;
    let lookup_hourly_quota = parse_u32("FSAMAP_LOOKUP_HOURLY_QUOTA", "1000")?;
    if lookup_delay_ms == 0 {
        return Err(invalid(
            "FSAMAP_LOOKUP_DELAY_MS",
            "must be greater than zero".to_string(),
        ));
    }
    let max_per_hour = 3_600_000 / lookup_delay_ms;
    if max_per_hour > u64::from(lookup_hourly_quota) {
        return Err(invalid(
            "FSAMAP_LOOKUP_DELAY_MS",
            format!(
                "{lookup_delay_ms} ms allows {max_per_hour} lookups per hour, \
                 above the quota of {lookup_hourly_quota}"
            ),
        ));
    }

    let urban_sample_size = parse_usize("FSAMAP_URBAN_SAMPLE_SIZE", "600")?;
    if urban_sample_size == 0 || urban_sample_size > LDU_POOL_SIZE {
        return Err(invalid(
            "FSAMAP_URBAN_SAMPLE_SIZE",
            format!("must be between 1 and {LDU_POOL_SIZE}"),
        ));
    }

    Ok(AppConfig {
        log_level,
        data_dir,
        hotspots_path,
        fsa_source_url,
        districts_source_url,
        rep_site_base_url,
        lookup_base_url,
        request_timeout_secs,
        user_agent,
        lookup_delay_ms,
        lookup_max_retries,
        lookup_hourly_quota,
        urban_sample_size,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
