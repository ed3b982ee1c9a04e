pub mod app_config;
pub mod config;
pub mod district;
pub mod fsa;
pub mod hotspots;
pub mod ldu_pool;
pub mod province;
pub mod search;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use district::{
    district_ids, is_known_district, Designation, DistrictRecord, RawDistrict, DISTRICT_COUNT,
    PREMIER_DISTRICT_ID,
};
pub use fsa::{
    is_unused_name, is_valid_fsa, FsaPayload, FsaRecord, FsaType, Ldu, FSA_LEADING_LETTERS,
};
pub use hotspots::{load_hotspots, HotspotList};
pub use ldu_pool::{generate_ldu_pool, generate_seeded_ldu_pool, validate_ldu_pool, LDU_POOL_SIZE};
pub use province::{resolve_province, Province, ProvinceRule};
pub use search::{postal_code, FsaSearchResults, SearchEntry};

use thiserror::Error;

/// Errors raised by the pure reference-data operations in this crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid FSA \"{0}\": expected letter-digit-letter")]
    InvalidFsa(String),

    #[error("no province or territory has FSAs starting with '{0}'")]
    UnknownLeadingLetter(char),

    #[error("invalid LDU pool: {0}")]
    InvalidLduPool(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read hotspots file {path}: {source}")]
    HotspotsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse hotspots file: {0}")]
    HotspotsFileParse(#[source] serde_yaml::Error),

    #[error("hotspot list entry \"{0}\" is not a valid FSA")]
    InvalidHotspot(String),

    #[error("duplicate hotspot FSA: {0}")]
    DuplicateHotspot(String),
}
