use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::fsa::is_valid_fsa;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
pub struct HotspotsFile {
    pub hotspots: Vec<String>,
}

/// The fixed set of FSAs flagged as priority areas.
#[derive(Debug, Clone, Default)]
pub struct HotspotList {
    fsas: HashSet<String>,
}

impl HotspotList {
    /// Builds a list from FSA codes, rejecting malformed or repeated codes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHotspot`] or [`ConfigError::DuplicateHotspot`].
    pub fn from_codes<I, S>(codes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fsas = HashSet::new();
        for code in codes {
            let code = code.as_ref().trim();
            if !is_valid_fsa(code) {
                return Err(ConfigError::InvalidHotspot(code.to_owned()));
            }
            if !fsas.insert(code.to_owned()) {
                return Err(ConfigError::DuplicateHotspot(code.to_owned()));
            }
        }
        Ok(Self { fsas })
    }

    #[must_use]
    pub fn contains(&self, fsa: &str) -> bool {
        self.fsas.contains(fsa)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fsas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fsas.is_empty()
    }
}

/// Load and validate the hotspot list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_hotspots(path: &Path) -> Result<HotspotList, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::HotspotsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: HotspotsFile =
        serde_yaml::from_str(&content).map_err(ConfigError::HotspotsFileParse)?;

    HotspotList::from_codes(&file.hotspots)
}
