//! JSON files under the data directory.
//!
//! Every file is pretty-printed with a trailing newline and written through a
//! sibling temp file that is renamed into place, so a crash mid-write leaves
//! the previous contents intact.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use fsamap_core::{DistrictRecord, FsaRecord, FsaSearchResults, SearchEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;

const FSAS_FILE: &str = "fsas.json";
const DISTRICTS_FILE: &str = "districts.json";
const LDUS_FILE: &str = "ldus.json";
const SEARCH_DIR: &str = "search";

pub(crate) struct Store {
    dir: PathBuf,
}

impl Store {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn fsas_path(&self) -> PathBuf {
        self.dir.join(FSAS_FILE)
    }

    pub(crate) fn districts_path(&self) -> PathBuf {
        self.dir.join(DISTRICTS_FILE)
    }

    pub(crate) fn ldus_path(&self) -> PathBuf {
        self.dir.join(LDUS_FILE)
    }

    pub(crate) fn search_path(&self, fsa: &str) -> PathBuf {
        self.dir.join(SEARCH_DIR).join(format!("{fsa}.json"))
    }

    pub(crate) fn save_fsas(&self, records: &[FsaRecord]) -> anyhow::Result<()> {
        write_json(&self.fsas_path(), records)
    }

    pub(crate) fn load_fsas(&self) -> anyhow::Result<Option<Vec<FsaRecord>>> {
        read_json(&self.fsas_path())
    }

    pub(crate) fn save_districts(&self, records: &[DistrictRecord]) -> anyhow::Result<()> {
        write_json(&self.districts_path(), records)
    }

    pub(crate) fn ldus_exist(&self) -> bool {
        self.ldus_path().exists()
    }

    pub(crate) fn save_ldus(&self, pool: &[String]) -> anyhow::Result<()> {
        write_json(&self.ldus_path(), pool)
    }

    pub(crate) fn load_ldus(&self) -> anyhow::Result<Option<Vec<String>>> {
        read_json(&self.ldus_path())
    }

    /// Loads the result set for `fsa`, or an empty one if none was saved yet.
    pub(crate) fn load_search(&self, fsa: &str) -> anyhow::Result<FsaSearchResults> {
        let entries: Vec<SearchEntry> = read_json(&self.search_path(fsa))?.unwrap_or_default();
        Ok(FsaSearchResults::from_entries(fsa, entries))
    }

    pub(crate) fn save_search(&self, results: &FsaSearchResults) -> anyhow::Result<()> {
        write_json(&self.search_path(results.fsa()), results.entries())
    }
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let mut body = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    body.push('\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).with_context(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("failed to move {} into place", path.display()))?;
    Ok(())
}

/// Reads and parses `path`; a missing file is `Ok(None)`.
fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Option<T>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("failed to read {}", path.display())),
    };
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(value))
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
