//! Forward sortation area records.

use serde::{Deserialize, Serialize};

use crate::province::Province;

/// Letters that begin at least one FSA, in alphabetical order.
pub const FSA_LEADING_LETTERS: [char; 18] = [
    'A', 'B', 'C', 'E', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V', 'X', 'Y',
];

/// Place names the listing pages use for FSAs with nothing behind them.
const UNUSED_NAMES: [&str; 6] = [
    "Not assigned",
    "Not in use",
    "Not in use / Reserved",
    "Reserved",
    "Commercial Returns",
    "Commercial returns",
];

/// Returns `true` if `code` is an uppercase letter-digit-letter FSA.
#[must_use]
pub fn is_valid_fsa(code: &str) -> bool {
    let bytes = code.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_digit()
        && bytes[2].is_ascii_uppercase()
}

/// Returns `true` if `name` marks an FSA as unassigned or otherwise unused.
#[must_use]
pub fn is_unused_name(name: &str) -> bool {
    UNUSED_NAMES.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FsaType {
    Urban,
    Rural,
}

impl FsaType {
    /// Classifies an FSA: a zero in second position marks a rural area.
    #[must_use]
    pub fn of(fsa: &str) -> Self {
        if fsa.as_bytes().get(1) == Some(&b'0') {
            FsaType::Rural
        } else {
            FsaType::Urban
        }
    }
}

/// One local delivery unit listed under a rural FSA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ldu {
    pub ldu: String,
    pub name: String,
    pub retired: bool,
}

/// Type-dependent part of an FSA record; serialized inline with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsaPayload {
    Urban {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
    Rural {
        ldus: Vec<Ldu>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsaRecord {
    pub fsa: String,
    pub province: Province,
    pub hotspot: bool,
    pub name: String,
    #[serde(flatten)]
    pub payload: FsaPayload,
}

impl FsaRecord {
    #[must_use]
    pub fn fsa_type(&self) -> FsaType {
        match self.payload {
            FsaPayload::Urban { .. } => FsaType::Urban,
            FsaPayload::Rural { .. } => FsaType::Rural,
        }
    }

    /// Known LDUs for a rural FSA; empty for urban ones.
    #[must_use]
    pub fn ldus(&self) -> &[Ldu] {
        match &self.payload {
            FsaPayload::Rural { ldus } => ldus,
            FsaPayload::Urban { .. } => &[],
        }
    }
}
