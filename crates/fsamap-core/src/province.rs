//! Province and territory resolution from an FSA's leading letter.
//!
//! Every leading letter maps to exactly one province except `X`, which is
//! shared by Nunavut and the Northwest Territories and needs the full FSA to
//! decide.

use serde::{Deserialize, Serialize};

use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Province {
    Ab,
    Bc,
    Mb,
    Nb,
    Nl,
    Ns,
    Nt,
    Nu,
    On,
    Pe,
    Qc,
    Sk,
    Yt,
}

impl Province {
    /// Two-letter postal abbreviation.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Province::Ab => "AB",
            Province::Bc => "BC",
            Province::Mb => "MB",
            Province::Nb => "NB",
            Province::Nl => "NL",
            Province::Ns => "NS",
            Province::Nt => "NT",
            Province::Nu => "NU",
            Province::On => "ON",
            Province::Pe => "PE",
            Province::Qc => "QC",
            Province::Sk => "SK",
            Province::Yt => "YT",
        }
    }
}

impl std::fmt::Display for Province {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// How a leading letter maps onto a province.
#[derive(Debug, Clone, Copy)]
pub enum ProvinceRule {
    /// The letter belongs to a single province.
    Direct(Province),
    /// The letter is shared; the full FSA decides.
    Disambiguate(fn(&str) -> Province),
}

impl ProvinceRule {
    fn apply(self, fsa: &str) -> Province {
        match self {
            ProvinceRule::Direct(province) => province,
            ProvinceRule::Disambiguate(resolve) => resolve(fsa),
        }
    }
}

/// The three `X` FSAs that belong to Nunavut.
const NUNAVUT_FSAS: [&str; 3] = ["X0A", "X0B", "X0C"];

fn northern_territory(fsa: &str) -> Province {
    if NUNAVUT_FSAS.contains(&fsa) {
        Province::Nu
    } else {
        Province::Nt
    }
}

const PROVINCE_TABLE: [(char, ProvinceRule); 18] = [
    ('A', ProvinceRule::Direct(Province::Nl)),
    ('B', ProvinceRule::Direct(Province::Ns)),
    ('C', ProvinceRule::Direct(Province::Pe)),
    ('E', ProvinceRule::Direct(Province::Nb)),
    ('G', ProvinceRule::Direct(Province::Qc)),
    ('H', ProvinceRule::Direct(Province::Qc)),
    ('J', ProvinceRule::Direct(Province::Qc)),
    ('K', ProvinceRule::Direct(Province::On)),
    ('L', ProvinceRule::Direct(Province::On)),
    ('M', ProvinceRule::Direct(Province::On)),
    ('N', ProvinceRule::Direct(Province::On)),
    ('P', ProvinceRule::Direct(Province::On)),
    ('R', ProvinceRule::Direct(Province::Mb)),
    ('S', ProvinceRule::Direct(Province::Sk)),
    ('T', ProvinceRule::Direct(Province::Ab)),
    ('V', ProvinceRule::Direct(Province::Bc)),
    ('X', ProvinceRule::Disambiguate(northern_territory)),
    ('Y', ProvinceRule::Direct(Province::Yt)),
];

/// Looks up the rule for a leading letter, if the letter starts any FSA.
#[must_use]
pub fn rule_for(letter: char) -> Option<ProvinceRule> {
    PROVINCE_TABLE
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, rule)| *rule)
}

/// Resolves the province or territory an FSA belongs to.
///
/// # Errors
///
/// - [`CoreError::InvalidFsa`] if `fsa` is empty.
/// - [`CoreError::UnknownLeadingLetter`] if no province uses the FSA's first letter.
pub fn resolve_province(fsa: &str) -> Result<Province, CoreError> {
    let letter = fsa
        .chars()
        .next()
        .ok_or_else(|| CoreError::InvalidFsa(fsa.to_owned()))?;
    rule_for(letter)
        .map(|rule| rule.apply(fsa))
        .ok_or(CoreError::UnknownLeadingLetter(letter))
}
