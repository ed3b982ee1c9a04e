//! Merges a raw district entry with its member's page into a district record.

use fsamap_core::{Designation, DistrictRecord, RawDistrict, PREMIER_DISTRICT_ID};
use reqwest::Url;

use crate::error::ScraperError;
use crate::rep_page::RepPage;

/// Name prefix carried by cabinet ministers.
const HONORIFIC: &str = "Hon.";

/// Leading name tokens that are titles rather than given names.
const TITLE_TOKENS: [&str; 2] = [HONORIFIC, "Premier"];

/// Looks up the raw entry for a requested district.
///
/// # Errors
///
/// Returns [`ScraperError::MissingDistrict`] if the listing has no entry for
/// `id`; the output would otherwise silently lack a district.
pub fn find_raw_district(raws: &[RawDistrict], id: u16) -> Result<&RawDistrict, ScraperError> {
    raws.iter()
        .find(|raw| raw.id == id)
        .ok_or(ScraperError::MissingDistrict { id })
}

/// Resolves a member page link against the legislature site.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the base or the link cannot form
/// an absolute URL.
pub fn member_page_url(site_base: &str, mpp_url: &str) -> Result<String, ScraperError> {
    let base = Url::parse(site_base).map_err(|e| ScraperError::InvalidUrl {
        url: site_base.to_owned(),
        reason: e.to_string(),
    })?;
    base.join(mpp_url.trim())
        .map(String::from)
        .map_err(|e| ScraperError::InvalidUrl {
            url: mpp_url.to_owned(),
            reason: e.to_string(),
        })
}

#[must_use]
pub fn designation_for(id: u16, mpp_name: &str) -> Designation {
    if id == PREMIER_DISTRICT_ID {
        Designation::Premier
    } else if mpp_name.split_whitespace().next() == Some(HONORIFIC) {
        Designation::Minister
    } else {
        Designation::Mpp
    }
}

/// Splits a member's listed name into `(first, last)`.
///
/// A leading title token is skipped for the first name; the last name is
/// always the final token.
#[must_use]
pub fn split_name(mpp_name: &str) -> (String, String) {
    let tokens: Vec<&str> = mpp_name.split_whitespace().collect();
    let given = match tokens.as_slice() {
        [title, given, ..] if TITLE_TOKENS.contains(title) => *given,
        [first, ..] => *first,
        [] => "",
    };
    let last = tokens.last().copied().unwrap_or_default();
    (given.to_owned(), last.to_owned())
}

/// Builds the enriched record for district `id`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if the member page link cannot be
/// resolved against `site_base`.
pub fn enrich_district(
    id: u16,
    raw: &RawDistrict,
    rep: &RepPage,
    site_base: &str,
) -> Result<DistrictRecord, ScraperError> {
    let url = member_page_url(site_base, &raw.mpp_url)?;
    let (mpp_first_name, mpp_last_name) = split_name(&raw.mpp_name);
    if mpp_last_name.is_empty() {
        tracing::warn!(district_id = id, "district has no member name");
    }

    Ok(DistrictRecord {
        id,
        name: raw.name.clone(),
        municipalities: raw.municipalities.clone(),
        population: raw.population,
        area_square_km: raw.area_square_km,
        mpp_url: raw.mpp_url.clone(),
        mpp_name: raw.mpp_name.clone(),
        url,
        mpp_designation: designation_for(id, &raw.mpp_name),
        mpp_first_name,
        mpp_last_name,
        mpp_party: rep.party.clone(),
        mpp_email: rep.email().map(str::to_owned),
        mpp_phone: rep.phone().map(str::to_owned),
    })
}
