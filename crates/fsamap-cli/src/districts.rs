//! `districts`: enrich the raw district listing and write `districts.json`.

use anyhow::Context;
use fsamap_core::{district_ids, is_known_district, AppConfig, RawDistrict};
use fsamap_scraper::{
    enrich_district, extract_rep_page, find_raw_district, member_page_url, PageClient,
};

use crate::store::Store;

/// Resolves the district ids to process; none given means all of them.
///
/// # Errors
///
/// Returns an error for an id outside the district enumeration.
pub(crate) fn select_districts(requested: &[u16]) -> anyhow::Result<Vec<u16>> {
    if requested.is_empty() {
        return Ok(district_ids().collect());
    }
    if let Some(bad) = requested.iter().find(|id| !is_known_district(**id)) {
        anyhow::bail!("district id {bad} is not a known district");
    }
    let mut ids = requested.to_vec();
    ids.sort_unstable();
    ids.dedup();
    Ok(ids)
}

/// Fetches the raw listing and each member page, then writes the enriched
/// records for the requested ids.
///
/// # Errors
///
/// Returns an error if the listing URL is not configured, a requested id has
/// no raw entry, or any fetch fails. Nothing is written in that case.
pub(crate) async fn run_districts(
    config: &AppConfig,
    store: &Store,
    ids: &[u16],
    dry_run: bool,
) -> anyhow::Result<()> {
    let ids = select_districts(ids)?;
    let source = config.districts_source_url.as_deref().ok_or_else(|| {
        anyhow::anyhow!("FSAMAP_DISTRICTS_SOURCE_URL is not set; cannot run districts")
    })?;

    if dry_run {
        tracing::info!(
            source,
            districts = ids.len(),
            path = %store.districts_path().display(),
            "dry-run: would fetch and enrich districts"
        );
        return Ok(());
    }

    let client = PageClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build page client")?;
    let raws: Vec<RawDistrict> = client
        .fetch_json(source)
        .await
        .context("failed to fetch raw district listing")?;

    // Fail before any member page is fetched.
    let raws = ids
        .iter()
        .map(|id| find_raw_district(&raws, *id))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::with_capacity(raws.len());
    for raw in raws {
        let url = member_page_url(&config.rep_site_base_url, &raw.mpp_url)?;
        let html = client
            .fetch_html(&url)
            .await
            .with_context(|| format!("failed to fetch member page for district {}", raw.id))?;
        let rep = extract_rep_page(&html);
        let record = enrich_district(raw.id, raw, &rep, &config.rep_site_base_url)?;
        tracing::info!(
            district_id = record.id,
            mpp = %record.mpp_name,
            designation = %record.mpp_designation,
            has_email = record.mpp_email.is_some(),
            "enriched district"
        );
        records.push(record);
    }

    store.save_districts(&records)?;
    tracing::info!(
        districts = records.len(),
        path = %store.districts_path().display(),
        "wrote district records"
    );
    Ok(())
}
