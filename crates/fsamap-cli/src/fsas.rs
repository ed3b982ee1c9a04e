//! `fsas`: fetch every listing page and write `fsas.json`.

use anyhow::Context;
use fsamap_core::{load_hotspots, AppConfig, FSA_LEADING_LETTERS};
use fsamap_scraper::{extract_fsa_records, PageClient};

use crate::store::Store;

/// Resolves the letters to fetch; none given means every leading letter.
///
/// # Errors
///
/// Returns an error for anything that is not a single valid leading letter.
pub(crate) fn select_letters(requested: &[String]) -> anyhow::Result<Vec<char>> {
    if requested.is_empty() {
        return Ok(FSA_LEADING_LETTERS.to_vec());
    }

    let mut letters = Vec::with_capacity(requested.len());
    for raw in requested {
        let mut chars = raw.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => anyhow::bail!("\"{raw}\" is not a single letter"),
        };
        if !FSA_LEADING_LETTERS.contains(&letter) {
            anyhow::bail!("no FSA starts with '{letter}'");
        }
        if !letters.contains(&letter) {
            letters.push(letter);
        }
    }
    letters.sort_unstable();
    Ok(letters)
}

/// Fetches and extracts the listing page of each requested letter.
///
/// Only the processed letters end up in `fsas.json`; a failure on any page
/// aborts the run before anything is written.
///
/// # Errors
///
/// Returns an error if the hotspot list cannot be loaded, a page cannot be
/// fetched, or a page cannot be parsed.
pub(crate) async fn run_fsas(
    config: &AppConfig,
    store: &Store,
    letters: &[String],
    dry_run: bool,
) -> anyhow::Result<()> {
    let letters = select_letters(letters)?;

    if dry_run {
        for letter in &letters {
            tracing::info!(%letter, url = %config.fsa_page_url(*letter), "dry-run: would fetch");
        }
        tracing::info!(
            letters = letters.len(),
            path = %store.fsas_path().display(),
            "dry-run: would write FSA records"
        );
        return Ok(());
    }

    let hotspots = load_hotspots(&config.hotspots_path)?;
    let client = PageClient::new(config.request_timeout_secs, &config.user_agent)
        .context("failed to build page client")?;

    let mut records = Vec::new();
    for letter in letters {
        let url = config.fsa_page_url(letter);
        let html = client
            .fetch_html(&url)
            .await
            .with_context(|| format!("failed to fetch FSA listing for '{letter}'"))?;
        let page_records = extract_fsa_records(&html, &letter.to_string(), &hotspots)
            .with_context(|| format!("failed to extract FSA listing for '{letter}'"))?;
        tracing::info!(%letter, records = page_records.len(), "extracted letter");
        records.extend(page_records);
    }

    records.sort_by(|a, b| a.fsa.cmp(&b.fsa));
    store.save_fsas(&records)?;
    tracing::info!(
        records = records.len(),
        hotspots = records.iter().filter(|r| r.hotspot).count(),
        path = %store.fsas_path().display(),
        "wrote FSA records"
    );
    Ok(())
}
