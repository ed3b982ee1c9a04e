//! `search`: query the lookup API for every Ontario FSA, one batch per FSA.

use anyhow::Context;
use fsamap_core::{
    is_valid_fsa, postal_code, validate_ldu_pool, AppConfig, FsaRecord, FsaType, Province,
};
use fsamap_lookup::{search_fsa, select_candidates, DistrictLookupClient, RetryPolicy};

use crate::store::Store;

/// Normalizes requested FSA codes to uppercase.
///
/// # Errors
///
/// Returns an error for anything that is not letter-digit-letter.
pub(crate) fn parse_fsas(requested: &[String]) -> anyhow::Result<Vec<String>> {
    let mut fsas = Vec::with_capacity(requested.len());
    for raw in requested {
        let fsa = raw.trim().to_ascii_uppercase();
        if !is_valid_fsa(&fsa) {
            anyhow::bail!("\"{raw}\" is not a valid FSA");
        }
        if !fsas.contains(&fsa) {
            fsas.push(fsa);
        }
    }
    Ok(fsas)
}

/// Picks the Ontario records to search, in `fsas.json` order.
///
/// # Errors
///
/// Returns an error if a requested FSA is not an Ontario FSA in `records`.
pub(crate) fn select_targets<'a>(
    records: &'a [FsaRecord],
    requested: &[String],
) -> anyhow::Result<Vec<&'a FsaRecord>> {
    let ontario = records.iter().filter(|r| r.province == Province::On);
    if requested.is_empty() {
        return Ok(ontario.collect());
    }

    let targets: Vec<&FsaRecord> = ontario.filter(|r| requested.contains(&r.fsa)).collect();
    if let Some(missing) = requested
        .iter()
        .find(|fsa| !targets.iter().any(|r| &r.fsa == *fsa))
    {
        anyhow::bail!("{missing} is not an Ontario FSA in fsas.json");
    }
    Ok(targets)
}

/// Runs the search for each target FSA, flushing its result set after the
/// batch whether or not the batch succeeded.
///
/// # Errors
///
/// Returns an error if `fsas.json` or a needed `ldus.json` is missing, a
/// result set cannot be read or written, or a lookup fails for good. In the
/// last case the failing FSA's partial results are written first.
pub(crate) async fn run_search(
    config: &AppConfig,
    store: &Store,
    fsas: &[String],
    dry_run: bool,
) -> anyhow::Result<()> {
    let requested = parse_fsas(fsas)?;
    let records = store
        .load_fsas()?
        .ok_or_else(|| anyhow::anyhow!("fsas.json not found; run `fsamap fsas` first"))?;
    let targets = select_targets(&records, &requested)?;

    let pool = if targets.iter().any(|r| r.fsa_type() == FsaType::Urban) {
        let pool = store
            .load_ldus()?
            .ok_or_else(|| anyhow::anyhow!("ldus.json not found; run `fsamap ldus` first"))?;
        validate_ldu_pool(&pool).context("ldus.json is not a valid LDU pool")?;
        pool
    } else {
        Vec::new()
    };

    if dry_run {
        for record in &targets {
            let candidates = select_candidates(record, &pool, config.urban_sample_size);
            let existing = store.load_search(&record.fsa)?;
            let pending = candidates
                .iter()
                .filter(|ldu| !existing.contains(&postal_code(&record.fsa, ldu)))
                .count();
            tracing::info!(
                fsa = %record.fsa,
                candidates = candidates.len(),
                resolved = existing.len(),
                pending,
                "dry-run: would search"
            );
        }
        return Ok(());
    }

    let client = DistrictLookupClient::from_config(config)
        .context("failed to build lookup client")?;
    let policy = RetryPolicy::from_config(config);
    tracing::info!(
        fsas = targets.len(),
        delay_ms = config.lookup_delay_ms,
        max_retries = config.lookup_max_retries,
        max_per_hour = config.max_lookups_per_hour(),
        "starting search"
    );

    for record in targets {
        let candidates = select_candidates(record, &pool, config.urban_sample_size);
        let mut results = store.load_search(&record.fsa)?;
        tracing::info!(
            fsa = %record.fsa,
            candidates = candidates.len(),
            resolved = results.len(),
            "searching FSA"
        );

        let outcome = search_fsa(&mut results, &candidates, &client, &policy).await;
        store
            .save_search(&results)
            .with_context(|| format!("failed to save results for {}", record.fsa))?;
        tracing::info!(
            fsa = %record.fsa,
            entries = results.len(),
            path = %store.search_path(&record.fsa).display(),
            "flushed results"
        );
        outcome.with_context(|| format!("search for {} failed", record.fsa))?;
    }

    Ok(())
}
