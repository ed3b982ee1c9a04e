//! `ldus`: generate the shuffled LDU pool once.

use fsamap_core::{generate_seeded_ldu_pool, validate_ldu_pool};

use crate::store::Store;

/// Writes `ldus.json` unless it already exists and `force` is not set.
///
/// Without `seed` a random one is drawn and logged, so any pool can be
/// regenerated exactly.
///
/// # Errors
///
/// Returns an error if the pool cannot be written.
pub(crate) fn run_ldus(store: &Store, seed: Option<u64>, force: bool) -> anyhow::Result<()> {
    let path = store.ldus_path();
    if store.ldus_exist() && !force {
        tracing::info!(
            path = %path.display(),
            "LDU pool already exists; pass --force to regenerate"
        );
        return Ok(());
    }

    let seed = seed.unwrap_or_else(rand::random);
    let pool = generate_seeded_ldu_pool(seed);
    validate_ldu_pool(&pool)?;
    store.save_ldus(&pool)?;
    tracing::info!(seed, codes = pool.len(), path = %path.display(), "wrote LDU pool");
    Ok(())
}
