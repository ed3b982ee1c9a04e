//! The resumable postal-code search for one FSA.

use fsamap_core::{postal_code, FsaRecord, FsaSearchResults, FsaType, SearchEntry};

use crate::client::PostalCodeLookup;
use crate::error::LookupError;
use crate::retry::RetryPolicy;

/// Counts for one FSA batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub candidates: usize,
    /// Already resolved by an earlier run.
    pub skipped: usize,
    pub resolved: usize,
}

/// Picks the LDUs to probe for one FSA.
///
/// Rural FSAs list their LDUs, so every listed one is a candidate. Urban
/// LDUs are not enumerable from the listings, so urban FSAs take the first
/// `sample_size` codes of the shuffled pool.
#[must_use]
pub fn select_candidates(record: &FsaRecord, pool: &[String], sample_size: usize) -> Vec<String> {
    match record.fsa_type() {
        FsaType::Rural => record.ldus().iter().map(|l| l.ldu.clone()).collect(),
        FsaType::Urban => pool.iter().take(sample_size).cloned().collect(),
    }
}

/// Looks up every unresolved candidate postal code for `results.fsa()`,
/// appending each success to `results` as it arrives.
///
/// Codes already in `results` are skipped without a request, so running the
/// same batch again against the same set issues no lookups and changes
/// nothing. Lookups run one at a time through `policy`.
///
/// # Errors
///
/// Returns the first lookup error that survives `policy`. Everything
/// resolved before it stays in `results`; the caller is expected to persist
/// the set before propagating the error.
pub async fn search_fsa<L>(
    results: &mut FsaSearchResults,
    candidates: &[String],
    lookup: &L,
    policy: &RetryPolicy,
) -> Result<SearchSummary, LookupError>
where
    L: PostalCodeLookup,
{
    let mut summary = SearchSummary {
        candidates: candidates.len(),
        ..SearchSummary::default()
    };

    for ldu in candidates {
        let postal = postal_code(results.fsa(), ldu);
        if results.contains(&postal) {
            summary.skipped += 1;
            continue;
        }

        let result = match policy.run(|| lookup.lookup(&postal)).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    fsa = results.fsa(),
                    postal = %postal,
                    resolved = summary.resolved,
                    error = %e,
                    "lookup failed, stopping FSA batch"
                );
                return Err(e);
            }
        };
        results.push(SearchEntry { postal, result });
        summary.resolved += 1;
    }

    tracing::info!(
        fsa = results.fsa(),
        candidates = summary.candidates,
        skipped = summary.skipped,
        resolved = summary.resolved,
        "FSA batch complete"
    );
    Ok(summary)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
