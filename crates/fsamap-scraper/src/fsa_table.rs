//! Extraction of FSA records from one listing page.
//!
//! Listing pages come in two layouts. Letters with both kinds of area have
//! "Urban" and "Rural" headings, each followed directly by a table. The rest
//! have a single table holding every FSA for the letter.

use std::sync::LazyLock;

use fsamap_core::{
    is_unused_name, is_valid_fsa, resolve_province, FsaPayload, FsaRecord, FsaType, HotspotList,
};
use scraper::{ElementRef, Html, Selector};

use crate::cell_text::{cell_lines, parse_ldu_line, urban_detail};
use crate::error::ScraperError;

static TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));
static CELL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid cell selector"));
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2, h3, h4").expect("valid heading selector"));

/// Extracts every FSA record from one listing page, sorted by FSA.
///
/// `context` names the page in errors and logs (usually its letter or URL).
///
/// # Errors
///
/// - [`ScraperError::MissingTable`] if the page has no table at all.
/// - [`ScraperError::Core`] if a cell holds an FSA whose leading letter
///   belongs to no province.
pub fn extract_fsa_records(
    html: &str,
    context: &str,
    hotspots: &HotspotList,
) -> Result<Vec<FsaRecord>, ScraperError> {
    let document = Html::parse_document(html);
    let cells = locate_cells(&document).ok_or_else(|| ScraperError::MissingTable {
        context: context.to_owned(),
    })?;

    let mut records = Vec::with_capacity(cells.len());
    for cell in cells {
        let lines = cell_lines(&cell.inner_html());
        if let Some(record) = parse_cell(lines, context, hotspots)? {
            records.push(record);
        }
    }

    records.sort_by(|a, b| a.fsa.cmp(&b.fsa));
    tracing::debug!(context, records = records.len(), "extracted FSA records");
    Ok(records)
}

/// Collects data cells, rural section first when the page is sectioned.
fn locate_cells(document: &Html) -> Option<Vec<ElementRef<'_>>> {
    if let (Some(rural), Some(urban)) = (
        section_table(document, "rural"),
        section_table(document, "urban"),
    ) {
        return Some(rural.select(&CELL).chain(urban.select(&CELL)).collect());
    }
    let table = document.select(&TABLE).next()?;
    Some(table.select(&CELL).collect())
}

/// Finds the table that directly follows the heading labelled `label`.
fn section_table<'a>(document: &'a Html, label: &str) -> Option<ElementRef<'a>> {
    document
        .select(&HEADING)
        .filter(|heading| heading_label(*heading).eq_ignore_ascii_case(label))
        .find_map(table_after)
}

fn heading_label(heading: ElementRef<'_>) -> String {
    let text: String = heading.text().collect();
    text.replace("[edit]", "").trim().to_owned()
}

/// Newer page markup wraps headings in `<div class="mw-heading">`; the table
/// is then a sibling of the wrapper rather than of the heading itself.
fn table_after(heading: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let anchor = heading
        .parent()
        .and_then(ElementRef::wrap)
        .filter(|parent| {
            parent.value().name() == "div"
                && parent.value().classes().any(|c| c == "mw-heading")
        })
        .unwrap_or(heading);

    anchor
        .next_siblings()
        .find_map(ElementRef::wrap)
        .filter(|next| next.value().name() == "table")
}

/// Turns one cell's lines into a record, or `None` for cells that do not
/// describe a usable FSA.
fn parse_cell(
    lines: Vec<String>,
    context: &str,
    hotspots: &HotspotList,
) -> Result<Option<FsaRecord>, ScraperError> {
    let mut lines = lines.into_iter();
    let Some(fsa) = lines.next() else {
        return Ok(None);
    };
    if !is_valid_fsa(&fsa) {
        tracing::warn!(context, cell = %fsa, "skipping cell without a valid FSA");
        return Ok(None);
    }
    let Some(name) = lines.next() else {
        tracing::warn!(context, fsa = %fsa, "skipping FSA cell without a place name");
        return Ok(None);
    };
    if is_unused_name(&name) {
        return Ok(None);
    }

    let province = resolve_province(&fsa)?;
    let rest: Vec<String> = lines.collect();
    let payload = match FsaType::of(&fsa) {
        FsaType::Urban => FsaPayload::Urban {
            detail: urban_detail(&rest),
        },
        FsaType::Rural => FsaPayload::Rural {
            ldus: rest
                .iter()
                .filter_map(|line| {
                    let ldu = parse_ldu_line(line);
                    if ldu.is_none() {
                        tracing::warn!(context, fsa = %fsa, line = %line, "ignoring malformed LDU line");
                    }
                    ldu
                })
                .collect(),
        },
    };

    Ok(Some(FsaRecord {
        hotspot: hotspots.contains(&fsa),
        fsa,
        province,
        name,
        payload,
    }))
}

#[cfg(test)]
#[path = "fsa_table_test.rs"]
mod tests;
