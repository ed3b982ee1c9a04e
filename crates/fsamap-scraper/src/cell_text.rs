//! Text normalization for listing-table cells.
//!
//! Cells are written by hand and carry a lot of noise: footnote references,
//! a second unrelated block after a horizontal rule on some pages, and
//! hyphenated place names that were wrapped with a `<br>` right after the
//! hyphen. These helpers turn a cell's inner markup into clean lines.

use std::sync::LazyLock;

use fsamap_core::Ldu;
use regex::Regex;
use scraper::Html;

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<hr\b[^>]*>").expect("valid hr regex"));

// Closing inline tags may sit between the hyphen and the break, as in
// `<a>Some-</a><br>Town`; they are captured and kept.
static HYPHEN_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)-\s*((?:</[a-z][a-z0-9]*>\s*)*)<br\b[^>]*>\s*")
        .expect("valid hyphen-break regex")
});

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\b[^>]*>").expect("valid br regex"));

static FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d+\]").expect("valid footnote regex"));

/// Splits a cell's inner markup into trimmed, non-empty text lines.
#[must_use]
pub fn cell_lines(markup: &str) -> Vec<String> {
    let markup = HORIZONTAL_RULE
        .find(markup)
        .map_or(markup, |m| &markup[..m.start()]);

    // Source newlines are plain whitespace; only <br> ends a line.
    let markup = markup.replace(['\r', '\n'], " ");
    let markup = HYPHEN_BREAK.replace_all(&markup, "-${1}");
    let markup = LINE_BREAK.replace_all(&markup, "\n");

    let fragment = Html::parse_fragment(&markup);
    let text: String = fragment.root_element().text().collect();
    let text = FOOTNOTE.replace_all(&text, "");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Removes one pair of parentheses when it encloses the whole string.
///
/// `"(Parliament Hill)"` becomes `"Parliament Hill"`; `"(A) and (B)"` is
/// left alone because its first parenthesis closes before the end.
#[must_use]
pub fn unwrap_parens(text: &str) -> &str {
    let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) else {
        return text;
    };
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return text;
                }
            }
            _ => {}
        }
    }
    if depth == 0 {
        inner.trim()
    } else {
        text
    }
}

/// Joins an urban cell's remaining lines into its optional detail.
#[must_use]
pub fn urban_detail(lines: &[String]) -> Option<String> {
    let joined = lines.join(" ");
    let detail = unwrap_parens(joined.trim());
    if detail.is_empty() {
        None
    } else {
        Some(detail.to_owned())
    }
}

/// Parses a rural payload line of the form `<LDU>: <name>[*]`.
///
/// A trailing `*` marks a retired LDU. Lines without a colon or with an
/// empty LDU are not LDU entries and yield `None`.
#[must_use]
pub fn parse_ldu_line(line: &str) -> Option<Ldu> {
    let (ldu, name) = line.split_once(':')?;
    let ldu = ldu.trim();
    if ldu.is_empty() {
        return None;
    }
    let name = name.trim();
    let (name, retired) = match name.strip_suffix('*') {
        Some(stripped) => (stripped.trim_end(), true),
        None => (name, false),
    };
    Some(Ldu {
        ldu: ldu.to_owned(),
        name: name.to_owned(),
        retired,
    })
}
