//! Contact details from a member's page on the legislature site.

use std::sync::LazyLock;

use scraper::{Html, Selector};

static PARTY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".field--name-field-party").expect("valid party selector")
});
static EMAIL_ITEM: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".field--name-field-email-address .field__item")
        .expect("valid email selector")
});
static PHONE_ITEM: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".field--name-field-phone-number .field__item")
        .expect("valid phone selector")
});

/// What a representative page says about its member. Every field is optional;
/// pages routinely omit one or more of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepPage {
    pub party: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
}

impl RepPage {
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts party, email and phone from a representative page.
///
/// Each value is trimmed and runs of internal whitespace collapse to a single
/// space. Items left blank are dropped, so [`RepPage::email`] and
/// [`RepPage::phone`] return the first non-blank item.
#[must_use]
pub fn extract_rep_page(html: &str) -> RepPage {
    let document = Html::parse_document(html);

    let party = document
        .select(&PARTY)
        .next()
        .map(element_text)
        .filter(|p| !p.is_empty());

    let emails = document
        .select(&EMAIL_ITEM)
        .map(|e| element_text(e).to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    let phones = document
        .select(&PHONE_ITEM)
        .map(element_text)
        .filter(|p| !p.is_empty())
        .collect();

    RepPage {
        party,
        emails,
        phones,
    }
}
