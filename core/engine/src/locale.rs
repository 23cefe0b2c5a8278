//! FILENAME: core/engine/src/locale.rs
//! PURPOSE: Locale and currency resolution tables for cell formatting.
//! CONTEXT: A render carries a single locale tag and currency code. Unknown
//! tags fall back to en-US and unknown currency codes render as a code
//! prefix, so resolution never fails.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrencyPosition {
    Before,
    After,
}

/// Number and date conventions for one locale tag.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    pub tag: &'static str,
    pub decimal_sep: char,
    pub group_sep: char,
    /// true renders "Jan 05, 2024"; false renders "05 Jan 2024".
    pub month_first: bool,
}

const EN_US: Locale = Locale {
    tag: "en-US",
    decimal_sep: '.',
    group_sep: ',',
    month_first: true,
};

static LOCALES: Lazy<Vec<Locale>> = Lazy::new(|| {
    vec![
        EN_US,
        Locale {
            tag: "en-GB",
            decimal_sep: '.',
            group_sep: ',',
            month_first: false,
        },
        Locale {
            tag: "de-DE",
            decimal_sep: ',',
            group_sep: '.',
            month_first: false,
        },
        Locale {
            tag: "fr-FR",
            decimal_sep: ',',
            group_sep: ' ',
            month_first: false,
        },
        Locale {
            tag: "sv-SE",
            decimal_sep: ',',
            group_sep: ' ',
            month_first: false,
        },
    ]
});

static CURRENCIES: Lazy<HashMap<&'static str, (&'static str, CurrencyPosition)>> =
    Lazy::new(|| {
        let mut map = HashMap::new();
        map.insert("USD", ("$", CurrencyPosition::Before));
        map.insert("EUR", ("\u{20ac}", CurrencyPosition::Before));
        map.insert("GBP", ("\u{a3}", CurrencyPosition::Before));
        map.insert("SEK", (" kr", CurrencyPosition::After));
        map
    });

/// Month abbreviations used by date formatting.
pub const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Resolves a locale tag, falling back to en-US for unknown tags.
pub fn resolve_locale(tag: &str) -> &'static Locale {
    LOCALES
        .iter()
        .find(|l| l.tag.eq_ignore_ascii_case(tag))
        .unwrap_or(&EN_US)
}

/// Resolves a currency code to its symbol and position.
/// Unknown codes render as an uppercased code prefix ("XYZ 12.50").
pub fn resolve_currency(code: &str) -> (String, CurrencyPosition) {
    match CURRENCIES.get(code.to_uppercase().as_str()) {
        Some((symbol, position)) => (symbol.to_string(), *position),
        None => (format!("{} ", code.to_uppercase()), CurrencyPosition::Before),
    }
}
