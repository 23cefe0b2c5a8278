//! FILENAME: core/engine/src/format.rs
//! PURPOSE: Type-aware cell formatting - converts a raw record value to its
//! display string given a semantic column type, locale and currency.
//! CONTEXT: This single function backs both on-screen rendering and CSV
//! export; the two paths must agree byte-for-byte, so neither may format on
//! its own. Malformed values degrade to their plain string form - this
//! module never panics on data.

use crate::coerce::{coerce_datetime, coerce_number};
use crate::locale::{resolve_currency, resolve_locale, CurrencyPosition, Locale, MONTH_ABBR};
use crate::schema::ColumnType;
use crate::value::RecordValue;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Formats one cell value for display.
///
/// Absent values render empty. Runtime booleans render "True"/"False"
/// regardless of the declared column type. Values that fail numeric or date
/// coercion under a typed column fall back to their plain string form.
pub fn format_value(
    value: &RecordValue,
    column_type: ColumnType,
    locale_tag: &str,
    currency_code: &str,
    percent_max_digits: u8,
) -> String {
    if value.is_null() {
        return String::new();
    }
    if let RecordValue::Boolean(b) = value {
        return if *b { "True" } else { "False" }.to_string();
    }

    let locale = resolve_locale(locale_tag);

    match column_type {
        ColumnType::Date => format_date(value, locale, false),
        ColumnType::DateTime => format_date(value, locale, true),
        ColumnType::Integer => match coerce_number(value) {
            Some(n) => format_fixed(n, 0, locale),
            None => value.display_value(),
        },
        ColumnType::Currency => match coerce_number(value) {
            Some(n) => format_currency(n, currency_code, locale),
            None => value.display_value(),
        },
        ColumnType::Percent => match coerce_number(value) {
            Some(n) => format_percent(n, percent_max_digits, locale),
            None => value.display_value(),
        },
        ColumnType::Number => match coerce_number(value) {
            Some(n) => format_max(n, 2, locale),
            None => value.display_value(),
        },
        ColumnType::String | ColumnType::Boolean => value.display_value(),
    }
}

// ============================================================================
// NUMERIC FORMATTING
// ============================================================================

/// Formats with an exact number of fraction digits, localized and grouped.
fn format_fixed(value: f64, places: u8, locale: &Locale) -> String {
    let rounded = format!("{:.prec$}", value, prec = places as usize);
    localize_numeric(&rounded, locale)
}

/// Formats with at most `places` fraction digits; trailing zeros trimmed.
fn format_max(value: f64, places: u8, locale: &Locale) -> String {
    let rounded = format!("{:.prec$}", value, prec = places as usize);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    localize_numeric(trimmed, locale)
}

/// Formats as currency: grouped, 2 fraction digits, symbol per code.
/// Negative amounts render in parentheses.
fn format_currency(value: f64, currency_code: &str, locale: &Locale) -> String {
    let (symbol, position) = resolve_currency(currency_code);
    let amount = format_fixed(value.abs(), 2, locale);

    let with_symbol = match position {
        CurrencyPosition::Before => format!("{}{}", symbol, amount),
        CurrencyPosition::After => format!("{}{}", amount, symbol),
    };

    if value < 0.0 {
        format!("({})", with_symbol)
    } else {
        with_symbol
    }
}

/// Formats a 0-1 fraction as a percentage with at most `max_digits` fraction
/// digits (0.125 at 1 digit renders "12.5%").
fn format_percent(value: f64, max_digits: u8, locale: &Locale) -> String {
    format!("{}%", format_max(value * 100.0, max_digits, locale))
}

/// Applies the locale's separators to a plain "-1234.56"-shaped string.
fn localize_numeric(s: &str, locale: &Locale) -> String {
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (s, None),
    };

    let negative = integer_part.starts_with('-');
    let digits: &str = integer_part.trim_start_matches('-');

    let mut result = String::new();
    if negative {
        result.push('-');
    }

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(locale.group_sep);
        }
        result.push(c);
    }

    if let Some(decimal) = decimal_part {
        result.push(locale.decimal_sep);
        result.push_str(decimal);
    }

    result
}

// ============================================================================
// DATE FORMATTING
// ============================================================================

/// Formats a calendar date (year, abbreviated month, 2-digit day), with a
/// 2-digit 24-hour HH:MM suffix for datetime columns. Values that do not
/// parse as dates render as their plain string form.
fn format_date(value: &RecordValue, locale: &Locale, with_time: bool) -> String {
    let Some(ts) = coerce_datetime(value) else {
        return value.display_value();
    };

    let date_part = render_calendar_date(&ts, locale);
    if with_time {
        format!("{} {:02}:{:02}", date_part, ts.hour(), ts.minute())
    } else {
        date_part
    }
}

fn render_calendar_date(ts: &NaiveDateTime, locale: &Locale) -> String {
    let month = MONTH_ABBR[(ts.month0() % 12) as usize];
    if locale.month_first {
        format!("{} {:02}, {}", month, ts.day(), ts.year())
    } else {
        format!("{:02} {} {}", ts.day(), month, ts.year())
    }
}
