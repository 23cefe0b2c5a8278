//! FILENAME: core/engine/src/infer.rs
//! PURPOSE: Semantic type inference for columns without an explicit type.
//! CONTEXT: Inspects a bounded sample of a column's values together with the
//! column key. The rules run in a fixed order, so repeated calls over the
//! same input always agree. An explicit schema type or a global override
//! takes precedence over anything inferred here (resolved by the caller).

use crate::coerce::{coerce_number, has_time_marker, parse_datetime_str};
use crate::schema::ColumnType;
use crate::value::RecordValue;

/// At most this many non-absent values are sampled per column.
const SAMPLE_LIMIT: usize = 20;

/// Key fragments that mark a numeric column as a percentage.
const PERCENT_KEY_HINTS: [&str; 4] = ["percent", "pct", "rate", "ratio"];

/// Key fragments that mark a numeric column as a currency amount.
const CURRENCY_KEY_HINTS: [&str; 5] = ["price", "amount", "cost", "revenue", "rev"];

/// Infers the semantic type of a column from its key and values.
///
/// Rules, first match wins:
/// 1. every sampled value is a boolean -> `Boolean`;
/// 2. the sample contains strings and every one of them parses as a date ->
///    `Date`, or `DateTime` when any carries a time marker (`:` or `T`);
///    numeric members neither block nor satisfy this rule;
/// 3. every sampled value coerces to a number -> `Percent` when the key
///    carries a percent hint or all values lie in [0, 1]; else `Currency`
///    when the key carries a currency hint; else `Integer` when all values
///    are integral; else `Number`;
/// 4. anything else -> `String`. An empty sample is also `String`.
pub fn infer_type<'a, I>(key: &str, values: I) -> ColumnType
where
    I: IntoIterator<Item = &'a RecordValue>,
{
    let sample: Vec<&RecordValue> = values
        .into_iter()
        .filter(|v| !v.is_null())
        .take(SAMPLE_LIMIT)
        .collect();

    if sample.is_empty() {
        return ColumnType::String;
    }

    if sample
        .iter()
        .all(|v| matches!(v, RecordValue::Boolean(_)))
    {
        return ColumnType::Boolean;
    }

    let strings: Vec<&str> = sample
        .iter()
        .filter_map(|v| match v {
            RecordValue::Text(s) => Some(s.as_str()),
            _ => None,
        })
        .collect();

    if !strings.is_empty() && strings.iter().all(|s| parse_datetime_str(s).is_some()) {
        return if strings.iter().any(|s| has_time_marker(s)) {
            ColumnType::DateTime
        } else {
            ColumnType::Date
        };
    }

    let numbers: Option<Vec<f64>> = sample.iter().map(|v| coerce_number(v)).collect();
    if let Some(numbers) = numbers {
        let key_lower = key.to_lowercase();
        let unit_range = numbers.iter().all(|n| (0.0..=1.0).contains(n));
        if PERCENT_KEY_HINTS.iter().any(|h| key_lower.contains(h)) || unit_range {
            return ColumnType::Percent;
        }
        if CURRENCY_KEY_HINTS.iter().any(|h| key_lower.contains(h)) {
            return ColumnType::Currency;
        }
        if numbers.iter().all(|n| n.fract() == 0.0) {
            return ColumnType::Integer;
        }
        return ColumnType::Number;
    }

    ColumnType::String
}
