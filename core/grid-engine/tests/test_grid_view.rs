//! FILENAME: core/grid-engine/tests/test_grid_view.rs
//! PURPOSE: Integration tests for the full grid pipeline: inference,
//! filtering, sorting, pagination and formatting composed end to end.

use engine::{Column, ColumnType, Record, RecordValue};
use grid_engine::{
    calculate_grid, ColumnFilterValue, GridCalculator, GridOptions, SortDirection, ViewState,
};

fn record(pairs: Vec<(&str, RecordValue)>) -> Record {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// A small product catalog exercising every semantic type.
fn catalog() -> Vec<Record> {
    vec![
        record(vec![
            ("name", "Widget".into()),
            ("price", 44.99.into()),
            ("qty", 3.0.into()),
            ("conversion_rate", 0.125.into()),
            ("restocked", "2024-01-05".into()),
            ("active", true.into()),
        ]),
        record(vec![
            ("name", "Bolt".into()),
            ("price", 12.5.into()),
            ("qty", 120.0.into()),
            ("conversion_rate", 0.0834.into()),
            ("restocked", "2023-11-20".into()),
            ("active", false.into()),
        ]),
        record(vec![
            ("name", "Washer".into()),
            ("price", RecordValue::Null),
            ("qty", 48.0.into()),
            ("conversion_rate", 0.14.into()),
            ("restocked", "2024-03-14".into()),
            ("active", true.into()),
        ]),
    ]
}

// ============================================================================
// INFERENCE AND FORMATTING SCENARIOS
// ============================================================================

#[test]
fn test_percent_column_inference_and_format() {
    let records = catalog();
    let mut options = GridOptions::default();
    options.percent_max_digits = 1;
    let view = calculate_grid(&records, None, &ViewState::new(), &options);

    let rate = view
        .columns
        .iter()
        .position(|c| c.key == "conversion_rate")
        .unwrap();
    assert_eq!(view.columns[rate].column_type, ColumnType::Percent);
    assert_eq!(view.rows[0][rate], "12.5%");
}

#[test]
fn test_currency_column_inference_and_format() {
    let records = catalog();
    let view = calculate_grid(&records, None, &ViewState::new(), &GridOptions::default());

    let price = view.columns.iter().position(|c| c.key == "price").unwrap();
    assert_eq!(view.columns[price].column_type, ColumnType::Currency);
    assert_eq!(view.rows[0][price], "$44.99");
    assert_eq!(view.rows[1][price], "$12.50");
    assert_eq!(view.rows[2][price], "");
}

#[test]
fn test_date_and_boolean_columns() {
    let records = catalog();
    let view = calculate_grid(&records, None, &ViewState::new(), &GridOptions::default());

    let restocked = view
        .columns
        .iter()
        .position(|c| c.key == "restocked")
        .unwrap();
    assert_eq!(view.columns[restocked].column_type, ColumnType::Date);
    assert_eq!(view.rows[0][restocked], "Jan 05, 2024");

    let active = view.columns.iter().position(|c| c.key == "active").unwrap();
    assert_eq!(view.columns[active].column_type, ColumnType::Boolean);
    assert_eq!(view.rows[0][active], "True");
    assert_eq!(view.rows[1][active], "False");
}

#[test]
fn test_column_metadata_resolution() {
    let records = catalog();
    let view = calculate_grid(&records, None, &ViewState::new(), &GridOptions::default());

    use engine::{ColumnAlign, FilterMode};
    let by_key = |key: &str| view.columns.iter().find(|c| c.key == key).unwrap();

    assert_eq!(by_key("name").filter_mode, FilterMode::Text);
    assert_eq!(by_key("name").align, ColumnAlign::Left);
    assert_eq!(by_key("price").filter_mode, FilterMode::Range);
    assert_eq!(by_key("price").align, ColumnAlign::Right);
    assert_eq!(by_key("restocked").filter_mode, FilterMode::Range);
    assert_eq!(by_key("restocked").align, ColumnAlign::Left);
}

// ============================================================================
// FILTERING SCENARIOS
// ============================================================================

#[test]
fn test_range_filter_excludes_boundary_violations() {
    let records = catalog();
    let state =
        ViewState::new().with_filter("price", ColumnFilterValue::range(Some("20"), None));
    let view = calculate_grid(&records, None, &state, &GridOptions::default());

    assert_eq!(view.total_rows, 1);
    assert_eq!(view.rows[0][0], "Widget");
}

#[test]
fn test_global_search_resets_through_formatted_pipeline() {
    let records = catalog();
    let state = ViewState::new().with_page(9).with_search("bolt");
    let view = calculate_grid(&records, None, &state, &GridOptions::default());

    assert_eq!(view.total_rows, 1);
    assert_eq!(view.page, 0);
    assert_eq!(view.rows[0][0], "Bolt");
}

#[test]
fn test_date_range_filter_through_pipeline() {
    let records = catalog();
    let state = ViewState::new().with_filter(
        "restocked",
        ColumnFilterValue::range(Some("2024-01-01"), Some("2024-12-31")),
    );
    let view = calculate_grid(&records, None, &state, &GridOptions::default());
    let names: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Widget", "Washer"]);
}

#[test]
fn test_hidden_column_is_searchable_only_by_column_filter() {
    let records = catalog();
    let schema = vec![
        Column::new("name"),
        Column::new("price").hidden(),
        Column::new("qty"),
    ];

    // "44.99" lives in the hidden price column: global search misses it.
    let state = ViewState::new().with_search("44.99");
    let view = calculate_grid(&records, Some(&schema), &state, &GridOptions::default());
    assert_eq!(view.total_rows, 0);

    // A column filter still reaches it.
    let state =
        ViewState::new().with_filter("price", ColumnFilterValue::range(Some("40"), None));
    let view = calculate_grid(&records, Some(&schema), &state, &GridOptions::default());
    assert_eq!(view.total_rows, 1);
    assert_eq!(view.columns.len(), 2);
    assert!(view.columns.iter().all(|c| c.key != "price"));
}

// ============================================================================
// SORTING SCENARIOS
// ============================================================================

#[test]
fn test_absent_values_sort_last_in_both_directions() {
    let records = catalog();

    let state = ViewState::new().with_sort("price");
    let view = calculate_grid(&records, None, &state, &GridOptions::default());
    let names: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Bolt", "Widget", "Washer"]);

    let state = state.with_sort("price"); // toggles to descending
    let view = calculate_grid(&records, None, &state, &GridOptions::default());
    assert_eq!(view.sort.as_ref().unwrap().direction, SortDirection::Desc);
    let names: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Widget", "Bolt", "Washer"]);
}

#[test]
fn test_unsortable_column_keeps_input_order() {
    let records = catalog();
    let schema = vec![
        Column::new("name").not_sortable(),
        Column::new("price"),
    ];
    let state = ViewState::new().with_sort("name");
    let view = calculate_grid(&records, Some(&schema), &state, &GridOptions::default());
    let names: Vec<&str> = view.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Widget", "Bolt", "Washer"]);
}

// ============================================================================
// PAGINATION SCENARIOS
// ============================================================================

#[test]
fn test_stale_page_request_is_clamped() {
    let records = catalog();
    let state = ViewState::new().with_page(5);
    let view = calculate_grid(&records, None, &state, &GridOptions::default());

    assert_eq!(view.page, 0);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.rows.len(), 3);
}

#[test]
fn test_concatenated_pages_reproduce_the_sorted_sequence() {
    let records: Vec<Record> = (0..23)
        .map(|i| {
            record(vec![
                ("name", format!("item-{i:02}").into()),
                ("qty", (i as f64).into()),
            ])
        })
        .collect();

    let mut state = ViewState::new().with_sort("qty").with_page_size(5);
    state.sort_direction = SortDirection::Desc;

    let full: Vec<Vec<String>> =
        GridCalculator::new(&records, None, &state, &GridOptions::default()).export_rows();

    let total_pages = calculate_grid(&records, None, &state, &GridOptions::default()).total_pages;
    assert_eq!(total_pages, 5);

    let mut stitched: Vec<Vec<String>> = Vec::new();
    for page in 0..total_pages {
        let view = calculate_grid(
            &records,
            None,
            &state.clone().with_page(page),
            &GridOptions::default(),
        );
        stitched.extend(view.rows);
    }
    assert_eq!(stitched, full);
}

// ============================================================================
// STATE INTERACTION
// ============================================================================

#[test]
fn test_filter_then_page_size_change_stays_consistent() {
    let records: Vec<Record> = (0..40)
        .map(|i| {
            record(vec![
                ("name", format!("row-{i}").into()),
                ("qty", (i as f64).into()),
            ])
        })
        .collect();

    let state = ViewState::new()
        .with_page(3)
        .with_filter("qty", ColumnFilterValue::range(Some("0"), Some("9")));
    let view = calculate_grid(&records, None, &state, &GridOptions::default());
    assert_eq!(view.total_rows, 10);
    assert_eq!(view.page, 0);

    let state = state.with_page_size(4).with_page(2);
    let view = calculate_grid(&records, None, &state, &GridOptions::default());
    assert_eq!(view.total_pages, 3);
    assert_eq!(view.rows.len(), 2);
}
