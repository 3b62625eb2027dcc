// Unit tests for markdown formatter utilities

use orderflow_provider::report::formatter::*;

#[test]
fn test_empty_table() {
    let headers = vec!["Column 1", "Column 2"];
    let rows: Vec<Vec<String>> = vec![];

    let table = build_table(&headers, &rows);

    // Header and separator only
    assert!(table.contains("| Column 1 | Column 2 |"));
    assert!(table.contains("|--------|--------|"));
    assert_eq!(table.lines().count(), 2);
}

#[test]
fn test_three_column_table() {
    let headers = vec!["Metric", "Bids", "Asks"];
    let rows = vec![vec![
        "Total Quantity".to_string(),
        format_quantity(2283),
        format_quantity(1712),
    ]];

    let table = build_table(&headers, &rows);
    assert!(table.contains("|--------|--------|--------|"));
    assert!(table.contains("| Total Quantity | 2,283 | 1,712 |"));
}

#[test]
fn test_very_long_list() {
    let items: Vec<String> = (1..=150).map(|i| format!("Item {}", i)).collect();

    let unordered = build_list(&items, false);
    let ordered = build_list(&items, true);

    assert!(unordered.starts_with("- Item 1\n"));
    assert!(unordered.contains("- Item 150\n"));

    assert!(ordered.starts_with("1. Item 1\n"));
    assert!(ordered.contains("150. Item 150\n"));

    assert_eq!(unordered.lines().count(), 150);
    assert_eq!(ordered.lines().count(), 150);
}

#[test]
fn test_build_list_empty() {
    let items: Vec<String> = vec![];

    assert_eq!(build_list(&items, false), "");
    assert_eq!(build_list(&items, true), "");
}

#[test]
fn test_build_section_header_edge_cases() {
    assert_eq!(build_section_header("Main Title", 1), "# Main Title\n\n");
    assert_eq!(
        build_section_header("Deep Section", 6),
        "###### Deep Section\n\n"
    );
    assert_eq!(build_section_header("", 2), "## \n\n");
}

#[test]
fn test_format_percentage_edge_cases() {
    assert_eq!(format_percentage(0.0), "0.00%");
    assert_eq!(format_percentage(-5.5), "-5.50%");
    assert_eq!(format_percentage(-100.0), "-100.00%");
    assert_eq!(format_percentage(100.0), "100.00%");
    assert_eq!(format_percentage(0.01), "0.01%");
    assert_eq!(format_percentage(0.001), "0.00%");
}

#[test]
fn test_format_currency_precision() {
    assert_eq!(format_currency(42000.0, 0), "$42,000");
    assert_eq!(format_currency(42000.5, 2), "$42,000.50");
    assert_eq!(format_currency(0.01, 2), "$0.01");
    assert_eq!(format_currency(1_234_567.25, 2), "$1,234,567.25");
    assert_eq!(format_currency(-100.0, 2), "-$100.00");
}

#[test]
fn test_format_quantity_boundaries() {
    assert_eq!(format_quantity(100), "100");
    assert_eq!(format_quantity(100_000), "100,000");
    assert_eq!(format_quantity(1_000_000), "1,000,000");
}
