// Markdown formatting utilities for order book reports

/// Build a markdown table from headers and rows
pub fn build_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = String::new();

    // Header row
    table.push_str("| ");
    table.push_str(&headers.join(" | "));
    table.push_str(" |\n");

    // Separator row
    table.push('|');
    for _ in headers {
        table.push_str("--------|");
    }
    table.push('\n');

    for row in rows {
        table.push_str("| ");
        table.push_str(&row.join(" | "));
        table.push_str(" |\n");
    }

    table
}

/// Build a markdown list from items
pub fn build_list(items: &[String], ordered: bool) -> String {
    let mut list = String::new();

    for (i, item) in items.iter().enumerate() {
        if ordered {
            list.push_str(&format!("{}. {}\n", i + 1, item));
        } else {
            list.push_str(&format!("- {}\n", item));
        }
    }

    list
}

/// Build a markdown section header
pub fn build_section_header(title: &str, level: u8) -> String {
    let hashes = "#".repeat(level as usize);
    format!("{} {}\n\n", hashes, title)
}

/// Insert comma separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        grouped.push(ch);
        // Comma every 3 digits from the right (but not at the end)
        if (len - i - 1) % 3 == 0 && i < len - 1 {
            grouped.push(',');
        }
    }

    grouped
}

/// Format a share count with comma separators
///
/// 1234567 -> "1,234,567"
pub fn format_quantity(quantity: u64) -> String {
    group_thousands(&quantity.to_string())
}

/// Format a currency value with comma separators
///
/// For a value of 12345.678 and 2 decimals: "$12,345.68"
pub fn format_currency(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, fractional_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match fractional_part {
        Some(frac) => format!("{}${}.{}", sign, group_thousands(integer_part), frac),
        None => format!("{}${}", sign, group_thousands(integer_part)),
    }
}

/// Format a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Format a DateTime<Utc> as human-readable string
pub fn format_datetime(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
