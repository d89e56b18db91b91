//! Amount Formatting
//!
//! Indian digit grouping (`12,34,567`) with up to three fractional digits.

pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{:.3}", rounded);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::new();
    if amount < 0.0 && rounded != 0.0 {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Amount prefixed with a currency symbol, e.g. `₹7,000`
pub fn format_currency(symbol: &str, amount: f64) -> String {
    format!("{}{}", symbol, format_amount(amount))
}

/// Saved-at timestamp as a short date (`05 Jan 2024`); unparseable input is shown as-is
pub fn format_saved_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| timestamp.to_string())
}

/// Last three digits, then groups of two
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
