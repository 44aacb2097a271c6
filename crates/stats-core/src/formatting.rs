use std::time::Duration;

use crate::models::AnalysisReport;

/// Placeholder printed for statistics that are unset.
pub const MISSING: &str = "-";

/// Format an integer with thousands separators.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_integer;
///
/// assert_eq!(format_integer(1_234_567), "1,234,567");
/// assert_eq!(format_integer(-9_876), "-9,876");
/// assert_eq!(format_integer(42), "42");
/// ```
pub fn format_integer(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_thousands(&digits);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format an already-rounded decimal with thousands separators and a fixed
/// number of decimal places.
///
/// # Examples
///
/// ```
/// use stats_core::formatting::format_decimal;
///
/// assert_eq!(format_decimal(1234.5, 1), "1,234.5");
/// assert_eq!(format_decimal(-0.5, 1), "-0.5");
/// assert_eq!(format_decimal(7.0, 1), "7.0");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.prec$}", value.abs(), prec = decimals);

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut result = group_thousands(int_part);
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }

    if negative {
        format!("-{}", result)
    } else {
        result
    }
}

/// Render a run of integers as `[a, b, c]`.
pub fn format_sequence(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Format an elapsed duration as seconds with millisecond precision (`"0.012s"`).
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.3}s", elapsed.as_secs_f64())
}

/// Render a report as aligned `label: value` lines for terminal output.
pub fn format_text_report(report: &AnalysisReport) -> String {
    let rows: [(&str, String); 6] = [
        ("max", opt(report.max, |v| format_integer(i128::from(v)))),
        ("min", opt(report.min, |v| format_integer(i128::from(v)))),
        ("avg", opt(report.avg, |v| format_decimal(v, 1))),
        ("median", opt(report.median, |v| format_decimal(v, 1))),
        (
            "longest_increasing_sequence",
            opt(report.longest_increasing_sequence.as_deref(), format_sequence),
        ),
        (
            "longest_decreasing_sequence",
            opt(report.longest_decreasing_sequence.as_deref(), format_sequence),
        ),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn opt<T>(value: Option<T>, f: impl FnOnce(T) -> String) -> String {
    value.map(f).unwrap_or_else(|| MISSING.to_string())
}

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
