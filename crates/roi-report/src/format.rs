//! Display formatting for money, percentages, and durations.
//!
//! All formatters are en-US. Infinite values render as `∞` with the usual
//! unit decoration; NaN renders as `n/a`.

use roi_core::{Real, round_half_away, round_to};

const NOT_AVAILABLE: &str = "n/a";
const INFINITY: &str = "∞";

/// Insert thousands separators into a run of ASCII digits.
fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole dollars: `$33,990`, `-$1,235`.
pub fn format_currency(value: Real) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}${INFINITY}");
    }

    let rounded = round_half_away(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_digits(&digits))
}

/// One decimal with a percent sign: `2347.3%`.
pub fn format_percent(value: Real) -> String {
    match one_decimal(value) {
        Some(text) => format!("{text}%"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// One decimal with a month suffix: `1.5 mo`.
pub fn format_months(value: Real) -> String {
    match one_decimal(value) {
        Some(text) => format!("{text} mo"),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Grouped count with up to three decimals: `2,000`, `1,234.5`.
pub fn format_count(value: Real) -> String {
    if value.is_nan() {
        return NOT_AVAILABLE.to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 {
            format!("-{INFINITY}")
        } else {
            INFINITY.to_string()
        };
    }

    let rounded = round_to(value, 3);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let text = format!("{:.3}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}{}", group_digits(int_part))
    } else {
        format!("{sign}{}.{frac}", group_digits(int_part))
    }
}

fn one_decimal(value: Real) -> Option<String> {
    if value.is_nan() {
        return None;
    }
    if value.is_infinite() {
        return Some(if value < 0.0 {
            format!("-{INFINITY}")
        } else {
            INFINITY.to_string()
        });
    }
    let rounded = round_to(value, 1);
    // Keep "-0.0" out of the report.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    Some(format!("{:.1}", rounded))
}
