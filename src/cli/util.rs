use chrono::NaiveDate;
use ratatui::style::Color;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use super::state::Money;

/// Slice colors, cycled by index.
pub const PALETTE: [Color; 10] = [
    Color::Rgb(0x00, 0x88, 0xFE),
    Color::Rgb(0x00, 0xC4, 0x9F),
    Color::Rgb(0xFF, 0xBB, 0x28),
    Color::Rgb(0xFF, 0x80, 0x42),
    Color::Rgb(0x88, 0x84, 0xD8),
    Color::Rgb(0x82, 0xCA, 0x9D),
    Color::Rgb(0xF0, 0x62, 0x92),
    Color::Rgb(0xBA, 0x68, 0xC8),
    Color::Rgb(0x4D, 0xB6, 0xAC),
    Color::Rgb(0xFF, 0xB7, 0x4D),
];

pub const LINE_COLOR: Color = Color::Rgb(0x00, 0x88, 0xFE);
pub const AREA_COLOR: Color = Color::Rgb(0x88, 0x84, 0xD8);

pub fn slice_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Rupee amount with thousands separators and at most three fraction digits,
/// e.g. `12345` -> `₹12,345`, `1234.5` -> `₹1,234.5`.
pub fn fmt_inr(d: Decimal) -> String {
    let rounded = d
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = rounded.abs().to_string();

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut out = String::from("₹");
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// Axis labels are whole rupees.
pub fn fmt_inr_axis(v: f64) -> String {
    match Decimal::from_f64(v) {
        Some(d) => fmt_inr(d.round()),
        None => format!("₹{v:.0}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `2024-01-05` -> `1/5/2024`. Anything that is not a date comes back as-is.
pub fn fmt_date_tick(s: &str) -> String {
    let head = s.get(..10).unwrap_or(s);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(d) => d.format("%-m/%-d/%Y").to_string(),
        Err(_) => s.to_string(),
    }
}

pub fn tooltip_lines(label: &str, amount: Money) -> [String; 2] {
    [label.to_string(), format!("Amount: {}", fmt_inr(amount.0))]
}

pub fn to_f64(m: Money) -> f64 {
    m.0.to_f64().unwrap_or(0.0)
}

/// Y bounds that always include zero, padded 10% above the top value.
pub fn axis_bounds(values: &[f64]) -> [f64; 2] {
    let lo = values.iter().copied().fold(0.0_f64, f64::min);
    let hi = values.iter().copied().fold(0.0_f64, f64::max);
    if hi - lo < f64::EPSILON {
        return [lo, lo + 1.0];
    }
    [lo, hi + (hi - lo) * 0.1]
}

/// Linear interpolation between consecutive points, `steps` samples per gap.
/// Used to shade the area under a line with a bar dataset.
pub fn area_fill(points: &[(f64, f64)], steps: usize) -> Vec<(f64, f64)> {
    let steps = steps.max(1);
    let mut out = Vec::with_capacity(points.len() * steps);
    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        for s in 0..steps {
            let t = s as f64 / steps as f64;
            out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    if let Some(last) = points.last() {
        out.push(*last);
    }
    out
}

/// Fractional `[start, end)` spans of the full turn for each slice.
/// Negative values count as zero; an empty or all-zero input yields no spans.
pub fn slice_spans(values: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = 0.0;
    values
        .iter()
        .map(|v| {
            let end = start + v.max(0.0) / total;
            let span = (start, end);
            start = end;
            span
        })
        .collect()
}
