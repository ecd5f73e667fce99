//! Number formatting for asset cards
//!
//! Grouping follows the en-US convention: `,` between thousands and `.` before
//! the fraction.

/// Placeholder for a value the API did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Direction of a price move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

/// A formatted percentage change with its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceChange {
    pub direction: Direction,
    /// Absolute value to two decimals, with a trailing `%`.
    pub text: String,
}

/// Inserts `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats `value` with thousands separators, rounding to at most
/// `max_fraction` digits and keeping at least `min_fraction`.
pub fn format_grouped(value: f64, min_fraction: usize, max_fraction: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let rounded = format!("{:.*}", max_fraction, value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut fraction = frac_part.to_string();
    while fraction.len() > min_fraction && fraction.ends_with('0') {
        fraction.pop();
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(&fraction);
    }
    out
}

/// Abbreviates market cap, volume and supply figures with a `T`/`B`/`M`/`K`
/// suffix. Values under a thousand are grouped without a suffix.
pub fn format_large_number(value: Option<f64>) -> String {
    match value {
        None => format!("${}", NOT_AVAILABLE),
        Some(v) if v >= 1e12 => format!("${:.2}T", v / 1e12),
        Some(v) if v >= 1e9 => format!("${:.2}B", v / 1e9),
        Some(v) if v >= 1e6 => format!("${:.2}M", v / 1e6),
        Some(v) if v >= 1e3 => format!("${:.2}K", v / 1e3),
        Some(v) => format!("${}", format_grouped(v, 0, 3)),
    }
}

/// Formats a price with exactly two decimals.
pub fn format_price(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("${}", format_grouped(v, 2, 2)),
        None => format!("${}", NOT_AVAILABLE),
    }
}

/// A missing change counts as a flat, upward move.
pub fn price_change(percent: Option<f64>) -> PriceChange {
    let value = percent.unwrap_or(0.0);
    let direction = if value >= 0.0 {
        Direction::Up
    } else {
        Direction::Down
    };
    PriceChange {
        direction,
        text: format!("{:.2}%", value.abs()),
    }
}

pub fn format_rank(rank: Option<u32>) -> String {
    match rank {
        Some(rank) => format!("#{}", rank),
        None => format!("#{}", NOT_AVAILABLE),
    }
}

/// First character of an asset name, used as its icon.
pub fn glyph(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
