//! Number Formatting Utilities
//!
//! Converts raw numeric input into dashboard-ready text: currency amounts,
//! magnitudes with `K`/`M` suffixes and thousands-grouped numbers.
//! Malformed or non-finite input never produces an error; each formatter
//! falls back to a display-safe default instead.

use std::fmt;

use once_cell::sync::Lazy;
use tracing::trace;

use crate::config::CurrencyConfig;
use crate::utils::validation::parse_number;

/// Values with an absolute size below this render as a near-zero sentinel
pub const NEAR_ZERO_THRESHOLD: f64 = 0.0001;

/// USD amounts below this skip currency formatting and show 4 decimals
const SMALL_USD_THRESHOLD: f64 = 0.01;

/// Plain numbers above this are rounded and grouped
const GROUPING_THRESHOLD: f64 = 1000.0;

static USD_FORMATTER: Lazy<CurrencyFormatter> =
    Lazy::new(|| CurrencyFormatter::new(&CurrencyConfig::default()));

/// Shared `en-US` / `USD` formatter
pub fn usd_formatter() -> &'static CurrencyFormatter {
    &USD_FORMATTER
}

/// Locale-style currency formatter: symbol, grouped integer digits, fixed decimals
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyFormatter {
    symbol: String,
    fraction_digits: usize,
    group_separator: String,
}

impl CurrencyFormatter {
    /// Create a formatter from currency settings
    pub fn new(config: &CurrencyConfig) -> Self {
        Self {
            symbol: config.symbol.clone(),
            fraction_digits: config.fraction_digits,
            group_separator: config.group_separator.clone(),
        }
    }

    /// Format an amount, e.g. `1234.567` as `$1,234.57`
    pub fn format(&self, amount: f64) -> String {
        let digits = group_digits(&to_fixed(amount.abs(), self.fraction_digits), &self.group_separator);
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{}{}{}", sign, self.symbol, digits)
    }
}

/// Output of [`formatted_num`]: text for most branches, a bare number for
/// plain (non-USD) small values, or nothing for unusable input.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedNum {
    /// Input was empty, non-numeric or non-finite
    Empty,
    /// Rendered text such as `"$1,500.00"` or `"< 0.0001"`
    Text(String),
    /// Bare number for plain values up to 1000, rounded to 4 decimals
    Number(f64),
}

impl FormattedNum {
    /// True when the input could not be formatted
    pub fn is_empty(&self) -> bool {
        matches!(self, FormattedNum::Empty)
    }
}

impl fmt::Display for FormattedNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedNum::Empty => Ok(()),
            FormattedNum::Text(text) => f.write_str(text),
            FormattedNum::Number(value) => f.write_str(&shortest(*value)),
        }
    }
}

/// Output of [`to_k`]: suffixed or fixed-point text, or the raw unscaled number
#[derive(Debug, Clone, PartialEq)]
pub enum Magnitude {
    /// Suffixed or fixed-point text such as `"1.5M"` or `"12.0000"`
    Text(String),
    /// Unscaled raw value
    Number(f64),
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Text(text) => f.write_str(text),
            Magnitude::Number(value) => f.write_str(&shortest(*value)),
        }
    }
}

/// Render `value` with exactly `digits` decimals.
///
/// Rounds to nearest on the exact binary value; an exact tie rounds away
/// from zero, so `0.125` becomes `"0.13"` and `2.5` becomes `"3"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let magnitude = value.abs();
    let rounded = if is_exact_tie(magnitude, digits) {
        let scale = 10f64.powi(digits as i32);
        ((magnitude * scale).floor() + 1.0) / scale
    } else {
        magnitude
    };

    let rendered = format!("{:.*}", digits, rounded);
    if value < 0.0 {
        format!("-{}", rendered)
    } else {
        rendered
    }
}

// A value sits exactly halfway at `digits` decimals iff value * 2^(digits+1) is an odd integer.
fn is_exact_tie(magnitude: f64, digits: usize) -> bool {
    let doubled = magnitude * 2f64.powi(digits as i32 + 1);
    doubled.is_finite() && doubled.fract() == 0.0 && doubled % 2.0 == 1.0
}

/// Round to `digits` decimals with [`to_fixed`] semantics
fn round_to(value: f64, digits: usize) -> f64 {
    to_fixed(value, digits).parse().unwrap_or(value)
}

/// Shortest decimal form that reads back as the same value (`1.5`, `2`, `0.005`)
pub(crate) fn shortest(value: f64) -> String {
    // -0 reads as 0 on a dashboard
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Insert `separator` between groups of three integer digits.
/// The sign and any fractional part pass through untouched.
pub(crate) fn group_digits(rendered: &str, separator: &str) -> String {
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(rendered.len() + integer.len() / 3 * separator.len());
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Scale a number to thousands (`K`) or millions (`M`).
///
/// With `fixed` set the scaled value is rendered with 0 decimals when
/// `cutoff` is set and 4 otherwise. Without `fixed`, suffixed values render
/// in shortest form (`"1.5M"`) and unscaled values come back as a number.
pub fn to_k(num: f64, fixed: bool, cutoff: bool) -> Magnitude {
    let num = if num.is_finite() {
        num
    } else {
        trace!(num, "non-finite magnitude input, using 0");
        0.0
    };

    let (divisor, suffix) = if num > 999_999.0 || num < -999_999.0 {
        (1_000_000.0, "M")
    } else if num > 999.0 || num < -999.0 {
        (1_000.0, "K")
    } else {
        (1.0, "")
    };
    let scaled = num / divisor;

    if fixed {
        let digits = if cutoff { 0 } else { 4 };
        return Magnitude::Text(format!("{}{}", to_fixed(scaled, digits), suffix));
    }

    if suffix.is_empty() {
        Magnitude::Number(scaled)
    } else {
        Magnitude::Text(format!("{}{}", shortest(scaled), suffix))
    }
}

/// Format a number for display, optionally as USD.
///
/// Rules are checked in order and the first match wins:
/// zero, near-zero sentinel, small USD (4 decimals), USD currency,
/// large plain number (grouped integer), plain number (4 decimals).
pub fn formatted_num(value: f64, usd: bool) -> FormattedNum {
    if !value.is_finite() {
        trace!(value, "non-finite number, rendering empty");
        return FormattedNum::Empty;
    }

    if value == 0.0 {
        return if usd {
            FormattedNum::Text("$0".to_string())
        } else {
            FormattedNum::Number(0.0)
        };
    }

    let magnitude = value.abs();
    if magnitude < NEAR_ZERO_THRESHOLD {
        let sentinel = if usd { "< $0.0001" } else { "< 0.0001" };
        return FormattedNum::Text(sentinel.to_string());
    }

    let sign = if value < 0.0 { "-" } else { "" };

    if usd {
        if magnitude < SMALL_USD_THRESHOLD {
            return FormattedNum::Text(format!("{}${}", sign, shortest(round_to(magnitude, 4))));
        }
        return FormattedNum::Text(usd_formatter().format(value));
    }

    if magnitude > GROUPING_THRESHOLD {
        return FormattedNum::Text(group_digits(&to_fixed(value, 0), ","));
    }

    FormattedNum::Number(round_to(value, 4))
}

/// [`formatted_num`] for number-like text such as form input or API fields
pub fn formatted_num_str(value: &str, usd: bool) -> FormattedNum {
    match parse_number(value) {
        Ok(number) => formatted_num(number, usd),
        Err(e) => {
            trace!(error = %e, "unparseable number, rendering empty");
            FormattedNum::Empty
        }
    }
}

/// Group the integer digits of a number with commas: `1234567.5` as `1,234,567.5`
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    group_digits(&shortest(value), ",")
}

/// Shorten an address for table cells (show the first 6 and last 4 characters)
pub fn shorten_address(address: &str) -> String {
    if address.len() <= 12 || !address.is_ascii() {
        address.to_string()
    } else {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_fixed_rounds_ties_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(1.23456, 4), "1.2346");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("1", ","), "1");
        assert_eq!(group_digits("1000", ","), "1,000");
        assert_eq!(group_digits("-1234567.891", ","), "-1,234,567.891");
        assert_eq!(group_digits("123456", " "), "123 456");
    }

    #[test]
    fn test_usd_formatter() {
        assert_eq!(usd_formatter().format(0.5), "$0.50");
        assert_eq!(usd_formatter().format(1234.567), "$1,234.57");
        assert_eq!(usd_formatter().format(-42.0), "-$42.00");
    }

    #[test]
    fn test_to_k_scaling() {
        assert_eq!(to_k(1_500_000.0, true, false), Magnitude::Text("1.5000M".to_string()));
        assert_eq!(to_k(1_500_000.0, true, true), Magnitude::Text("2M".to_string()));
        assert_eq!(to_k(2_500.0, true, true), Magnitude::Text("3K".to_string()));
        assert_eq!(to_k(-12_345.0, true, false), Magnitude::Text("-12.3450K".to_string()));
        assert_eq!(to_k(999.0, true, false), Magnitude::Text("999.0000".to_string()));
    }

    #[test]
    fn test_to_k_raw_branches() {
        assert_eq!(to_k(1_500_000.0, false, false), Magnitude::Text("1.5M".to_string()));
        assert_eq!(to_k(1_000.0, false, false), Magnitude::Text("1K".to_string()));
        assert_eq!(to_k(42.5, false, false), Magnitude::Number(42.5));
        assert_eq!(to_k(f64::NAN, false, false), Magnitude::Number(0.0));
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
            "0xd8dA...6045"
        );
        assert_eq!(shorten_address("0x1234"), "0x1234");
    }
}
