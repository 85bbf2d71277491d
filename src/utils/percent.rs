//! Percentage formatting and period-over-period change helpers

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::utils::formatting::{to_fixed, NEAR_ZERO_THRESHOLD};

/// Direction of a rendered percentage, used by the presentation layer to pick a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Gain, or a non-negative value
    Positive,
    /// Loss
    Negative,
    /// Rendered as `0%`
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        f.write_str(label)
    }
}

/// A rendered percentage together with its sentiment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedPercent {
    /// Display text such as `"+5.20%"`
    pub text: String,
    /// Direction used for coloring
    pub sentiment: Sentiment,
}

impl FormattedPercent {
    fn new(text: impl Into<String>, sentiment: Sentiment) -> Self {
        Self {
            text: text.into(),
            sentiment,
        }
    }

    fn zero() -> Self {
        Self::new("0%", Sentiment::Neutral)
    }
}

impl fmt::Display for FormattedPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Format a percentage that is already multiplied by 100 (`5.2` means 5.2%).
///
/// Non-negative values get an explicit `+`; anything that rounds to zero at
/// two decimals collapses to `0%`.
pub fn formatted_percent(percent: f64) -> FormattedPercent {
    if percent == 0.0 || !percent.is_finite() {
        return FormattedPercent::zero();
    }

    if percent.abs() < NEAR_ZERO_THRESHOLD {
        let sentiment = if percent > 0.0 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        return FormattedPercent::new("< 0.0001%", sentiment);
    }

    let fixed = to_fixed(percent, 2);
    if fixed.trim_start_matches('-') == "0.00" {
        return FormattedPercent::zero();
    }

    if percent > 0.0 {
        FormattedPercent::new(format!("+{}%", fixed), Sentiment::Positive)
    } else {
        FormattedPercent::new(format!("{}%", fixed), Sentiment::Negative)
    }
}

/// Percent change from `past` to `now`; 0 when `past` is zero or the inputs are unusable
pub fn get_percent_change(now: f64, past: f64) -> f64 {
    let change = ((now - past) / past) * 100.0;
    if !change.is_finite() {
        trace!(now, past, "percent change not finite, using 0");
        return 0.0;
    }
    change
}

/// Result of comparing two consecutive 24 hour windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowChange {
    /// Change over the most recent window (`now - past24h`)
    pub window_delta: f64,
    /// Percent by which the recent window's change differs from the window before it
    pub adjusted_change: f64,
}

impl From<WindowChange> for (f64, f64) {
    fn from(change: WindowChange) -> Self {
        (change.window_delta, change.adjusted_change)
    }
}

/// Compare the change over the last 24 hours with the change over the 24 hours before.
///
/// Operand order matters: swapping the windows flips the sign of the result.
/// When the earlier window did not change at all the adjusted change is 0.
pub fn get_2day_percent_change(now: f64, past24h: f64, past48h: f64) -> WindowChange {
    let first_window_delta = past24h - past48h;
    let second_window_delta = now - past24h;

    let adjusted = ((second_window_delta - first_window_delta) / first_window_delta) * 100.0;
    let adjusted_change = if adjusted.is_finite() {
        adjusted
    } else {
        trace!(now, past24h, past48h, "window change not finite, using 0");
        0.0
    };

    WindowChange {
        window_delta: second_window_delta,
        adjusted_change,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_percent_zero_cases() {
        assert_eq!(formatted_percent(0.0), FormattedPercent::zero());
        assert_eq!(formatted_percent(f64::NAN), FormattedPercent::zero());
        assert_eq!(formatted_percent(f64::INFINITY), FormattedPercent::zero());
        assert_eq!(formatted_percent(0.001).text, "0%");
        assert_eq!(formatted_percent(-0.001).text, "0%");
    }

    #[test]
    fn test_formatted_percent_near_zero() {
        let positive = formatted_percent(0.00005);
        assert_eq!(positive.text, "< 0.0001%");
        assert_eq!(positive.sentiment, Sentiment::Positive);

        let negative = formatted_percent(-0.00005);
        assert_eq!(negative.text, "< 0.0001%");
        assert_eq!(negative.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_formatted_percent_signs() {
        let up = formatted_percent(5.2);
        assert_eq!(up.text, "+5.20%");
        assert_eq!(up.sentiment, Sentiment::Positive);

        let down = formatted_percent(-5.0);
        assert_eq!(down.text, "-5.00%");
        assert_eq!(down.sentiment, Sentiment::Negative);

        assert_eq!(formatted_percent(0.125).text, "+0.13%");
    }

    #[test]
    fn test_get_percent_change() {
        assert_eq!(get_percent_change(110.0, 100.0), 10.0);
        assert_eq!(get_percent_change(50.0, 100.0), -50.0);
        assert_eq!(get_percent_change(5.0, 0.0), 0.0);
        assert_eq!(get_percent_change(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_get_2day_percent_change() {
        let flat_first_window = get_2day_percent_change(100.0, 80.0, 80.0);
        assert_eq!(<(f64, f64)>::from(flat_first_window), (20.0, 0.0));

        let steady = get_2day_percent_change(150.0, 100.0, 50.0);
        assert_eq!(steady.window_delta, 50.0);
        assert_eq!(steady.adjusted_change, 0.0);

        let accelerating = get_2day_percent_change(200.0, 100.0, 50.0);
        assert_eq!(accelerating.window_delta, 100.0);
        assert_eq!(accelerating.adjusted_change, 100.0);
    }
}
