use crate::config::FormatConfig;
use crate::error::ViewerError;
use crate::types::Fact;

/// Upper bound on rendered fraction digits from a declared `decimals`.
pub const MAX_FRACTION_DIGITS: usize = 20;

/// Unit- and locale-aware rendering of numeric fact values.
///
/// The change formatter only sees numbers through this trait, so a host can
/// plug in its own locale handling.
pub trait NumberFormatter {
    /// Render the fact's value with its unit, e.g. `US $ 1,000`.
    fn format_value(&self, fact: &Fact) -> Result<String, ViewerError>;

    /// Fraction digits shown in change percentages.
    fn change_precision(&self) -> usize {
        1
    }
}

/// [`NumberFormatter`] driven by a [`FormatConfig`].
#[derive(Debug, Clone, Default)]
pub struct LocaleNumberFormatter {
    config: FormatConfig,
}

impl LocaleNumberFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Render a bare number with digit grouping.
    ///
    /// Positive `decimals` fixes the fraction digits (at most
    /// [`MAX_FRACTION_DIGITS`]), zero or negative drops them, and no
    /// `decimals` keeps the shortest exact rendering.
    pub fn format_number(&self, value: f64, decimals: Option<i32>) -> String {
        let digits = match decimals {
            Some(d) if d > 0 => (d as usize).min(MAX_FRACTION_DIGITS),
            Some(_) => 0,
            None => shortest_fraction_digits(value),
        };

        let text = format!("{:.*}", digits, value.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut out = String::new();
        // Values that round to zero lose their sign
        if value.is_sign_negative() && text.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, &self.config.grouping_separator));
        if let Some(frac_part) = frac_part {
            out.push_str(&self.config.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

impl NumberFormatter for LocaleNumberFormatter {
    fn format_value(&self, fact: &Fact) -> Result<String, ViewerError> {
        let value = fact
            .value
            .as_number()
            .ok_or_else(|| ViewerError::NonNumericValue {
                fact: fact.id.clone(),
            })?;
        let number = self.format_number(value, fact.decimals);

        let formatted = match &fact.unit {
            Some(unit) => match unit.currency_code() {
                Some(code) => format!("{} {}", self.config.currency_symbol(code), number),
                None if unit.label().is_empty() => number,
                None => format!("{} {}", number, unit.label()),
            },
            None => number,
        };
        Ok(formatted)
    }

    fn change_precision(&self) -> usize {
        self.config.change_precision
    }
}

fn shortest_fraction_digits(value: f64) -> usize {
    let text = format!("{}", value.abs());
    text.split_once('.').map_or(0, |(_, frac)| frac.len())
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
