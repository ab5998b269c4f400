use tracing::debug;

use crate::error::ViewerError;
use crate::format::{LocaleNumberFormatter, NumberFormatter};
use crate::types::Fact;

/// Describe the change from `from` to `to`, ready for the caller to append
/// the period label.
///
/// When both values have the same sign the result is a percentage, e.g.
/// `"100.0% increase on "`. A sign change or a zero starting value makes the
/// percentage meaningless, so the starting value is given instead:
/// `"From US $ 1,000 in "`.
pub fn describe_change(
    from: &Fact,
    to: &Fact,
    formatter: &dyn NumberFormatter,
) -> Result<String, ViewerError> {
    let from_value = numeric(from)?;
    let to_value = numeric(to)?;

    // Strictly same sign, which also rules out a zero starting value.
    // Compared directly: the product of two tiny values underflows to zero.
    let same_sign =
        (from_value > 0.0 && to_value > 0.0) || (from_value < 0.0 && to_value < 0.0);
    if same_sign {
        let percent = (to_value - from_value) / from_value * 100.0;
        let direction = if to_value >= from_value {
            "increase"
        } else {
            "decrease"
        };
        return Ok(format!(
            "{:.*}% {} on ",
            formatter.change_precision(),
            percent.abs(),
            direction
        ));
    }

    debug!(
        from = %from.id,
        to = %to.id,
        "Percentage change not meaningful, describing starting value"
    );
    Ok(format!("From {} in ", formatter.format_value(from)?))
}

/// [`describe_change`] with the default formatter.
pub fn describe_change_default(from: &Fact, to: &Fact) -> Result<String, ViewerError> {
    describe_change(from, to, &LocaleNumberFormatter::default())
}

fn numeric(fact: &Fact) -> Result<f64, ViewerError> {
    fact.value
        .as_number()
        .ok_or_else(|| ViewerError::NonNumericValue {
            fact: fact.id.clone(),
        })
}
