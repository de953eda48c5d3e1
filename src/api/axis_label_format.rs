use chrono::{DateTime, Utc};
use tracing::warn;

use crate::core::{DomainValue, NiceStep, TimeInterval, TimeUnit};
use crate::error::{AxisError, AxisResult};

use super::TickFormatFn;

/// Decimal label for a linear tick, printed with the precision its step needs.
pub(super) fn format_linear_label(value: f64, step: Option<NiceStep>) -> String {
    // Avoid printing "-0" for ticks that land on zero from below.
    let value = if value == 0.0 { 0.0 } else { value };
    match step {
        Some(step) => format!("{value:.precision$}", precision = step.precision()),
        None => format!("{value}"),
    }
}

pub(super) fn time_label_pattern(interval: Option<TimeInterval>) -> &'static str {
    let Some(interval) = interval else {
        return "%Y-%m-%d %H:%M:%S";
    };
    match interval.unit {
        TimeUnit::Millisecond => "%H:%M:%S%.3f",
        TimeUnit::Second => "%H:%M:%S",
        TimeUnit::Minute | TimeUnit::Hour => "%H:%M",
        TimeUnit::Day | TimeUnit::Week => "%b %d",
        TimeUnit::Month => "%b %Y",
        TimeUnit::Year => "%Y",
    }
}

pub(super) fn format_time_label(time: DateTime<Utc>, interval: Option<TimeInterval>) -> String {
    time.format(time_label_pattern(interval)).to_string()
}

pub(super) fn format_category_label(value: &DomainValue) -> String {
    match value {
        DomainValue::Number(number) => format_linear_label(*number, None),
        other => other.to_string(),
    }
}

/// Runs a caller formatter, turning its failure into a configuration error.
pub(super) fn apply_custom_format(format: &TickFormatFn, value: &DomainValue) -> AxisResult<String> {
    format(value).map_err(|err| {
        warn!(value = %value, error = %err, "tick formatter rejected a domain value");
        AxisError::invalid(format!("tick format failed for `{value}`: {err}"))
    })
}
