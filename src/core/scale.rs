use serde::{Deserialize, Serialize};

use crate::core::ticks::{NiceStep, nice_ticks};
use crate::error::{AxisError, AxisResult};

/// Half-width added on each side of a single-value numeric domain.
pub const DEGENERATE_DOMAIN_PADDING: f64 = 0.5;

/// Relative half-width used when the fixed padding is lost to rounding.
const DEGENERATE_DOMAIN_RELATIVE_PADDING: f64 = 1e-9;

/// Continuous numeric domain mapped linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> AxisResult<Self> {
        let (domain_start, domain_end) =
            widen_degenerate_domain(domain, DEGENERATE_DOMAIN_PADDING)?;
        validate_range(range)?;

        Ok(Self {
            domain_start,
            domain_end,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps an in-domain value, clamped to the range against rounding drift.
    #[must_use]
    pub(crate) fn map_within_range(self, value: f64) -> f64 {
        let (low, high) = if self.range_start <= self.range_end {
            (self.range_start, self.range_end)
        } else {
            (self.range_end, self.range_start)
        };
        self.map(value).clamp(low, high)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Nice tick values ordered from domain start to domain end, plus the step
    /// they were generated with.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> (Vec<f64>, Option<NiceStep>) {
        if tick_count == 0 {
            return (Vec::new(), None);
        }
        if tick_count == 1 {
            return (vec![self.domain_start], None);
        }

        let (mut values, step) = nice_ticks(self.domain_start, self.domain_end, tick_count);
        if self.domain_start > self.domain_end {
            values.reverse();
        }
        (values, Some(step))
    }
}

pub(crate) fn validate_range(range: (f64, f64)) -> AxisResult<()> {
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(AxisError::invalid("scale range must be finite"));
    }
    if !(range.1 - range.0).is_finite() {
        return Err(AxisError::invalid("scale range span overflows f64"));
    }
    Ok(())
}

pub(crate) fn widen_degenerate_domain(domain: (f64, f64), padding: f64) -> AxisResult<(f64, f64)> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return Err(AxisError::invalid("scale domain must be finite"));
    }

    let domain = if domain.0 == domain.1 {
        let value = domain.0;
        let widened = (value - padding, value + padding);
        if widened.0 < widened.1 {
            widened
        } else {
            let relative = value.abs() * DEGENERATE_DOMAIN_RELATIVE_PADDING;
            (value - relative, value + relative)
        }
    } else {
        domain
    };

    if !(domain.1 - domain.0).is_finite() {
        return Err(AxisError::invalid(format!(
            "scale domain span ({}, {}) overflows f64",
            domain.0, domain.1
        )));
    }
    Ok(domain)
}
