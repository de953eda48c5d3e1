//! Nice-number tick stepping shared by continuous scales.

use tracing::trace;

/// Upper bound on ticks generated for a single axis.
pub(crate) const MAX_GENERATED_TICKS: usize = 1_000;

/// A `{1, 2, 5} x 10^exponent` tick step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceStep {
    mantissa: u8,
    exponent: i32,
}

impl NiceStep {
    /// Rounds a raw step to the closest nice step (geometric midpoints).
    #[must_use]
    pub fn around(raw_step: f64) -> Self {
        if !raw_step.is_finite() || raw_step <= 0.0 {
            return Self {
                mantissa: 1,
                exponent: 0,
            };
        }
        let exponent = raw_step.log10().floor() as i32;
        let error = raw_step / 10_f64.powi(exponent);
        let (mantissa, exponent) = if error >= 50_f64.sqrt() {
            (1, exponent + 1)
        } else if error >= 10_f64.sqrt() {
            (5, exponent)
        } else if error >= 2_f64.sqrt() {
            (2, exponent)
        } else {
            (1, exponent)
        };
        Self { mantissa, exponent }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self.mantissa {
            1 => Self {
                mantissa: 2,
                ..self
            },
            2 => Self {
                mantissa: 5,
                ..self
            },
            _ => Self {
                mantissa: 1,
                exponent: self.exponent + 1,
            },
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.mantissa) * 10_f64.powi(self.exponent)
    }

    /// Decimal places needed to print multiples of this step exactly.
    #[must_use]
    pub fn precision(self) -> usize {
        if self.exponent < 0 {
            self.exponent.unsigned_abs() as usize
        } else {
            0
        }
    }

    /// Value of the `index`-th multiple, computed so that decimal steps such as
    /// `0.1` do not accumulate binary noise.
    fn multiple(self, index: i64) -> f64 {
        if self.exponent >= 0 {
            index as f64 * self.value()
        } else {
            index as f64 * f64::from(self.mantissa) / 10_f64.powi(-self.exponent)
        }
    }

    fn index_bounds(self, lo: f64, hi: f64) -> (i64, i64) {
        let (lo_units, hi_units) = if self.exponent >= 0 {
            (lo / self.value(), hi / self.value())
        } else {
            let inverse = 10_f64.powi(-self.exponent) / f64::from(self.mantissa);
            (lo * inverse, hi * inverse)
        };
        (
            snap(lo_units).ceil() as i64,
            snap(hi_units).floor() as i64,
        )
    }
}

/// Absorbs float noise such as `2.9999999999999996` before ceil/floor.
fn snap(units: f64) -> f64 {
    let rounded = units.round();
    if (units - rounded).abs() <= 1e-9 {
        rounded
    } else {
        units
    }
}

/// Nice tick values inside `[lo, hi]`, ascending, never more than `tick_count`.
///
/// The search starts at the step closest to `span / tick_count` and widens it
/// until the tick count fits.
pub(crate) fn nice_ticks(lo: f64, hi: f64, tick_count: usize) -> (Vec<f64>, NiceStep) {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    let limit = tick_count.clamp(1, MAX_GENERATED_TICKS);
    let mut step = NiceStep::around((hi - lo) / limit as f64);
    let limit = limit as i64;

    let (first, last) = loop {
        let (first, last) = step.index_bounds(lo, hi);
        let count = last.saturating_sub(first).saturating_add(1).max(0);
        if count <= limit {
            break (first, last);
        }
        trace!(step = step.value(), count, limit, "widening tick step");
        step = step.next();
    };

    // Snapped bounds may admit an edge multiple just outside the domain.
    let values = (first..=last)
        .map(|index| step.multiple(index))
        .filter(|value| (lo..=hi).contains(value))
        .collect();
    (values, step)
}

#[cfg(test)]
mod tests {
    use super::{NiceStep, nice_ticks};

    #[test]
    fn nice_step_rounds_to_one_two_five() {
        assert_eq!(NiceStep::around(10.0).value(), 10.0);
        assert_eq!(NiceStep::around(1.6).value(), 2.0);
        assert_eq!(NiceStep::around(4.0).value(), 5.0);
        assert_eq!(NiceStep::around(8.0).value(), 10.0);
    }

    #[test]
    fn step_widens_until_count_fits() {
        let (values, step) = nice_ticks(0.0, 100.0, 10);
        assert_eq!(step.value(), 20.0);
        assert_eq!(values, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn decimal_steps_stay_exact() {
        let (values, step) = nice_ticks(0.0, 1.0, 10);
        assert_eq!(step.precision(), 1);
        assert_eq!(values, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn near_integer_domain_end_drops_the_outside_multiple() {
        let (values, step) = nice_ticks(0.0, 2.999_999_999_5, 4);
        assert_eq!(step.value(), 1.0);
        assert_eq!(values, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn ticks_stay_inside_the_domain() {
        let (values, _) = nice_ticks(-3.7, 12.3, 4);
        assert!(values.iter().all(|value| (-3.7..=12.3).contains(value)));
        assert!(values.len() <= 4);
    }
}
