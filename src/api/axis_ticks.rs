use crate::core::{DomainValue, LinearScale, OrdinalScale, TimeScale};
use crate::error::{AxisError, AxisResult};

use super::axis_label_format::{format_category_label, format_linear_label, format_time_label};
use super::{ScaleKind, ScaleSpec};

pub(super) const AXIS_SPAN_SMALL_PX: f64 = 300.0;
pub(super) const AXIS_SPAN_LARGE_PX: f64 = 700.0;

/// Tick count used when the axis spec leaves `tick_total` unset.
pub(super) fn tick_total_from_span(axis_span_px: f64) -> usize {
    if axis_span_px < AXIS_SPAN_SMALL_PX {
        5
    } else if axis_span_px < AXIS_SPAN_LARGE_PX {
        10
    } else {
        20
    }
}

/// A tick before custom formatting: value, pixel position, built-in label.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct TickCandidate {
    pub(super) value: DomainValue,
    pub(super) pixel_position: f64,
    pub(super) default_label: String,
}

/// Concrete scale built from a [`ScaleSpec`].
#[derive(Debug, Clone, PartialEq)]
pub(super) enum AxisScale {
    Linear(LinearScale),
    Time(TimeScale),
    Ordinal(OrdinalScale),
}

impl AxisScale {
    pub(super) fn from_spec(spec: &ScaleSpec) -> AxisResult<Self> {
        let (first, last) = match (spec.domain.first(), spec.domain.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AxisError::invalid("scale domain cannot be empty")),
        };

        match spec.kind {
            ScaleKind::Linear => {
                for value in &spec.domain {
                    value.as_number()?;
                }
                let domain = (first.as_number()?, last.as_number()?);
                Ok(Self::Linear(LinearScale::new(domain, spec.range)?))
            }
            ScaleKind::Time => {
                for value in &spec.domain {
                    value.as_epoch_millis()?;
                }
                let domain = (first.as_epoch_millis()?, last.as_epoch_millis()?);
                Ok(Self::Time(TimeScale::new(domain, spec.range)?))
            }
            ScaleKind::Ordinal => Ok(Self::Ordinal(OrdinalScale::new(&spec.domain, spec.range)?)),
        }
    }

    #[must_use]
    pub(super) fn kind(&self) -> ScaleKind {
        match self {
            Self::Linear(_) => ScaleKind::Linear,
            Self::Time(_) => ScaleKind::Time,
            Self::Ordinal(_) => ScaleKind::Ordinal,
        }
    }

    /// Ticks in domain order. Ordinal scales ignore `tick_count`.
    pub(super) fn tick_candidates(&self, tick_count: usize) -> AxisResult<Vec<TickCandidate>> {
        match self {
            Self::Linear(scale) => {
                let (values, step) = scale.ticks(tick_count);
                Ok(values
                    .into_iter()
                    .map(|value| TickCandidate {
                        value: DomainValue::Number(value),
                        pixel_position: scale.map_within_range(value),
                        default_label: format_linear_label(value, step),
                    })
                    .collect())
            }
            Self::Time(scale) => {
                let (times, interval) = scale.ticks(tick_count)?;
                Ok(times
                    .into_iter()
                    .map(|time| TickCandidate {
                        value: DomainValue::Time(time),
                        pixel_position: scale.map_within_range(time),
                        default_label: format_time_label(time, interval),
                    })
                    .collect())
            }
            Self::Ordinal(scale) => Ok(scale
                .categories()
                .iter()
                .enumerate()
                .map(|(index, category)| TickCandidate {
                    value: category.clone(),
                    pixel_position: scale.center_at(index),
                    default_label: format_category_label(category),
                })
                .collect()),
        }
    }
}
