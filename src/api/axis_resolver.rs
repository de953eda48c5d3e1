use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DomainValue;
use crate::error::AxisResult;

use super::axis_label_format::apply_custom_format;
use super::axis_layout::{resolve_label_placement, resolve_title_anchor};
use super::axis_ticks::{AxisScale, tick_total_from_span};
use super::validation::validate_axis_request;
use super::{
    AxisOrientation, AxisResolverDefaults, AxisSpec, LabelPlacement, ScaleSpec, TickMarks,
    TitleAnchor,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTick {
    pub value: DomainValue,
    pub pixel_position: f64,
    pub label: String,
}

/// Drawable plan for one axis. All coordinates are pixels along the scale range,
/// with cross-axis offsets relative to the axis line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedAxis {
    pub orientation: AxisOrientation,
    pub ticks: Vec<ResolvedTick>,
    /// `(min, max)` pixel extent of the axis line.
    pub axis_line_pixel_span: (f64, f64),
    /// `+1.0` or `-1.0`: cross-axis direction away from the plot.
    pub outward_sign: f64,
    pub tick_marks: TickMarks,
    pub label_placement: LabelPlacement,
    pub title_anchor: TitleAnchor,
}

impl ResolvedAxis {
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|tick| tick.label.as_str()).collect()
    }

    #[must_use]
    pub fn pixel_positions(&self) -> Vec<f64> {
        self.ticks.iter().map(|tick| tick.pixel_position).collect()
    }
}

/// Turns axis and scale options into a [`ResolvedAxis`].
///
/// Holds only immutable fallbacks, so one resolver can be shared across threads
/// and reused for every option change.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisConfigResolver {
    defaults: AxisResolverDefaults,
}

impl AxisConfigResolver {
    #[must_use]
    pub fn new(defaults: AxisResolverDefaults) -> Self {
        Self { defaults }
    }

    #[must_use]
    pub fn defaults(self) -> AxisResolverDefaults {
        self.defaults
    }

    pub fn resolve(&self, axis: &AxisSpec, scale: &ScaleSpec) -> AxisResult<ResolvedAxis> {
        validate_axis_request(axis, scale)?;
        let axis_scale = AxisScale::from_spec(scale)?;

        let range = scale.range;
        let axis_line_pixel_span = (range.0.min(range.1), range.0.max(range.1));
        let tick_count = match axis.tick_total {
            Some(total) => usize::try_from(total).unwrap_or(0),
            None => tick_total_from_span(axis_line_pixel_span.1 - axis_line_pixel_span.0),
        };

        let ticks = axis_scale
            .tick_candidates(tick_count)?
            .into_iter()
            .map(|candidate| -> AxisResult<ResolvedTick> {
                let label = match &axis.tick_format {
                    Some(format) => apply_custom_format(format, &candidate.value)?,
                    None => candidate.default_label,
                };
                Ok(ResolvedTick {
                    value: candidate.value,
                    pixel_position: candidate.pixel_position,
                    label,
                })
            })
            .collect::<AxisResult<Vec<_>>>()?;

        let shared_size = axis.tick_size.unwrap_or(self.defaults.tick_size);
        let tick_marks = TickMarks {
            inner: axis.tick_size_inner.unwrap_or(shared_size),
            outer: axis.tick_size_outer.unwrap_or(shared_size),
        };
        let tick_padding = axis.tick_padding.unwrap_or(self.defaults.tick_padding);
        let label_placement = resolve_label_placement(
            axis.orientation,
            tick_marks,
            tick_padding,
            axis.tick_label_angle,
        );
        let title_anchor = resolve_title_anchor(
            axis.orientation,
            axis.title_position,
            range,
            axis.title.clone(),
        );

        debug!(
            orientation = ?axis.orientation,
            scale_kind = ?axis_scale.kind(),
            requested_ticks = tick_count,
            resolved_ticks = ticks.len(),
            "resolved axis"
        );

        Ok(ResolvedAxis {
            orientation: axis.orientation,
            ticks,
            axis_line_pixel_span,
            outward_sign: axis.orientation.outward_sign(),
            tick_marks,
            label_placement,
            title_anchor,
        })
    }
}

/// Resolves with [`AxisResolverDefaults::default`].
pub fn resolve_axis(axis: &AxisSpec, scale: &ScaleSpec) -> AxisResult<ResolvedAxis> {
    AxisConfigResolver::default().resolve(axis, scale)
}
