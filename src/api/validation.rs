use crate::error::{AxisError, AxisResult};

use super::{AxisSpec, ScaleSpec};

pub(super) const MAX_TICK_LABEL_ANGLE: f64 = 90.0;

/// Rejects configurations that cannot describe a drawable axis.
pub(super) fn validate_axis_request(axis: &AxisSpec, scale: &ScaleSpec) -> AxisResult<()> {
    if scale.domain.is_empty() {
        return Err(AxisError::invalid("scale domain cannot be empty"));
    }

    if let Some(tick_total) = axis.tick_total.filter(|total| *total < 0) {
        return Err(AxisError::invalid(format!(
            "tick total must be >= 0, got {tick_total}"
        )));
    }

    if axis.orientation.dimension() != scale.dimension {
        return Err(AxisError::invalid(format!(
            "{:?} axis cannot lay out a {:?} scale",
            axis.orientation, scale.dimension
        )));
    }

    if !scale.range.0.is_finite() || !scale.range.1.is_finite() {
        return Err(AxisError::invalid("scale range must be finite"));
    }

    validate_length("tick size", axis.tick_size)?;
    validate_length("inner tick size", axis.tick_size_inner)?;
    validate_length("outer tick size", axis.tick_size_outer)?;
    validate_length("tick padding", axis.tick_padding)?;

    let angle = axis.tick_label_angle;
    if !angle.is_finite() || angle.abs() > MAX_TICK_LABEL_ANGLE {
        return Err(AxisError::invalid(format!(
            "tick label angle must be within [-90, 90] degrees, got {angle}"
        )));
    }

    Ok(())
}

fn validate_length(name: &str, value: Option<f64>) -> AxisResult<()> {
    match value {
        Some(length) if !length.is_finite() || length < 0.0 => Err(AxisError::invalid(format!(
            "{name} must be finite and >= 0, got {length}"
        ))),
        _ => Ok(()),
    }
}
