use serde::{Deserialize, Serialize};

use super::{AxisOrientation, TitlePosition};

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextBaseline {
    Hanging,
    Middle,
    Alphabetic,
}

/// Resolved tick mark lengths in pixels.
///
/// `inner` extends grid-ward from every tick; `outer` caps both ends of the
/// axis line and pushes labels away from the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMarks {
    pub inner: f64,
    pub outer: f64,
}

/// Label anchoring shared by every tick of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub text_anchor: TextAnchor,
    pub baseline: TextBaseline,
    /// `(dx, dy)` from the tick's point on the axis line to the label anchor.
    pub offset: (f64, f64),
    /// Rotation applied around the label anchor.
    pub angle_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAnchor {
    /// Pixel coordinate along the axis.
    pub position: f64,
    pub text_anchor: TextAnchor,
    pub text: Option<String>,
}

pub(super) fn resolve_label_placement(
    orientation: AxisOrientation,
    tick_marks: TickMarks,
    tick_padding: f64,
    angle_degrees: f64,
) -> LabelPlacement {
    let rotated = angle_degrees != 0.0;
    let text_anchor = match orientation {
        AxisOrientation::Left => TextAnchor::End,
        AxisOrientation::Right => TextAnchor::Start,
        AxisOrientation::Bottom if rotated => TextAnchor::End,
        AxisOrientation::Top if rotated => TextAnchor::Start,
        AxisOrientation::Bottom | AxisOrientation::Top => TextAnchor::Middle,
    };
    let baseline = match orientation {
        AxisOrientation::Left | AxisOrientation::Right => TextBaseline::Middle,
        AxisOrientation::Bottom if !rotated => TextBaseline::Hanging,
        AxisOrientation::Bottom | AxisOrientation::Top => TextBaseline::Alphabetic,
    };

    let distance = orientation.outward_sign() * (tick_marks.outer + tick_padding);
    let offset = if orientation.is_horizontal() {
        (0.0, distance)
    } else {
        (distance, 0.0)
    };

    LabelPlacement {
        text_anchor,
        baseline,
        offset,
        angle_degrees,
    }
}

pub(super) fn resolve_title_anchor(
    orientation: AxisOrientation,
    title_position: TitlePosition,
    range: (f64, f64),
    title: Option<String>,
) -> TitleAnchor {
    let (position, text_anchor) = match title_position {
        TitlePosition::Start => (range.0, TextAnchor::Start),
        TitlePosition::Middle => ((range.0 + range.1) / 2.0, TextAnchor::Middle),
        TitlePosition::End => (range.1, TextAnchor::End),
    };
    // Vertical titles are read rotated, so the anchor flips.
    let text_anchor = if orientation.is_horizontal() {
        text_anchor
    } else {
        match text_anchor {
            TextAnchor::Start => TextAnchor::End,
            TextAnchor::Middle => TextAnchor::Middle,
            TextAnchor::End => TextAnchor::Start,
        }
    };

    TitleAnchor {
        position,
        text_anchor,
        text: title,
    }
}

#[cfg(test)]
mod tests {
    use super::{TextAnchor, TextBaseline, TickMarks, resolve_label_placement};
    use crate::api::AxisOrientation;

    const MARKS: TickMarks = TickMarks {
        inner: 6.0,
        outer: 4.0,
    };

    #[test]
    fn left_labels_sit_left_of_the_axis() {
        let placement = resolve_label_placement(AxisOrientation::Left, MARKS, 8.0, 0.0);
        assert_eq!(placement.offset, (-12.0, 0.0));
        assert_eq!(placement.text_anchor, TextAnchor::End);
        assert_eq!(placement.baseline, TextBaseline::Middle);
    }

    #[test]
    fn rotated_bottom_labels_anchor_at_end() {
        let flat = resolve_label_placement(AxisOrientation::Bottom, MARKS, 8.0, 0.0);
        let tilted = resolve_label_placement(AxisOrientation::Bottom, MARKS, 8.0, -45.0);
        assert_eq!(flat.text_anchor, TextAnchor::Middle);
        assert_eq!(flat.baseline, TextBaseline::Hanging);
        assert_eq!(tilted.text_anchor, TextAnchor::End);
        assert_eq!(tilted.baseline, TextBaseline::Alphabetic);
        assert_eq!(tilted.offset, (0.0, 12.0));
    }

    #[test]
    fn top_labels_sit_above_the_axis() {
        let placement = resolve_label_placement(AxisOrientation::Top, MARKS, 2.0, 30.0);
        assert_eq!(placement.offset, (0.0, -6.0));
        assert_eq!(placement.text_anchor, TextAnchor::Start);
    }
}
