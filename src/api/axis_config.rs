use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AxisDimension, DomainValue};
use crate::error::{AxisResult, TickFormatError};

/// Caller-supplied tick label formatter. Must be pure for resolution to stay
/// deterministic.
pub type TickFormatFn =
    Arc<dyn Fn(&DomainValue) -> Result<String, TickFormatError> + Send + Sync + 'static>;

/// Side of the plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisOrientation {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl AxisOrientation {
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Dimension whose scale this orientation lays ticks along.
    #[must_use]
    pub fn dimension(self) -> AxisDimension {
        if self.is_horizontal() {
            AxisDimension::X
        } else {
            AxisDimension::Y
        }
    }

    /// Cross-axis direction pointing away from the plot area, in screen
    /// coordinates where y grows downward.
    #[must_use]
    pub fn outward_sign(self) -> f64 {
        match self {
            Self::Bottom | Self::Right => 1.0,
            Self::Top | Self::Left => -1.0,
        }
    }
}

/// Where the axis title sits along the axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TitlePosition {
    Start,
    Middle,
    #[default]
    End,
}

/// Immutable axis options for one resolution.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub title: Option<String>,
    pub title_position: TitlePosition,
    /// Target tick count. `None` derives it from the axis pixel span.
    pub tick_total: Option<i64>,
    /// Shared fallback for both tick sizes.
    pub tick_size: Option<f64>,
    pub tick_size_inner: Option<f64>,
    pub tick_size_outer: Option<f64>,
    pub tick_padding: Option<f64>,
    /// Label rotation in degrees, within `[-90, 90]`.
    pub tick_label_angle: f64,
    #[serde(skip)]
    pub tick_format: Option<TickFormatFn>,
}

impl fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisSpec")
            .field("orientation", &self.orientation)
            .field("title", &self.title)
            .field("title_position", &self.title_position)
            .field("tick_total", &self.tick_total)
            .field("tick_size", &self.tick_size)
            .field("tick_size_inner", &self.tick_size_inner)
            .field("tick_size_outer", &self.tick_size_outer)
            .field("tick_padding", &self.tick_padding)
            .field("tick_label_angle", &self.tick_label_angle)
            .field("tick_format", &self.tick_format.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl AxisSpec {
    #[must_use]
    pub fn new(orientation: AxisOrientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_title_position(mut self, title_position: TitlePosition) -> Self {
        self.title_position = title_position;
        self
    }

    #[must_use]
    pub fn with_tick_total(mut self, tick_total: i64) -> Self {
        self.tick_total = Some(tick_total);
        self
    }

    #[must_use]
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = Some(tick_size);
        self
    }

    #[must_use]
    pub fn with_tick_size_inner(mut self, tick_size_inner: f64) -> Self {
        self.tick_size_inner = Some(tick_size_inner);
        self
    }

    #[must_use]
    pub fn with_tick_size_outer(mut self, tick_size_outer: f64) -> Self {
        self.tick_size_outer = Some(tick_size_outer);
        self
    }

    #[must_use]
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = Some(tick_padding);
        self
    }

    #[must_use]
    pub fn with_tick_label_angle(mut self, degrees: f64) -> Self {
        self.tick_label_angle = degrees;
        self
    }

    #[must_use]
    pub fn with_tick_format<F>(mut self, format: F) -> Self
    where
        F: Fn(&DomainValue) -> Result<String, TickFormatError> + Send + Sync + 'static,
    {
        self.tick_format = Some(Arc::new(format));
        self
    }
}

/// Mapping family of a scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    Time,
    Ordinal,
}

/// Immutable scale description for one resolution.
///
/// For linear and time scales the first and last domain values are the mapped
/// endpoints; use [`ScaleSpec::linear_from_values`] or
/// [`ScaleSpec::time_from_values`] to fit raw data instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    pub kind: ScaleKind,
    pub dimension: AxisDimension,
    pub domain: Vec<DomainValue>,
    pub range: (f64, f64),
}

impl ScaleSpec {
    #[must_use]
    pub fn new(
        kind: ScaleKind,
        dimension: AxisDimension,
        domain: Vec<DomainValue>,
        range: (f64, f64),
    ) -> Self {
        Self {
            kind,
            dimension,
            domain,
            range,
        }
    }

    #[must_use]
    pub fn linear(dimension: AxisDimension, domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::new(
            ScaleKind::Linear,
            dimension,
            vec![DomainValue::Number(domain.0), DomainValue::Number(domain.1)],
            range,
        )
    }

    #[must_use]
    pub fn time(
        dimension: AxisDimension,
        domain: (DomainValue, DomainValue),
        range: (f64, f64),
    ) -> Self {
        Self::new(ScaleKind::Time, dimension, vec![domain.0, domain.1], range)
    }

    #[must_use]
    pub fn ordinal<I, V>(dimension: AxisDimension, categories: I, range: (f64, f64)) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<DomainValue>,
    {
        Self::new(
            ScaleKind::Ordinal,
            dimension,
            categories.into_iter().map(Into::into).collect(),
            range,
        )
    }

    /// Linear scale spanning the min/max extent of `values`.
    ///
    /// Non-finite values are kept so that resolution reports them.
    #[must_use]
    pub fn linear_from_values(dimension: AxisDimension, values: &[f64], range: (f64, f64)) -> Self {
        let domain = match extent(values.iter().copied()) {
            Some((min, max)) => vec![DomainValue::Number(min), DomainValue::Number(max)],
            None => values.iter().copied().map(DomainValue::Number).collect(),
        };
        Self::new(ScaleKind::Linear, dimension, domain, range)
    }

    /// Linear scale spanning the extent of exact decimal inputs such as prices.
    pub fn linear_from_decimals(
        dimension: AxisDimension,
        values: &[Decimal],
        range: (f64, f64),
    ) -> AxisResult<Self> {
        let numbers = values
            .iter()
            .map(|value| DomainValue::from_decimal(*value)?.as_number())
            .collect::<AxisResult<Vec<_>>>()?;
        Ok(Self::linear_from_values(dimension, &numbers, range))
    }

    /// Time scale spanning the earliest and latest of `values`.
    #[must_use]
    pub fn time_from_values(
        dimension: AxisDimension,
        values: &[chrono::DateTime<chrono::Utc>],
        range: (f64, f64),
    ) -> Self {
        let domain = match (values.iter().min(), values.iter().max()) {
            (Some(min), Some(max)) => vec![DomainValue::Time(*min), DomainValue::Time(*max)],
            _ => Vec::new(),
        };
        Self::new(ScaleKind::Time, dimension, domain, range)
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        if !value.is_finite() {
            return None;
        }
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(value), max.max(value)),
            None => (value, value),
        });
    }
    bounds
}

/// Fallback sizes used when an [`AxisSpec`] leaves them unset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisResolverDefaults {
    pub tick_size: f64,
    pub tick_padding: f64,
}

impl Default for AxisResolverDefaults {
    fn default() -> Self {
        Self {
            tick_size: 6.0,
            tick_padding: 8.0,
        }
    }
}
