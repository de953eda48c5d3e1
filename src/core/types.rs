use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{AxisError, AxisResult};

/// Data dimension a scale is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisDimension {
    #[default]
    X,
    Y,
}

/// Raw value of a scale domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainValue {
    Number(f64),
    Time(DateTime<Utc>),
    Category(String),
}

impl DomainValue {
    #[must_use]
    pub fn category(label: impl Into<String>) -> Self {
        Self::Category(label.into())
    }

    /// Converts an exact decimal (e.g. a price) into a numeric domain value.
    pub fn from_decimal(value: Decimal) -> AxisResult<Self> {
        value
            .to_f64()
            .map(Self::Number)
            .ok_or_else(|| AxisError::invalid(format!("{value} cannot be represented as f64")))
    }

    /// Builds a time value from unix epoch milliseconds.
    pub fn from_timestamp_millis(millis: i64) -> AxisResult<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self::Time)
            .ok_or_else(|| AxisError::invalid(format!("timestamp {millis} ms is out of range")))
    }

    /// Numeric view used by linear scales.
    pub fn as_number(&self) -> AxisResult<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(*value),
            Self::Number(_) => Err(AxisError::invalid("domain numbers must be finite")),
            Self::Time(_) => Err(AxisError::invalid(
                "time values require a time scale, not a linear one",
            )),
            Self::Category(label) => Err(AxisError::invalid(format!(
                "category `{label}` requires an ordinal scale"
            ))),
        }
    }

    /// Epoch-millisecond view used by time scales. Plain numbers are taken as
    /// epoch milliseconds.
    pub fn as_epoch_millis(&self) -> AxisResult<f64> {
        match self {
            Self::Time(time) => Ok(time.timestamp_millis() as f64),
            Self::Number(value) if value.is_finite() => Ok(*value),
            Self::Number(_) => Err(AxisError::invalid("domain timestamps must be finite")),
            Self::Category(label) => Err(AxisError::invalid(format!(
                "category `{label}` requires an ordinal scale"
            ))),
        }
    }

    pub(crate) fn key(&self) -> AxisResult<DomainKey> {
        match self {
            Self::Number(value) if value.is_finite() => Ok(DomainKey::Number(OrderedFloat(
                // -0.0 and 0.0 are one category.
                if *value == 0.0 { 0.0 } else { *value },
            ))),
            Self::Number(_) => Err(AxisError::invalid("category numbers must be finite")),
            Self::Time(time) => Ok(DomainKey::Time(time.timestamp_millis())),
            Self::Category(label) => Ok(DomainKey::Category(label.clone())),
        }
    }
}

impl From<f64> for DomainValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<DateTime<Utc>> for DomainValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Time(value)
    }
}

impl From<&str> for DomainValue {
    fn from(value: &str) -> Self {
        Self::Category(value.to_owned())
    }
}

impl From<String> for DomainValue {
    fn from(value: String) -> Self {
        Self::Category(value)
    }
}

impl fmt::Display for DomainValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Time(time) => f.write_str(&time.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Self::Category(label) => f.write_str(label),
        }
    }
}

/// Hashable identity of a domain value, used to dedupe ordinal categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum DomainKey {
    Number(OrderedFloat<f64>),
    Time(i64),
    Category(String),
}
