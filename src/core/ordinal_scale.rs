use indexmap::IndexSet;

use crate::core::DomainValue;
use crate::core::scale::validate_range;
use crate::core::types::DomainKey;
use crate::error::{AxisError, AxisResult};

/// Discrete categories placed at evenly spaced band centers, in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    keys: IndexSet<DomainKey>,
    categories: Vec<DomainValue>,
    range_start: f64,
    range_end: f64,
}

impl OrdinalScale {
    pub fn new(domain: &[DomainValue], range: (f64, f64)) -> AxisResult<Self> {
        if domain.is_empty() {
            return Err(AxisError::invalid("ordinal domain cannot be empty"));
        }
        validate_range(range)?;

        let mut keys = IndexSet::with_capacity(domain.len());
        let mut categories = Vec::with_capacity(domain.len());
        for value in domain {
            if keys.insert(value.key()?) {
                categories.push(value.clone());
            }
        }

        Ok(Self {
            keys,
            categories,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> &[DomainValue] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        (self.range_end - self.range_start).abs() / self.len() as f64
    }

    /// Band center of the `index`-th distinct category.
    #[must_use]
    pub fn center_at(&self, index: usize) -> f64 {
        let step = (self.range_end - self.range_start) / self.len() as f64;
        self.range_start + step * (index as f64 + 0.5)
    }

    pub fn map(&self, value: &DomainValue) -> AxisResult<f64> {
        let key = value.key()?;
        self.keys
            .get_index_of(&key)
            .map(|index| self.center_at(index))
            .ok_or_else(|| AxisError::invalid(format!("`{value}` is not in the ordinal domain")))
    }
}
