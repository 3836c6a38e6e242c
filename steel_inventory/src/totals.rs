use crate::models::{Field, SteelItem};
use rust_decimal::Decimal;
use serde::Serialize;

/// Running totals over the listed items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_weight: Decimal,
    pub total_length: Decimal,
}

impl Totals {
    /// Recomputes both sums from scratch.
    ///
    /// Returns the field whose sum does not fit in a `Decimal`.
    pub fn from_items(items: &[SteelItem]) -> Result<Self, Field> {
        items
            .iter()
            .try_fold(Self::default(), |acc, item| acc.checked_add(item.weight, item.length))
    }

    /// Totals with one more weight and length added, or the overflowing field
    pub fn checked_add(&self, weight: Decimal, length: Decimal) -> Result<Self, Field> {
        Ok(Self {
            total_weight: self
                .total_weight
                .checked_add(weight)
                .ok_or(Field::Weight)?,
            total_length: self
                .total_length
                .checked_add(length)
                .ok_or(Field::Length)?,
        })
    }

    /// Total weight with its unit suffix, e.g. "4.0 t"
    pub fn weight_text(&self) -> String {
        format!("{} t", self.total_weight)
    }

    /// Total length with its unit suffix, e.g. "15 m"
    pub fn length_text(&self) -> String {
        format!("{} m", self.total_length)
    }
}
