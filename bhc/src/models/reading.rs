// src/models/reading.rs
use crate::models::HealthTier;

/// A computed battery health percentage, rounded to two decimal places.
///
/// The value may exceed 100 when the reported full-charge capacity is above
/// the design capacity; that is a valid reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthReading {
    pub percent: f64,
}

impl HealthReading {
    #[must_use]
    pub fn tier(&self) -> HealthTier {
        HealthTier::from_percent(self.percent)
    }
}
