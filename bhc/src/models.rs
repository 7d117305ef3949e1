// src/models.rs
mod reading;
mod tier;

pub use reading::HealthReading;
pub use tier::HealthTier;
